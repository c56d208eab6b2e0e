//! Weather readings.

use std::ops::Range;

use rand::Rng;

/// Range of generated temperatures, in °F.
pub const TEMPERATURE_RANGE: Range<f64> = -50.0..50.0;
/// Range of generated relative humidity, in percent.
pub const HUMIDITY_RANGE: Range<f64> = 0.0..100.0;
/// Range of generated pressure values.
pub const PRESSURE_RANGE: Range<f64> = 0.0..50.0;

/// One set of weather readings.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Measurement {
    /// Temperature in °F.
    pub temperature: f64,
    /// Relative humidity in percent.
    pub humidity: f64,
    /// Barometric pressure.
    pub pressure: f64,
}

impl Measurement {
    /// Creates a measurement from explicit values.
    pub fn new(temperature: f64, humidity: f64, pressure: f64) -> Self {
        Self {
            temperature,
            humidity,
            pressure,
        }
    }

    /// Draws each field independently and uniformly from its range.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            temperature: rng.gen_range(TEMPERATURE_RANGE),
            humidity: rng.gen_range(HUMIDITY_RANGE),
            pressure: rng.gen_range(PRESSURE_RANGE),
        }
    }
}
