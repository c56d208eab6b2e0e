//! The measurement loop driving a [`WeatherData`] subject.

use std::thread;

use rand::Rng;
use tracing::{debug, info};

use super::WeatherData;
use crate::config::StationConfig;

/// Runs `config.cycles` measurement cycles, pausing `config.interval`
/// between consecutive cycles.
///
/// Returns the number of cycles run.
pub fn run_station<R: Rng>(weather_data: &mut WeatherData<R>, config: &StationConfig) -> u32 {
    info!(
        cycles = config.cycles,
        interval_ms = config.interval.as_millis(),
        observers = weather_data.observer_count(),
        "starting weather station"
    );

    for cycle in 0..config.cycles {
        if cycle > 0 && !config.interval.is_zero() {
            thread::sleep(config.interval);
        }
        weather_data.measurements_changed();
        debug!(cycle = cycle + 1, "measurement cycle complete");
    }

    info!("weather station finished");
    config.cycles
}
