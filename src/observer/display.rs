//! Displays that observe [`WeatherData`].

use std::cell::RefCell;
use std::io::{self, Stdout, Write};
use std::rc::Rc;

use rand::Rng;
use tracing::warn;

use super::{DisplayElement, Observer, WeatherData};

/// Shows the latest temperature and humidity.
///
/// Pressure is pushed to this display like any other value but is not kept.
#[derive(Debug)]
pub struct CurrentConditionsDisplay<W: Write = Stdout> {
    temperature: f64,
    humidity: f64,
    out: W,
}

impl CurrentConditionsDisplay<Stdout> {
    /// Creates a display printing to stdout and registers it with `weather_data`.
    pub fn new<R: Rng>(weather_data: &mut WeatherData<R>) -> Rc<RefCell<Self>> {
        Self::with_writer(weather_data, io::stdout())
    }
}

impl<W: Write + 'static> CurrentConditionsDisplay<W> {
    /// Creates a display writing to `out` and registers it with `weather_data`.
    ///
    /// The returned handle is the only strong reference; dropping it
    /// unsubscribes the display.
    pub fn with_writer<R: Rng>(weather_data: &mut WeatherData<R>, out: W) -> Rc<RefCell<Self>> {
        let display = Rc::new(RefCell::new(Self {
            temperature: 0.0,
            humidity: 0.0,
            out,
        }));
        weather_data.register_observer(display.clone());
        display
    }
}

impl<W: Write> CurrentConditionsDisplay<W> {
    /// Formats the cached values without writing them.
    pub fn render(&self) -> String {
        format!(
            "Current conditions: {:.2}°F and {:.2}% humidity",
            self.temperature, self.humidity
        )
    }

    /// The sink this display writes to.
    pub fn writer(&self) -> &W {
        &self.out
    }
}

impl<W: Write> Observer for CurrentConditionsDisplay<W> {
    fn update(&mut self, temperature: f64, humidity: f64, _pressure: f64) {
        self.temperature = temperature;
        self.humidity = humidity;
        self.display();
    }
}

impl<W: Write> DisplayElement for CurrentConditionsDisplay<W> {
    fn display(&mut self) {
        let line = self.render();
        if let Err(e) = writeln!(self.out, "{line}") {
            warn!(error = %e, "failed to write current conditions");
        }
    }
}
