//! Observer pattern demo: a weather station pushing readings to displays.
//!
//! # Architecture
//!
//! The observer module is organized into:
//! - `measurement`: the reading pushed to observers and how it is generated
//! - `subject`: [`WeatherData`], which owns the reading and the observer list
//! - `display`: [`CurrentConditionsDisplay`], a concrete observer
//! - `station`: the paced loop that drives measurement cycles
//!
//! The subject never owns its observers. It keeps [`Weak`] handles, so a
//! display dropped by its owner simply stops receiving updates.
//!
//! # Usage
//!
//! ```
//! use pattern_demos::observer::{CurrentConditionsDisplay, WeatherData};
//!
//! let mut weather_data = WeatherData::with_seed(7);
//! let display = CurrentConditionsDisplay::with_writer(&mut weather_data, Vec::new());
//! weather_data.measurements_changed();
//! assert!(display.borrow().render().starts_with("Current conditions:"));
//! ```
//!
//! [`Weak`]: std::rc::Weak

pub mod display;
pub mod measurement;
pub mod station;
pub mod subject;

use std::cell::RefCell;
use std::rc::Rc;

pub use display::CurrentConditionsDisplay;
pub use measurement::Measurement;
pub use station::run_station;
pub use subject::WeatherData;

/// A component that receives pushed measurements from a subject.
pub trait Observer {
    /// Called once per notification with the subject's current values.
    fn update(&mut self, temperature: f64, humidity: f64, pressure: f64);
}

/// A component that can render its current state.
pub trait DisplayElement {
    /// Emits the current state to the element's output.
    fn display(&mut self);
}

/// Shared handle to a type-erased observer.
///
/// Callers keep the strong handle; subjects only ever hold its downgraded form.
pub type ObserverHandle = Rc<RefCell<dyn Observer>>;
