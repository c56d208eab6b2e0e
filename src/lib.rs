//! Pattern Demos
//!
//! Two small, independent illustrations of classic object-oriented design
//! patterns, written as a library with one driver binary each.
//!
//! # Overview
//!
//! This library provides:
//! - An Observer demo: a weather data subject pushing random readings to
//!   display components it does not own
//! - A Strategy demo: a payment context delegating to an interchangeable
//!   payment method
//! - Shared logging setup for the binaries
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────┐  update(t, h, p)  ┌───────────────────────────┐
//! │   WeatherData    │──────────────────►│ CurrentConditionsDisplay  │
//! │    (subject)     │   Weak handles    │        (observer)         │
//! └──────────────────┘                   └───────────────────────────┘
//!
//! ┌──────────────────┐     pay(amount)   ┌───────────────────────────┐
//! │  PaymentContext  │──────────────────►│ CreditCard / PayPal / Cash│
//! │    (context)     │  Box<dyn ...>     │        (strategy)         │
//! └──────────────────┘                   └───────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`error`] - Error types for the entire crate
//! - [`config`] - Weather station loop settings
//! - [`logging`] - Tracing subscriber setup shared by the binaries
//! - [`observer`] - Observer pattern demo
//! - [`strategy`] - Strategy pattern demo

// Enforce documentation and other quality attributes
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
// Allow some pedantic lints that are too strict
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod config;
pub mod error;
pub mod logging;
pub mod observer;
pub mod strategy;

// Re-export commonly used types at the crate root
pub use error::{Error, Result};
