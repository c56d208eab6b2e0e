//! Error types for the pattern demos.
//!
//! This module defines the error types used throughout the crate,
//! organized by subsystem: payments and configuration. The observer demo
//! has no failure paths and therefore no error type of its own.

use thiserror::Error;

/// Errors related to processing a payment through a [`PaymentContext`].
///
/// [`PaymentContext`]: crate::strategy::PaymentContext
#[derive(Debug, Error)]
pub enum PaymentError {
    /// `process_payment` was called before any strategy was selected.
    #[error("no payment strategy selected")]
    NoStrategySelected,

    /// The amount is not a finite, strictly positive number.
    #[error("invalid payment amount: {0}")]
    InvalidAmount(f64),

    /// Failed to write the payment receipt to the output sink.
    #[error("failed to write receipt: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors related to command-line and runtime configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The log level string is not one of trace, debug, info, warn, error.
    #[error("invalid log level: {0}")]
    InvalidLogLevel(String),

    /// The tracing subscriber could not be installed.
    #[error("failed to initialize tracing subscriber: {0}")]
    TracingInit(String),
}

/// A unified error type for the entire crate.
#[derive(Debug, Error)]
pub enum Error {
    /// Payment-related error.
    #[error("payment error: {0}")]
    Payment(#[from] PaymentError),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// A specialized Result type for pattern-demos operations.
pub type Result<T> = std::result::Result<T, Error>;
