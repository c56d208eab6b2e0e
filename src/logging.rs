//! Logging setup shared by the demo binaries.
//!
//! Both binaries flatten [`LogArgs`] into their own argument struct and call
//! [`init_tracing`] before doing anything else. Logs are written to stderr so
//! that stdout carries only the demo output.

use clap::{Args, ValueEnum};
use tracing::Level;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::error::ConfigError;

/// Output format for log records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

/// Logging options common to every binary.
#[derive(Args, Debug, Clone)]
pub struct LogArgs {
    /// Log level: trace, debug, info, warn, error.
    #[arg(long, default_value = "warn")]
    pub log_level: String,

    /// Log output format.
    #[arg(long, value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,
}

impl LogArgs {
    /// Parses the log level string into a tracing Level.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidLogLevel`] for anything other than the
    /// five tracing levels (case-insensitive).
    pub fn parse_log_level(&self) -> Result<Level, ConfigError> {
        match self.log_level.to_lowercase().as_str() {
            "trace" => Ok(Level::TRACE),
            "debug" => Ok(Level::DEBUG),
            "info" => Ok(Level::INFO),
            "warn" => Ok(Level::WARN),
            "error" => Ok(Level::ERROR),
            other => Err(ConfigError::InvalidLogLevel(other.to_string())),
        }
    }

    /// Parses the level and installs the global subscriber.
    ///
    /// # Errors
    ///
    /// See [`LogArgs::parse_log_level`] and [`init_tracing`].
    pub fn init(&self, binary: &str) -> Result<(), ConfigError> {
        let level = self.parse_log_level()?;
        init_tracing(binary, level, self.log_format)
    }
}

/// Builds the default filter directive for a binary and the library.
fn default_directive(binary: &str, level: Level) -> String {
    format!("pattern_demos={level},{}={level}", binary.replace('-', "_"))
}

/// Initializes the tracing subscriber for logging.
///
/// `RUST_LOG` takes precedence over `level` when it is set.
///
/// # Errors
///
/// Returns [`ConfigError::TracingInit`] if a global subscriber is already set.
pub fn init_tracing(binary: &str, level: Level, format: LogFormat) -> Result<(), ConfigError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(binary, level)));

    let registry = tracing_subscriber::registry().with(filter);
    let result = match format {
        LogFormat::Text => registry
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_ansi(true)
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .try_init(),
        LogFormat::Json => registry
            .with(
                fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_current_span(false),
            )
            .try_init(),
    };

    result.map_err(|e| ConfigError::TracingInit(e.to_string()))
}
