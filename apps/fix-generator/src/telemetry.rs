//! Tracing Setup
//!
//! Installs a `tracing-subscriber` fmt subscriber writing to stderr, so line
//! output on stdout stays clean.
//!
//! # Configuration
//!
//! - `RUST_LOG`: filter directives, overriding `observability.logging.level`
//! - `observability.logging.format`: `json` or `pretty`

use thiserror::Error;
use tracing_subscriber::EnvFilter;

use crate::config::{LogFormat, LoggingConfig};

/// Tracing setup errors.
#[derive(Debug, Error)]
pub enum TelemetryError {
    /// The configured filter directive does not parse.
    #[error("Invalid log filter '{directive}': {message}")]
    InvalidFilter {
        /// Directive that was rejected.
        directive: String,
        /// Parser message.
        message: String,
    },

    /// A global subscriber was already installed.
    #[error("Failed to install tracing subscriber: {message}")]
    Init {
        /// Error message.
        message: String,
    },
}

/// Build the filter from `RUST_LOG`, falling back to the configured level.
///
/// # Errors
///
/// Returns `InvalidFilter` if the configured level does not parse.
pub fn build_filter(config: &LoggingConfig) -> Result<EnvFilter, TelemetryError> {
    EnvFilter::try_from_default_env().or_else(|_| {
        EnvFilter::try_new(&config.level).map_err(|e| TelemetryError::InvalidFilter {
            directive: config.level.clone(),
            message: e.to_string(),
        })
    })
}

/// Initialize the global tracing subscriber.
///
/// # Errors
///
/// Returns `TelemetryError` if the filter is invalid or a subscriber is
/// already installed.
pub fn init_tracing(config: &LoggingConfig) -> Result<(), TelemetryError> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(build_filter(config)?)
        .with_writer(std::io::stderr)
        .with_target(true);

    let result = match config.format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Pretty => builder.pretty().try_init(),
    };
    result.map_err(|e| TelemetryError::Init {
        message: e.to_string(),
    })
}
