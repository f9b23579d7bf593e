//! Crate-level error type.
//!
//! Every module reports its own `thiserror` enum; this type aggregates them
//! for callers driving a whole run.

use thiserror::Error;

use crate::application::ports::SourceError;
use crate::config::ConfigError;
use crate::domain::order_lifecycle::LifecycleError;
use crate::infrastructure::parallel::ParallelError;
use crate::infrastructure::sink::SinkError;
use crate::telemetry::TelemetryError;

/// Errors from a generator run.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration could not be loaded or validated.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Tracing could not be initialized.
    #[error(transparent)]
    Telemetry(#[from] TelemetryError),

    /// An order lifecycle was driven out of order.
    #[error(transparent)]
    Lifecycle(#[from] LifecycleError),

    /// The thread pool could not be built.
    #[error(transparent)]
    Parallel(#[from] ParallelError),

    /// Reading rows failed.
    #[error(transparent)]
    Source(#[from] SourceError),

    /// Writing output failed.
    #[error(transparent)]
    Sink(#[from] SinkError),
}

/// Result alias using the crate error.
pub type Result<T> = std::result::Result<T, Error>;
