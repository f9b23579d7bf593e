//! Error types for parallel execution.

use thiserror::Error;

/// Errors from parallel execution setup.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParallelError {
    /// Thread pool initialization failed.
    #[error("Failed to initialize thread pool: {message}")]
    ThreadPoolError {
        /// Error message.
        message: String,
    },
}
