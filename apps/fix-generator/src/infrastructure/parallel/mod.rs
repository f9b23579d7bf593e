//! Parallel generation infrastructure using Rayon.
//!
//! Units of work are spread over a work-stealing pool. By default the global
//! pool is used; a positive `max_threads` builds a dedicated pool instead so
//! the generator never reconfigures the process-wide pool.

mod config;
mod error;
mod executor;
mod progress;

pub use config::ParallelConfig;
pub use error::ParallelError;
pub use executor::RayonExecutor;
pub use progress::{Progress, ProgressTracker};
