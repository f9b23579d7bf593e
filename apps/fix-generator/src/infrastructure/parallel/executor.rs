//! Rayon-backed unit-of-work executor.

use std::time::Instant;

use rayon::prelude::*;
use tracing::{debug, info};

use crate::application::ports::UnitOfWorkExecutor;

use super::config::ParallelConfig;
use super::error::ParallelError;
use super::progress::ProgressTracker;

/// Executor spreading units over a rayon pool.
pub struct RayonExecutor {
    config: ParallelConfig,
    pool: Option<rayon::ThreadPool>,
}

impl std::fmt::Debug for RayonExecutor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RayonExecutor")
            .field("config", &self.config)
            .field("dedicated_pool", &self.pool.is_some())
            .finish()
    }
}

impl RayonExecutor {
    /// Create an executor, building a dedicated pool when `max_threads > 0`.
    ///
    /// # Errors
    ///
    /// Returns error if the thread pool cannot be built.
    pub fn new(config: ParallelConfig) -> Result<Self, ParallelError> {
        let pool = if config.max_threads > 0 {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(config.max_threads)
                .thread_name(|i| format!("fix-generator-{i}"))
                .build()
                .map_err(|e| ParallelError::ThreadPoolError {
                    message: e.to_string(),
                })?;
            Some(pool)
        } else {
            None
        };
        Ok(Self { config, pool })
    }

    /// Get effective thread count.
    #[must_use]
    pub fn effective_thread_count(&self) -> usize {
        self.pool
            .as_ref()
            .map_or_else(rayon::current_num_threads, rayon::ThreadPool::current_num_threads)
    }

    fn run_parallel<T, F>(&self, units: usize, work: &F, tracker: &ProgressTracker) -> Vec<T>
    where
        T: Send,
        F: Fn(usize) -> T + Send + Sync,
    {
        let run = || {
            (0..units)
                .into_par_iter()
                .map(|unit| self.execute_unit(unit, work, tracker))
                .collect()
        };
        match &self.pool {
            Some(pool) => pool.install(run),
            None => run(),
        }
    }

    fn run_sequential<T, F>(&self, units: usize, work: &F, tracker: &ProgressTracker) -> Vec<T>
    where
        F: Fn(usize) -> T,
    {
        (0..units)
            .map(|unit| self.execute_unit(unit, work, tracker))
            .collect()
    }

    fn execute_unit<T, F>(&self, unit: usize, work: &F, tracker: &ProgressTracker) -> T
    where
        F: Fn(usize) -> T,
    {
        let result = work(unit);
        tracker.unit_completed();

        if self.config.track_progress {
            let progress = tracker.progress();
            debug!(
                "Progress: {:.1}% ({}/{}) - ETA: {}s",
                progress.percentage(),
                progress.completed,
                progress.total,
                progress.eta_secs
            );
        }

        result
    }
}

impl UnitOfWorkExecutor for RayonExecutor {
    fn run_units<T, F>(&self, units: usize, work: F) -> Vec<T>
    where
        T: Send,
        F: Fn(usize) -> T + Send + Sync,
    {
        let tracker = ProgressTracker::new(units as u64);
        let start_time = Instant::now();
        let parallel = units >= self.config.min_parallel_units;

        info!(
            units,
            threads = self.effective_thread_count(),
            parallel,
            "Starting generation units"
        );

        let results = if parallel {
            self.run_parallel(units, &work, &tracker)
        } else {
            self.run_sequential(units, &work, &tracker)
        };

        let progress = tracker.progress();
        info!(
            "Generation units complete: {}/{} in {:.2}s ({:.1} units/s)",
            progress.completed,
            progress.total,
            start_time.elapsed().as_secs_f64(),
            progress.units_per_sec
        );

        results
    }
}
