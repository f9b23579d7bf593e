//! Progress tracking for parallel unit execution.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

/// Progress tracker shared by the workers of one run.
#[derive(Debug)]
pub struct ProgressTracker {
    total_units: u64,
    completed_units: AtomicU64,
    start_time: Instant,
}

impl ProgressTracker {
    /// Create a new progress tracker.
    #[must_use]
    pub fn new(total_units: u64) -> Self {
        Self {
            total_units,
            completed_units: AtomicU64::new(0),
            start_time: Instant::now(),
        }
    }

    /// Mark a unit as completed.
    pub fn unit_completed(&self) {
        self.completed_units.fetch_add(1, Ordering::Relaxed);
    }

    /// Get current progress.
    #[must_use]
    #[allow(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    pub fn progress(&self) -> Progress {
        let completed = self.completed_units.load(Ordering::Relaxed);
        let elapsed = self.start_time.elapsed();

        let units_per_sec = if elapsed.as_secs_f64() > 0.0 {
            completed as f64 / elapsed.as_secs_f64()
        } else {
            0.0
        };

        let remaining = self.total_units.saturating_sub(completed);
        let eta_secs = if units_per_sec > 0.0 {
            (remaining as f64 / units_per_sec) as u64
        } else {
            0
        };

        Progress {
            total: self.total_units,
            completed,
            eta_secs,
            units_per_sec,
        }
    }
}

/// Progress snapshot.
#[derive(Debug, Clone)]
pub struct Progress {
    /// Total number of units.
    pub total: u64,
    /// Completed units.
    pub completed: u64,
    /// Estimated time remaining in seconds.
    pub eta_secs: u64,
    /// Units processed per second.
    pub units_per_sec: f64,
}

impl Progress {
    /// Get completion percentage.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn percentage(&self) -> f64 {
        if self.total == 0 {
            100.0
        } else {
            (self.completed as f64 / self.total as f64) * 100.0
        }
    }
}
