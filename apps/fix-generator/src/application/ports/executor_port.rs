//! Unit-of-Work Executor Port (Driven Port)
//!
//! Runs independent units of work, possibly on several threads.

/// Port for executing `units` independent closures.
pub trait UnitOfWorkExecutor: Send + Sync {
    /// Run `work(unit)` for every unit in `0..units`.
    ///
    /// Results are returned in unit order. Units share no mutable state.
    fn run_units<T, F>(&self, units: usize, work: F) -> Vec<T>
    where
        T: Send,
        F: Fn(usize) -> T + Send + Sync;
}

/// Executor running every unit on the calling thread.
#[derive(Debug, Clone, Copy, Default)]
pub struct SequentialExecutor;

impl UnitOfWorkExecutor for SequentialExecutor {
    fn run_units<T, F>(&self, units: usize, work: F) -> Vec<T>
    where
        T: Send,
        F: Fn(usize) -> T + Send + Sync,
    {
        (0..units).map(work).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequential_executor_runs_units_in_order() {
        let results = SequentialExecutor.run_units(4, |unit| unit * 10);
        assert_eq!(results, vec![0, 10, 20, 30]);
    }

    #[test]
    fn sequential_executor_with_no_units() {
        let results: Vec<usize> = SequentialExecutor.run_units(0, |unit| unit);
        assert!(results.is_empty());
    }
}
