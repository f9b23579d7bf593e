//! Configuration for parallel unit execution.

use serde::{Deserialize, Serialize};

/// Configuration for parallel unit execution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParallelConfig {
    /// Maximum number of threads to use (0 = rayon default).
    #[serde(default)]
    pub max_threads: usize,

    /// Minimum parallelization threshold (units below this run sequentially).
    #[serde(default = "default_min_parallel_units")]
    pub min_parallel_units: usize,

    /// Whether to log progress after every unit.
    #[serde(default = "default_track_progress")]
    pub track_progress: bool,
}

const fn default_min_parallel_units() -> usize {
    2
}

const fn default_track_progress() -> bool {
    true
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self {
            max_threads: 0,
            min_parallel_units: default_min_parallel_units(),
            track_progress: default_track_progress(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parallel_config_default() {
        let config = ParallelConfig::default();

        assert_eq!(config.max_threads, 0);
        assert_eq!(config.min_parallel_units, 2);
        assert!(config.track_progress);
    }

    #[test]
    fn parallel_config_partial_yaml() {
        let config: ParallelConfig = serde_yaml_bw::from_str("max_threads: 3").unwrap();

        assert_eq!(config.max_threads, 3);
        assert_eq!(config.min_parallel_units, 2);
    }
}
