//! Solver configuration

use serde::{Deserialize, Serialize};

/// Parallel evaluation configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParallelConfig {
    /// Solve the unknowns concurrently
    pub enabled: bool,
    /// Number of threads to use (None = use rayon default)
    pub num_threads: Option<usize>,
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            num_threads: None,
        }
    }
}

impl ParallelConfig {
    /// Run every unknown on the calling thread
    pub fn sequential() -> Self {
        Self {
            enabled: false,
            num_threads: None,
        }
    }
}

/// Configuration for [`solve`](crate::solve)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolverConfig {
    /// How the per-unknown determinants are scheduled
    #[serde(default)]
    pub parallel: ParallelConfig,
}
