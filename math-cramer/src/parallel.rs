//! Parallel utilities with feature-gated implementations
//!
//! With the `native` feature the per-unknown work runs on rayon, otherwise
//! everything falls back to sequential loops behind the same API.

use crate::config::ParallelConfig;
use crate::error::Result;

/// Check if parallel processing is available
#[cfg(feature = "native")]
pub fn is_parallel_available() -> bool {
    true
}

/// Check if parallel processing is available
#[cfg(not(feature = "native"))]
pub fn is_parallel_available() -> bool {
    false
}

/// Parallel map with index
///
/// Results are returned in index order whatever order the tasks finish in.
#[cfg(feature = "native")]
pub fn parallel_map_indexed<U, F>(count: usize, f: F) -> Vec<U>
where
    U: Send,
    F: Fn(usize) -> U + Sync + Send,
{
    use rayon::prelude::*;
    (0..count).into_par_iter().map(f).collect()
}

/// Sequential map with index (fallback)
#[cfg(not(feature = "native"))]
pub fn parallel_map_indexed<U, F>(count: usize, f: F) -> Vec<U>
where
    F: Fn(usize) -> U,
{
    (0..count).map(f).collect()
}

/// Map `f` over `0..count` as directed by `config`.
///
/// A fixed `num_threads` runs the work inside its own pool rather than
/// touching the global one.
#[cfg(feature = "native")]
pub fn map_indexed_with<U, F>(count: usize, config: &ParallelConfig, f: F) -> Result<Vec<U>>
where
    U: Send,
    F: Fn(usize) -> U + Sync + Send,
{
    if !config.enabled {
        return Ok((0..count).map(f).collect());
    }
    match config.num_threads {
        Some(threads) => {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build()
                .map_err(|e| crate::error::CramerError::ThreadPool(e.to_string()))?;
            Ok(pool.install(|| parallel_map_indexed(count, f)))
        }
        None => Ok(parallel_map_indexed(count, f)),
    }
}

/// Map `f` over `0..count` (sequential build, `config` is ignored)
#[cfg(not(feature = "native"))]
pub fn map_indexed_with<U, F>(count: usize, _config: &ParallelConfig, f: F) -> Result<Vec<U>>
where
    F: Fn(usize) -> U,
{
    Ok(parallel_map_indexed(count, f))
}
