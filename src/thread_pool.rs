//! Worker pool for independent trials.
//!
//! With the `parallel` feature trials run on a dedicated rayon pool sized by
//! the configured worker count. Without it they run sequentially. Either way
//! results come back in index order.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::error::Result;

/// Map `op` over `0..n` using up to `workers` threads.
///
/// Any error aborts the map and is returned.
#[cfg(feature = "parallel")]
pub fn map_indexed<T, F>(workers: usize, n: usize, op: F) -> Result<Vec<T>>
where
    T: Send,
    F: Fn(usize) -> Result<T> + Sync + Send,
{
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(workers)
        .thread_name(|i| format!("joint-hill-{i}"))
        .build()?;

    pool.install(|| (0..n).into_par_iter().map(&op).collect())
}

/// Map `op` over `0..n` sequentially. `workers` is ignored.
#[cfg(not(feature = "parallel"))]
pub fn map_indexed<T, F>(_workers: usize, n: usize, op: F) -> Result<Vec<T>>
where
    F: Fn(usize) -> Result<T>,
{
    (0..n).map(op).collect()
}
