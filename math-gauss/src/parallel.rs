//! Work partitioning for the worker pool
//!
//! Both phases of a pivot step split their index range the same way: worker
//! `tid` out of `workers` owns `base + tid`, `base + tid + workers`, ... up
//! to (excluding) `end`. Ranges owned by different workers never overlap, and
//! a worker whose first index is already past `end` simply owns nothing.

use std::iter::StepBy;
use std::ops::Range;

/// Identity of the coordinating worker
pub const COORDINATOR: usize = 0;

/// Strided index range owned by one worker
pub fn strided(base: usize, tid: usize, workers: usize, end: usize) -> StepBy<Range<usize>> {
    debug_assert!(workers > 0, "worker count must be positive");
    debug_assert!(tid < workers, "worker id {tid} out of range");
    let start = (base + tid).min(end);
    (start..end).step_by(workers)
}

/// Worker that owns `index` when splitting `base..` across `workers`
pub fn owner(index: usize, base: usize, workers: usize) -> usize {
    debug_assert!(index >= base);
    (index - base) % workers
}

/// Number of indices in `base..end` owned by worker `tid`
pub fn share(base: usize, tid: usize, workers: usize, end: usize) -> usize {
    let start = base + tid;
    if start >= end {
        0
    } else {
        (end - start).div_ceil(workers)
    }
}

/// Number of hardware threads, used when the worker count is left at 0
pub fn available_workers() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}

/// Resolve a requested worker count (0 means one per hardware thread)
pub fn resolve_workers(requested: usize) -> usize {
    if requested == 0 {
        available_workers()
    } else {
        requested
    }
}
