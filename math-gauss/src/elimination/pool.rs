//! Fixed-size pool of symmetric workers
//!
//! The pool runs one job on `workers` threads of control: `workers - 1`
//! auxiliary OS threads plus the calling thread, which acts as worker 0
//! (the coordinator). Threads are created once per run and all of them are
//! joined before results are handed back.

use crate::error::{GaussError, Result};
use crate::parallel::COORDINATOR;
use std::sync::Arc;
use std::thread::{self, JoinHandle};

/// Pool of `workers` threads of control identified by `tid` in `0..workers`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkerPool {
    workers: usize,
}

impl WorkerPool {
    /// Create a pool description for `workers` threads of control
    pub fn new(workers: usize) -> Result<Self> {
        if workers == 0 {
            return Err(GaussError::InvalidConfig(
                "worker count must be at least 1".to_string(),
            ));
        }
        Ok(Self { workers })
    }

    /// Number of workers, coordinator included
    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Run `job(tid)` on every worker and collect the results in `tid` order
    ///
    /// Auxiliary workers are spawned first, then the coordinator runs on the
    /// calling thread, then every auxiliary worker is joined.
    ///
    /// A spawn failure is fatal: the run is abandoned and the error returned
    /// without running the coordinator. Workers spawned before the failure
    /// stay parked at their first rendezvous, so callers must treat any
    /// state shared with the job as lost.
    pub fn run<F, R>(&self, job: F) -> Result<Vec<R>>
    where
        F: Fn(usize) -> R + Send + Sync + 'static,
        R: Send + 'static,
    {
        let job = Arc::new(job);
        let mut handles: Vec<JoinHandle<R>> = Vec::with_capacity(self.workers - 1);

        for tid in 1..self.workers {
            let job = Arc::clone(&job);
            let handle = thread::Builder::new()
                .name(format!("gauss-worker-{tid}"))
                .spawn(move || job(tid))
                .map_err(|source| {
                    log::error!("failed to spawn worker {tid}: {source}");
                    GaussError::WorkerSpawn { tid, source }
                })?;
            handles.push(handle);
        }
        log::debug!("spawned {} auxiliary workers", handles.len());

        let mut results = Vec::with_capacity(self.workers);
        results.push(job(COORDINATOR));

        for (offset, handle) in handles.into_iter().enumerate() {
            let tid = offset + 1;
            let result = handle
                .join()
                .map_err(|_| GaussError::WorkerPanicked { tid })?;
            results.push(result);
        }
        log::debug!("joined {} auxiliary workers", self.workers - 1);

        Ok(results)
    }
}
