//! Elimination engine
//!
//! Transforms `a` into unit upper-triangular form and fills `y` through N
//! sequential pivot steps. Each step is split across the worker pool:
//!
//! 1. division of row k by the pivot, columns strided across workers,
//!    while the coordinator computes `y[k] = b[k] / a[k][k]`;
//! 2. rendezvous;
//! 3. the coordinator sets `a[k][k] = 1`, every worker eliminates column k
//!    from its strided rows below k;
//! 4. rendezvous.
//!
//! No pivoting is performed. A zero pivot yields `Inf`/`NaN` that propagate
//! through the remaining steps; nothing is detected or recovered.

use super::pool::WorkerPool;
use super::shared::SharedSystem;
use crate::error::{GaussError, Result};
use crate::parallel::{COORDINATOR, strided};
use crate::system::LinearSystem;
use std::sync::{Arc, Barrier};
use std::time::{Duration, Instant};

/// Engine configuration
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    /// Number of workers, coordinator included (must be >= 1)
    pub workers: usize,
    /// Log a warning for pivots whose magnitude is below this value.
    /// Diagnostic only: the computation is never altered.
    pub pivot_tolerance: Option<f64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            workers: 4,
            pivot_tolerance: None,
        }
    }
}

/// Summary of a completed run
#[derive(Debug, Clone, PartialEq)]
pub struct EliminationReport {
    /// Problem dimension
    pub n: usize,
    /// Workers that took part, coordinator included
    pub workers: usize,
    /// Pivot steps executed (always `n`)
    pub pivot_steps: usize,
    /// Barrier rendezvous each worker went through (always `2 * n`)
    pub rendezvous: usize,
    /// Pivots flagged by the diagnostic check
    pub small_pivots: usize,
    /// Wall-clock time spent between spawning and joining the pool
    pub elapsed: Duration,
}

/// Eliminated system together with its run summary
#[derive(Debug, Clone)]
pub struct EliminationResult {
    /// The system after elimination
    pub system: LinearSystem,
    /// Run summary
    pub report: EliminationReport,
}

#[derive(Debug, Default, Clone, Copy)]
struct WorkerStats {
    pivot_steps: usize,
    rendezvous: usize,
    small_pivots: usize,
}

struct WorkerContext {
    shared: SharedSystem,
    barrier: Barrier,
    workers: usize,
    pivot_tolerance: Option<f64>,
}

/// Parallel Gaussian elimination engine
#[derive(Debug, Clone)]
pub struct EliminationEngine {
    config: EngineConfig,
    pool: WorkerPool,
}

impl EliminationEngine {
    /// Create an engine, validating the worker count
    pub fn new(config: EngineConfig) -> Result<Self> {
        let pool = WorkerPool::new(config.workers)?;
        if let Some(tol) = config.pivot_tolerance {
            if tol.is_nan() || tol < 0.0 {
                return Err(GaussError::InvalidConfig(format!(
                    "pivot tolerance must be non-negative, got {tol}"
                )));
            }
        }
        Ok(Self { config, pool })
    }

    /// Engine configuration
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Run all N pivot steps on `system`
    ///
    /// The system is handed back only after every worker has been joined.
    /// On error (worker creation failure) the system is lost: a partially
    /// eliminated state is never returned.
    pub fn run(&self, system: LinearSystem) -> Result<EliminationResult> {
        let n = system.n();
        let workers = self.pool.workers();
        let start = Instant::now();

        let context = Arc::new(WorkerContext {
            shared: SharedSystem::new(system),
            barrier: Barrier::new(workers),
            workers,
            pivot_tolerance: self.config.pivot_tolerance,
        });

        let job_context = Arc::clone(&context);
        let stats = self
            .pool
            .run(move |tid| run_worker(tid, &job_context))?;

        // Every worker has been joined and the job (with its clone) dropped.
        let context = Arc::try_unwrap(context).map_err(|_| GaussError::WorkerPanicked {
            tid: COORDINATOR,
        })?;
        let system = context.shared.into_inner();
        let elapsed = start.elapsed();

        let coordinator = stats[COORDINATOR];
        debug_assert!(stats.iter().all(|s| s.rendezvous == 2 * n));
        let report = EliminationReport {
            n,
            workers,
            pivot_steps: coordinator.pivot_steps,
            rendezvous: coordinator.rendezvous,
            small_pivots: coordinator.small_pivots,
            elapsed,
        };

        log::info!(
            "Elimination done: n={}, workers={}, steps={}, time={:.3}ms",
            n,
            workers,
            report.pivot_steps,
            elapsed.as_secs_f64() * 1000.0
        );
        if report.small_pivots > 0 {
            log::warn!(
                "{} pivots below tolerance; results may contain Inf/NaN",
                report.small_pivots
            );
        }

        Ok(EliminationResult { system, report })
    }
}

/// Eliminate `system` with `workers` threads of control and default settings
pub fn eliminate(system: LinearSystem, workers: usize) -> Result<LinearSystem> {
    let engine = EliminationEngine::new(EngineConfig {
        workers,
        ..Default::default()
    })?;
    Ok(engine.run(system)?.system)
}

/// Single-threaded elimination with the same arithmetic as the parallel engine
pub fn eliminate_sequential(system: &mut LinearSystem) {
    let n = system.n();
    let (a, b, y) = (&mut system.a, &mut system.b, &mut system.y);

    for k in 0..n {
        let pivot = a[[k, k]];
        for j in (k + 1)..n {
            a[[k, j]] /= pivot;
        }
        y[k] = b[k] / pivot;
        a[[k, k]] = 1.0;

        for i in (k + 1)..n {
            let factor = a[[i, k]];
            for j in (k + 1)..n {
                a[[i, j]] -= factor * a[[k, j]];
            }
            b[i] -= factor * y[k];
            a[[i, k]] = 0.0;
        }
    }
}

/// Body of one worker: every pivot step, two rendezvous per step
fn run_worker(tid: usize, ctx: &WorkerContext) -> WorkerStats {
    let shared = &ctx.shared;
    let n = shared.n();
    let workers = ctx.workers;
    let mut stats = WorkerStats::default();

    for k in 0..n {
        // Division phase. Row k was last written before the previous
        // rendezvous, and each column j > k belongs to a single worker.
        unsafe {
            let pivot = shared.a(k, k);
            for j in strided(k + 1, tid, workers, n) {
                shared.set_a(k, j, shared.a(k, j) / pivot);
            }

            if tid == COORDINATOR {
                shared.set_y(k, shared.b(k) / pivot);
                if let Some(tol) = ctx.pivot_tolerance {
                    if pivot.is_nan() || pivot.abs() < tol {
                        log::warn!("pivot {k} is {pivot:e}, below tolerance {tol:e}");
                        stats.small_pivots += 1;
                    }
                }
            }
        }

        ctx.barrier.wait();
        stats.rendezvous += 1;

        // Elimination phase. Nobody reads a[k][k] here, so the coordinator can
        // normalize it; rows i > k are disjoint across workers, row k and y[k]
        // are read-only.
        unsafe {
            if tid == COORDINATOR {
                shared.set_a(k, k, 1.0);
            }

            for i in strided(k + 1, tid, workers, n) {
                let factor = shared.a(i, k);
                for j in (k + 1)..n {
                    shared.set_a(i, j, shared.a(i, j) - factor * shared.a(k, j));
                }
                shared.set_b(i, shared.b(i) - factor * shared.y(k));
                shared.set_a(i, k, 0.0);
            }
        }

        ctx.barrier.wait();
        stats.rendezvous += 1;
        stats.pivot_steps += 1;
    }

    stats
}
