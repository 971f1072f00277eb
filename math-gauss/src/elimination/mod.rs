//! Parallel Gaussian elimination without pivoting
//!
//! This module provides the elimination engine:
//! - [`EliminationEngine`]: division/elimination steps run by a fixed pool of workers
//! - [`eliminate`]: convenience wrapper with default engine settings
//! - [`eliminate_sequential`]: single-threaded reference with identical arithmetic
//! - [`WorkerPool`]: spawns the auxiliary workers and joins them

mod engine;
mod pool;
mod shared;

pub use engine::{
    EliminationEngine, EliminationReport, EliminationResult, EngineConfig, eliminate,
    eliminate_sequential,
};
pub use pool::WorkerPool;
