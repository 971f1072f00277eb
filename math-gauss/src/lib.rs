//! Parallel Gaussian elimination for dense linear systems
//!
//! This crate reduces a dense system `A·x = b` to unit upper-triangular form
//! with a fixed pool of worker threads, producing the intermediate vector `y`
//! that a back-substitution turns into `x`.
//!
//! # Features
//!
//! - **Elimination Engine**: division and elimination phases per pivot step,
//!   synchronized by two barrier rendezvous
//! - **Worker Pool**: `T` symmetric workers, worker 0 doubles as coordinator,
//!   strided (round-robin) work partitioning
//! - **Initialization**: random diagonally dominant or fixed matrices
//! - **Configuration**: defaults, validation and JSON files
//!
//! No pivoting is performed: a zero pivot propagates `Inf`/`NaN` silently.
//!
//! # Example
//!
//! ```ignore
//! use math_gauss::{InitMode, eliminate, init_system};
//!
//! let system = init_system(512, InitMode::Rand, 15, Some(1))?;
//! let eliminated = eliminate(system, 4)?;
//! assert!(eliminated.is_unit_upper_triangular());
//! ```

pub mod config;
pub mod display;
pub mod elimination;
pub mod error;
pub mod init;
pub mod parallel;
pub mod system;

// Re-export main types
pub use config::GaussConfig;
pub use error::{GaussError, Result};
pub use init::{InitMode, init_system};
pub use system::{LinearSystem, MAX_SIZE};

// Re-export the engine
pub use elimination::{
    EliminationEngine, EliminationReport, EliminationResult, EngineConfig, WorkerPool, eliminate,
    eliminate_sequential,
};
