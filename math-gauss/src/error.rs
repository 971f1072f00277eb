//! Error types for the elimination engine.
//!
//! The numerical core never fails: zero pivots propagate `Inf`/`NaN` through
//! the remaining steps. Errors only come from validating the problem before a
//! run and from the worker pool lifecycle.

use thiserror::Error;

/// Errors that can occur while setting up or running an elimination.
#[derive(Debug, Error)]
pub enum GaussError {
    /// A configuration value is out of range (size, worker count, maxnum).
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The problem size exceeds the largest supported dimension.
    #[error("problem size {size} exceeds the maximum supported dimension {max}")]
    TooLarge {
        /// Requested dimension
        size: usize,
        /// Largest supported dimension
        max: usize,
    },

    /// Matrix or vector shapes do not agree.
    #[error("dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch {
        /// Expected dimension
        expected: usize,
        /// Actual dimension provided
        got: usize,
    },

    /// The initialization mode name is not recognised.
    #[error("unknown init mode '{0}' (expected 'rand' or 'fast')")]
    UnknownInitMode(String),

    /// An auxiliary worker thread could not be created. Fatal for the run.
    #[error("failed to spawn worker {tid}")]
    WorkerSpawn {
        /// Identity of the worker that could not be created
        tid: usize,
        /// Underlying OS error
        #[source]
        source: std::io::Error,
    },

    /// An auxiliary worker panicked before it could be joined.
    #[error("worker {tid} panicked")]
    WorkerPanicked {
        /// Identity of the worker that panicked
        tid: usize,
    },

    /// Reading, parsing or writing a configuration file failed.
    #[error("configuration file error: {0}")]
    Config(String),
}

/// A specialized `Result` type for elimination operations.
pub type Result<T> = std::result::Result<T, GaussError>;

impl GaussError {
    /// Returns `true` if the error was raised while validating inputs.
    ///
    /// This includes `InvalidConfig`, `TooLarge`, `DimensionMismatch`
    /// and `UnknownInitMode`.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            GaussError::InvalidConfig(_)
                | GaussError::TooLarge { .. }
                | GaussError::DimensionMismatch { .. }
                | GaussError::UnknownInitMode(_)
        )
    }

    /// Returns `true` if the error comes from the worker pool.
    pub fn is_worker_error(&self) -> bool {
        matches!(
            self,
            GaussError::WorkerSpawn { .. } | GaussError::WorkerPanicked { .. }
        )
    }
}
