//! Run configuration, optionally loaded from JSON
//!
//! ```json
//! { "size": 1024, "workers": 8, "init": "fast", "print": false }
//! ```
//!
//! Missing fields take their default values.

use crate::elimination::EngineConfig;
use crate::error::{GaussError, Result};
use crate::init::{InitMode, init_system};
use crate::system::{LinearSystem, check_size};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Complete run configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GaussConfig {
    /// Problem size N
    pub size: usize,
    /// Worker count T, coordinator included (0 = one per hardware thread)
    pub workers: usize,
    /// Matrix initialization mode
    pub init: InitMode,
    /// Upper bound (exclusive) of the random integers in `rand` mode
    pub maxnum: u32,
    /// Print the system before and after elimination
    pub print: bool,
    /// Seed for `rand` mode
    pub seed: Option<u64>,
    /// Warn about pivots whose magnitude is below this value
    pub pivot_tolerance: Option<f64>,
}

impl Default for GaussConfig {
    fn default() -> Self {
        Self {
            size: 2048,
            workers: 4,
            init: InitMode::Rand,
            maxnum: 15,
            print: false,
            seed: None,
            pivot_tolerance: None,
        }
    }
}

impl GaussConfig {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| GaussError::Config(format!("failed to read config file: {e}")))?;

        let config: GaussConfig = serde_json::from_str(&contents)
            .map_err(|e| GaussError::Config(format!("failed to parse JSON: {e}")))?;

        Ok(config)
    }

    /// Save configuration to a JSON file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| GaussError::Config(format!("failed to serialize config: {e}")))?;

        fs::write(path, json)
            .map_err(|e| GaussError::Config(format!("failed to write config file: {e}")))
    }

    /// Check every value once, before anything is allocated
    pub fn validate(&self) -> Result<()> {
        check_size(self.size)?;
        if self.maxnum == 0 {
            return Err(GaussError::InvalidConfig(
                "maxnum must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Engine settings derived from this configuration
    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig {
            workers: crate::parallel::resolve_workers(self.workers),
            pivot_tolerance: self.pivot_tolerance,
        }
    }

    /// Build the initial system described by this configuration
    pub fn build_system(&self) -> Result<LinearSystem> {
        self.validate()?;
        init_system(self.size, self.init, self.maxnum, self.seed)
    }
}
