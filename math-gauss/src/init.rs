//! Initial values for A, b and y
//!
//! Two modes are available: `rand` builds a matrix with a boosted diagonal from
//! uniform random integers, `fast` builds a fixed matrix with 5 on the
//! diagonal and 2 elsewhere. Both set every entry of b to 2 and of y to 1.

use crate::error::{GaussError, Result};
use crate::system::{LinearSystem, check_size};
use ndarray::{Array1, Array2};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Matrix initialization mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InitMode {
    /// Random integers in `[0, maxnum)`, +5 on the diagonal and +1 elsewhere
    #[default]
    Rand,
    /// 5 on the diagonal, 2 elsewhere
    Fast,
}

impl fmt::Display for InitMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InitMode::Rand => write!(f, "rand"),
            InitMode::Fast => write!(f, "fast"),
        }
    }
}

impl FromStr for InitMode {
    type Err = GaussError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "rand" => Ok(InitMode::Rand),
            "fast" => Ok(InitMode::Fast),
            _ => Err(GaussError::UnknownInitMode(s.to_string())),
        }
    }
}

/// Build an `n`×`n` system in the given mode
///
/// `maxnum` bounds the random integers drawn in [`InitMode::Rand`] and must
/// be positive. `seed` makes random initialization reproducible; without it
/// the generator is seeded from the thread-local RNG.
pub fn init_system(
    n: usize,
    mode: InitMode,
    maxnum: u32,
    seed: Option<u64>,
) -> Result<LinearSystem> {
    check_size(n)?;

    let a = match mode {
        InitMode::Rand => {
            if maxnum == 0 {
                return Err(GaussError::InvalidConfig(
                    "maxnum must be at least 1".to_string(),
                ));
            }
            let mut rng: StdRng = match seed {
                Some(s) => StdRng::seed_from_u64(s),
                None => {
                    let mut thread_rng = rand::rng();
                    StdRng::from_rng(&mut thread_rng)
                }
            };
            random_boosted_diagonal(n, maxnum, &mut rng)
        }
        InitMode::Fast => {
            Array2::from_shape_fn((n, n), |(i, j)| if i == j { 5.0 } else { 2.0 })
        }
    };

    LinearSystem::from_parts(a, Array1::from_elem(n, 2.0), Array1::from_elem(n, 1.0))
}

fn random_boosted_diagonal<R: Rng>(n: usize, maxnum: u32, rng: &mut R) -> Array2<f64> {
    let mut a = Array2::zeros((n, n));
    // Row-major fill so a given seed always yields the same matrix.
    for i in 0..n {
        for j in 0..n {
            let offset = if i == j { 5.0 } else { 1.0 };
            a[[i, j]] = f64::from(rng.random_range(0..maxnum)) + offset;
        }
    }
    a
}
