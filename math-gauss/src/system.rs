//! Dense linear system A·x = b together with the intermediate vector y
//!
//! [`LinearSystem`] is the state the elimination engine mutates in place:
//! the N×N matrix `a`, the right-hand side `b` and the vector `y` that holds
//! `b[k] / a[k][k]` for every pivot step once the engine has run.

use crate::error::{GaussError, Result};
use ndarray::{Array1, Array2};

/// Largest supported problem dimension.
pub const MAX_SIZE: usize = 4096;

/// Dense system `A·x = b` with the elimination vector `y`
///
/// All containers are kept in standard (row-major, contiguous) layout so the
/// parallel engine can address them by flat offsets.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LinearSystem {
    pub(crate) a: Array2<f64>,
    pub(crate) b: Array1<f64>,
    pub(crate) y: Array1<f64>,
}

impl LinearSystem {
    /// Build a system from `a` and `b`, with `y` seeded to zero
    pub fn new(a: Array2<f64>, b: Array1<f64>) -> Result<Self> {
        let n = b.len();
        Self::from_parts(a, b, Array1::zeros(n))
    }

    /// Build a system from all three containers
    ///
    /// Fails if `a` is not square, if `b` or `y` do not match its dimension,
    /// if the system is empty, or if it exceeds [`MAX_SIZE`].
    pub fn from_parts(a: Array2<f64>, b: Array1<f64>, y: Array1<f64>) -> Result<Self> {
        let n = a.nrows();
        if n != a.ncols() {
            return Err(GaussError::DimensionMismatch {
                expected: n,
                got: a.ncols(),
            });
        }
        check_size(n)?;
        for len in [b.len(), y.len()] {
            if len != n {
                return Err(GaussError::DimensionMismatch {
                    expected: n,
                    got: len,
                });
            }
        }

        Ok(Self {
            a: standard(a),
            b: standard(b),
            y: standard(y),
        })
    }

    /// Problem dimension N
    pub fn n(&self) -> usize {
        self.a.nrows()
    }

    /// Coefficient matrix
    pub fn a(&self) -> &Array2<f64> {
        &self.a
    }

    /// Right-hand side
    pub fn b(&self) -> &Array1<f64> {
        &self.b
    }

    /// Intermediate vector produced by elimination
    pub fn y(&self) -> &Array1<f64> {
        &self.y
    }

    /// Check whether `a` is unit upper-triangular (exact comparison)
    pub fn is_unit_upper_triangular(&self) -> bool {
        let n = self.n();
        (0..n).all(|k| self.a[[k, k]] == 1.0 && ((k + 1)..n).all(|i| self.a[[i, k]] == 0.0))
    }

    /// Split into `(a, b, y)`
    pub fn into_parts(self) -> (Array2<f64>, Array1<f64>, Array1<f64>) {
        (self.a, self.b, self.y)
    }
}

/// Validate a problem dimension against the supported range
pub fn check_size(n: usize) -> Result<()> {
    if n == 0 {
        return Err(GaussError::InvalidConfig(
            "problem size must be at least 1".to_string(),
        ));
    }
    if n > MAX_SIZE {
        return Err(GaussError::TooLarge {
            size: n,
            max: MAX_SIZE,
        });
    }
    Ok(())
}

fn standard<D: ndarray::Dimension>(array: ndarray::Array<f64, D>) -> ndarray::Array<f64, D> {
    if array.is_standard_layout() {
        array
    } else {
        array.as_standard_layout().into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_new_seeds_y_with_zeros() {
        let system = LinearSystem::new(array![[2.0, 1.0], [1.0, 3.0]], array![3.0, 4.0])
            .expect("valid system");
        assert_eq!(system.n(), 2);
        assert_eq!(system.y(), &array![0.0, 0.0]);
    }

    #[test]
    fn test_rejects_non_square() {
        let err = LinearSystem::new(Array2::zeros((2, 3)), Array1::zeros(2)).unwrap_err();
        assert!(matches!(
            err,
            GaussError::DimensionMismatch {
                expected: 2,
                got: 3
            }
        ));
    }

    #[test]
    fn test_rejects_rhs_length() {
        let err = LinearSystem::new(Array2::eye(3), Array1::zeros(2)).unwrap_err();
        assert!(err.is_config_error());
    }

    #[test]
    fn test_rejects_empty_and_oversized() {
        assert!(LinearSystem::new(Array2::zeros((0, 0)), Array1::zeros(0)).is_err());
        assert!(matches!(
            check_size(MAX_SIZE + 1),
            Err(GaussError::TooLarge { .. })
        ));
        assert!(check_size(MAX_SIZE).is_ok());
    }

    #[test]
    fn test_transposed_input_is_made_contiguous() {
        let a = array![[1.0, 2.0], [3.0, 4.0]].reversed_axes();
        let system = LinearSystem::new(a, array![1.0, 1.0]).expect("valid system");
        assert!(system.a().is_standard_layout());
        assert_eq!(system.a()[[0, 1]], 3.0);
    }

    #[test]
    fn test_unit_upper_triangular() {
        let upper = LinearSystem::new(array![[1.0, 0.5], [0.0, 1.0]], array![0.0, 0.0])
            .expect("valid system");
        assert!(upper.is_unit_upper_triangular());

        let general = LinearSystem::new(array![[2.0, 1.0], [1.0, 3.0]], array![0.0, 0.0])
            .expect("valid system");
        assert!(!general.is_unit_upper_triangular());
    }
}
