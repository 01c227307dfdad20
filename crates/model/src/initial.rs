//! Initial mean and covariance for an estimator.

use ndarray::{Array1, Array2};

use crate::error::ModelError;

/// Initial state mean and covariance.
///
/// The covariance is stored as the symmetric matrix described by the upper
/// triangle of the supplied one. Positive semi-definiteness is the caller's
/// responsibility.
///
/// Both accessors return independent copies: mutating a returned value never
/// affects the stored condition, and vice versa.
#[derive(Clone, Debug, PartialEq)]
pub struct InitialCondition {
    state: Array1<f64>,
    cov: Array2<f64>,
}

impl InitialCondition {
    /// Creates an initial condition from a mean vector and covariance.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::DimensionMismatch`] if `cov` is not square or its
    /// side does not match the length of `state`.
    pub fn new(state: &Array1<f64>, cov: &Array2<f64>) -> Result<Self, ModelError> {
        let (rows, cols) = cov.dim();
        if rows != cols {
            return Err(ModelError::DimensionMismatch {
                field: "initial covariance columns",
                expected: rows,
                got: cols,
            });
        }
        if rows != state.len() {
            return Err(ModelError::DimensionMismatch {
                field: "initial covariance rows",
                expected: state.len(),
                got: rows,
            });
        }

        Ok(Self {
            state: state.clone(),
            cov: symmetric_from_upper(cov),
        })
    }

    /// Returns a copy of the initial state mean.
    pub fn state(&self) -> Array1<f64> {
        self.state.clone()
    }

    /// Returns a copy of the initial covariance.
    pub fn cov(&self) -> Array2<f64> {
        self.cov.clone()
    }

    /// State dimension.
    pub fn dim(&self) -> usize {
        self.state.len()
    }
}

/// Mirrors the upper triangle of `m` onto the lower one.
fn symmetric_from_upper(m: &Array2<f64>) -> Array2<f64> {
    let n = m.nrows();
    Array2::from_shape_fn((n, n), |(i, j)| if i <= j { m[[i, j]] } else { m[[j, i]] })
}
