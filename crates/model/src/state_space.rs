//! Discrete-time affine state-space model.
//!
//! ```text
//! x[t+1] = A * x[t] + B * u[t] + q[t]     (propagate)
//! y[t]   = C * x[t] + D * u[t] + r[t]     (observe)
//! ```
//!
//! `A` is n×n, `B` is n×m, `C` is p×n and `D` is p×m. `B` and `D` are
//! optional: a model without them has no control channel (`m = 0`).

use ndarray::{Array1, Array2};

use crate::error::ModelError;

/// A linear(ized) discrete-time dynamical system with dimension checks.
///
/// The four matrices are fixed at construction. Accessors hand out
/// independent copies, so nothing outside the model can alter them.
///
/// # Example
///
/// ```
/// use estim_model::LinearSystemModel;
/// use ndarray::{arr1, arr2};
///
/// let model = LinearSystemModel::new(
///     arr2(&[[1.0]]),
///     Some(arr2(&[[1.0]])),
///     arr2(&[[1.0]]),
///     Some(arr2(&[[0.0]])),
/// )
/// .unwrap();
///
/// let x = model.propagate(&arr1(&[0.0]), Some(&arr1(&[1.0])), None).unwrap();
/// assert_eq!(x, arr1(&[1.0]));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct LinearSystemModel {
    a: Array2<f64>,
    b: Option<Array2<f64>>,
    c: Array2<f64>,
    d: Option<Array2<f64>>,
    control_dim: usize,
}

impl LinearSystemModel {
    /// Builds a model from its state, control, output and feed-through
    /// matrices.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::DimensionMismatch`] if `a` is not square, if `c`
    /// does not have `n` columns, if `b` does not have `n` rows, if `d` does
    /// not have `p` rows, or if `b` and `d` disagree on the control
    /// dimension.
    pub fn new(
        a: Array2<f64>,
        b: Option<Array2<f64>>,
        c: Array2<f64>,
        d: Option<Array2<f64>>,
    ) -> Result<Self, ModelError> {
        let (n, a_cols) = a.dim();
        check_dim("state matrix columns", n, a_cols)?;

        let (p, c_cols) = c.dim();
        check_dim("output matrix columns", n, c_cols)?;

        if let Some(b) = &b {
            check_dim("state control matrix rows", n, b.nrows())?;
        }
        if let Some(d) = &d {
            check_dim("output control matrix rows", p, d.nrows())?;
        }

        let control_dim = match (&b, &d) {
            (Some(b), Some(d)) => {
                check_dim("output control matrix columns", b.ncols(), d.ncols())?;
                b.ncols()
            }
            (Some(b), None) => b.ncols(),
            (None, Some(d)) => d.ncols(),
            (None, None) => 0,
        };

        tracing::debug!(n, p, m = control_dim, "built linear system model");

        Ok(Self {
            a,
            b,
            c,
            d,
            control_dim,
        })
    }

    /// Advances the internal state by one step.
    ///
    /// Computes `A·x`, adds `B·u` when both `u` and `B` are present, and
    /// adds the process noise `q` when present and of length `n`. A `q` of
    /// any other length is left out.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::DimensionMismatch`] if `x` is not of length `n`
    /// or `u` is present and not of length `m`.
    pub fn propagate(
        &self,
        x: &Array1<f64>,
        u: Option<&Array1<f64>>,
        q: Option<&Array1<f64>>,
    ) -> Result<Array1<f64>, ModelError> {
        let (n, _) = self.dims();
        check_dim("state vector length", n, x.len())?;
        self.check_control(u)?;

        let mut out = self.a.dot(x);
        if let (Some(b), Some(u)) = (&self.b, u) {
            out += &b.dot(u);
        }
        match q {
            Some(q) if q.len() == n => out += q,
            Some(q) => tracing::debug!(expected = n, got = q.len(), "skipping process noise"),
            None => {}
        }
        Ok(out)
    }

    /// Produces the output for internal state `x` and control `u`.
    ///
    /// Computes `C·x`, adds `D·u` when both `u` and `D` are present, and
    /// adds the measurement noise `r` when present and of length `p`. An `r`
    /// of any other length is left out.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::DimensionMismatch`] if `x` is not of length `n`
    /// or `u` is present and not of length `m`.
    pub fn observe(
        &self,
        x: &Array1<f64>,
        u: Option<&Array1<f64>>,
        r: Option<&Array1<f64>>,
    ) -> Result<Array1<f64>, ModelError> {
        let (n, p) = self.dims();
        check_dim("state vector length", n, x.len())?;
        self.check_control(u)?;

        let mut out = self.c.dot(x);
        if let (Some(d), Some(u)) = (&self.d, u) {
            out += &d.dot(u);
        }
        match r {
            Some(r) if r.len() == p => out += r,
            Some(r) => tracing::debug!(expected = p, got = r.len(), "skipping measurement noise"),
            None => {}
        }
        Ok(out)
    }

    /// Returns `(n, p)`: the state dimension and the output dimension.
    pub fn dims(&self) -> (usize, usize) {
        (self.a.nrows(), self.c.nrows())
    }

    /// Returns the control dimension `m` (0 when there is no control channel).
    pub fn control_dim(&self) -> usize {
        self.control_dim
    }

    /// Returns a copy of the state matrix `A`.
    pub fn state_matrix(&self) -> Array2<f64> {
        self.a.clone()
    }

    /// Returns a copy of the state control matrix `B`, or a 0×0 matrix.
    pub fn state_ctl_matrix(&self) -> Array2<f64> {
        copy_or_empty(self.b.as_ref())
    }

    /// Returns a copy of the output matrix `C`.
    pub fn output_matrix(&self) -> Array2<f64> {
        self.c.clone()
    }

    /// Returns a copy of the output control matrix `D`, or a 0×0 matrix.
    pub fn output_ctl_matrix(&self) -> Array2<f64> {
        copy_or_empty(self.d.as_ref())
    }

    fn check_control(&self, u: Option<&Array1<f64>>) -> Result<(), ModelError> {
        match u {
            Some(u) => check_dim("control vector length", self.control_dim, u.len()),
            None => Ok(()),
        }
    }
}

fn check_dim(field: &'static str, expected: usize, got: usize) -> Result<(), ModelError> {
    if expected != got {
        return Err(ModelError::DimensionMismatch {
            field,
            expected,
            got,
        });
    }
    Ok(())
}

fn copy_or_empty(m: Option<&Array2<f64>>) -> Array2<f64> {
    m.cloned().unwrap_or_else(|| Array2::zeros((0, 0)))
}
