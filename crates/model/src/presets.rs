//! Ready-made models.

use ndarray::arr2;

use crate::error::ModelError;
use crate::state_space::LinearSystemModel;

/// Standard gravitational acceleration (m/s²), for use as the control input
/// of [`falling_ball`].
pub const GRAVITY: f64 = -9.81;

/// Builds the model of a ball moving vertically under a constant
/// acceleration.
///
/// State: `[height, velocity]`. Control: `[acceleration]`. Output:
/// `[height]`.
///
/// ```text
/// A = | 1  dt |    B = | dt²/2 |    C = | 1  0 |    D = | 0 |
///     | 0   1 |        | dt    |
/// ```
///
/// # Errors
///
/// Returns [`ModelError::InvalidParameter`] if `dt` is not finite and
/// positive.
pub fn falling_ball(dt: f64) -> Result<LinearSystemModel, ModelError> {
    if !dt.is_finite() || dt <= 0.0 {
        return Err(ModelError::InvalidParameter {
            name: "dt",
            value: dt,
        });
    }

    LinearSystemModel::new(
        arr2(&[[1.0, dt], [0.0, 1.0]]),
        Some(arr2(&[[0.5 * dt * dt], [dt]])),
        arr2(&[[1.0, 0.0]]),
        Some(arr2(&[[0.0]])),
    )
}
