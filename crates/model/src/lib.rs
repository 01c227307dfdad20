//! # estim-model
//!
//! Dimension-checked discrete-time affine state-space models.
//!
//! ```text
//! x[t+1] = A x[t] + B u[t] + q[t]
//! y[t]   = C x[t] + D u[t] + r[t]
//! ```
//!
//! | Symbol | Shape | Accessor | Meaning |
//! |--------|-------|----------|---------|
//! | A | n×n | [`LinearSystemModel::state_matrix()`] | State transition |
//! | B | n×m | [`LinearSystemModel::state_ctl_matrix()`] | Control to state (optional) |
//! | C | p×n | [`LinearSystemModel::output_matrix()`] | State to output |
//! | D | p×m | [`LinearSystemModel::output_ctl_matrix()`] | Control to output (optional) |
//!
//! The control `u` and the noise terms `q`/`r` are passed as `Option`s:
//! `None` skips the term entirely, which is not the same as passing a zero
//! vector.
//!
//! [`InitialCondition`] carries the initial mean and covariance an estimator
//! starts from.

mod error;
mod initial;
mod state_space;

pub mod presets;

pub use error::ModelError;
pub use initial::InitialCondition;
pub use state_space::LinearSystemModel;
