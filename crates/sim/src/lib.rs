//! # estim-sim
//!
//! Generates noisy state and output trajectories from a linear state-space
//! model, for exercising estimators against a known ground truth.
//!
//! A [`Simulator`] owns the model, the initial condition and pre-factored
//! process / measurement noise. [`Simulator::simulate`] returns a
//! [`Trajectory`] holding the true states and the noisy outputs.

mod config;
mod error;
mod simulate;

pub use config::SimConfig;
pub use error::SimError;
pub use simulate::{Simulator, Trajectory};
