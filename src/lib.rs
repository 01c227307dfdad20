//! # estim
//!
//! Building blocks for state estimation:
//!
//! - [`model`]: linear state-space models and initial conditions.
//! - [`rnd`]: correlated Gaussian noise and roulette-wheel resampling.
//! - [`sim`]: noisy trajectory simulation for testing estimators.
//!
//! The [`prelude`] pulls in the commonly used types.
//!
//! ```
//! use estim::prelude::*;
//! use ndarray::{Array2, arr1, arr2};
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let model = presets::falling_ball(0.1).unwrap();
//! let initial = InitialCondition::new(&arr1(&[10.0, 0.0]), &Array2::eye(2)).unwrap();
//! let sim = Simulator::new(model, initial, None, Some(&arr2(&[[0.1]])), SimConfig::new()).unwrap();
//!
//! let mut rng = StdRng::seed_from_u64(1);
//! let traj = sim.simulate(None, &mut rng).unwrap();
//! assert_eq!(traj.outputs().ncols(), 100);
//! ```

pub use estim_model as model;
pub use estim_rnd as rnd;
pub use estim_sim as sim;

/// Commonly used types and functions.
pub mod prelude {
    pub use estim_model::{InitialCondition, LinearSystemModel, ModelError, presets};
    pub use estim_rnd::{
        GaussianConfig, GaussianSampler, RandomSource, RndError, RouletteConfig, RouletteWheel,
        ZeroWeightPolicy, resample_columns, sample_correlated_gaussian, weighted_draw,
    };
    pub use estim_sim::{SimConfig, SimError, Simulator, Trajectory};
}
