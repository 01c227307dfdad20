//! # estim-rnd
//!
//! Sampling routines consumed by state estimators.
//!
//! | Routine | Purpose | Algorithm |
//! |---------|---------|-----------|
//! | [`sample_correlated_gaussian`] | Process / measurement noise | SVD square root `L = U sqrt(S)`, samples `L Z` |
//! | [`weighted_draw`] | Particle resampling | Roulette wheel: CDF + binary search |
//!
//! Randomness is always injected through a [`RandomSource`]; any
//! [`rand::Rng`] qualifies.
//!
//! # Quick start
//!
//! ```
//! use estim_rnd::{sample_correlated_gaussian, weighted_draw};
//! use ndarray::arr2;
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let mut rng = StdRng::seed_from_u64(42);
//!
//! let cov = arr2(&[[1.0, 0.9], [0.9, 1.0]]);
//! let noise = sample_correlated_gaussian(&cov, 100, &mut rng).unwrap();
//! assert_eq!(noise.dim(), (2, 100));
//!
//! let picks = weighted_draw(&[0.1, 0.7, 0.2], 10, &mut rng).unwrap();
//! assert_eq!(picks.len(), 10);
//! ```

mod config;
mod error;
mod gaussian;
mod roulette;
mod source;

pub use config::{GaussianConfig, RouletteConfig, ZeroWeightPolicy};
pub use error::RndError;
pub use gaussian::{GaussianSampler, sample_correlated_gaussian};
pub use roulette::{RouletteWheel, resample_columns, weighted_draw, weighted_draw_with};
pub use source::RandomSource;
