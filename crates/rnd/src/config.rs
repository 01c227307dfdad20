//! Configuration for Gaussian sampling and roulette-wheel draws.

use crate::error::RndError;

/// Settings for the SVD used by [`GaussianSampler`](crate::GaussianSampler).
///
/// # Example
///
/// ```
/// use estim_rnd::GaussianConfig;
///
/// let config = GaussianConfig::new()
///     .with_svd_epsilon(1e-12)
///     .with_max_iterations(500);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GaussianConfig {
    /// Convergence tolerance of the SVD iteration.
    svd_epsilon: f64,
    /// Iteration cap for the SVD; 0 means no cap.
    max_iterations: usize,
}

impl GaussianConfig {
    /// Creates a configuration with defaults.
    ///
    /// Defaults: `svd_epsilon = f64::EPSILON`, `max_iterations = 0`
    /// (unbounded).
    pub fn new() -> Self {
        Self {
            svd_epsilon: f64::EPSILON,
            max_iterations: 0,
        }
    }

    /// Sets the SVD convergence tolerance.
    pub fn with_svd_epsilon(mut self, eps: f64) -> Self {
        self.svd_epsilon = eps;
        self
    }

    /// Sets the SVD iteration cap (0 = unbounded).
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    /// Returns the SVD convergence tolerance.
    pub fn svd_epsilon(&self) -> f64 {
        self.svd_epsilon
    }

    /// Returns the SVD iteration cap.
    pub fn max_iterations(&self) -> usize {
        self.max_iterations
    }

    /// Validates this configuration.
    pub fn validate(&self) -> Result<(), RndError> {
        if !self.svd_epsilon.is_finite() || self.svd_epsilon <= 0.0 {
            return Err(RndError::InvalidConfig {
                reason: format!(
                    "svd_epsilon must be finite and positive, got {}",
                    self.svd_epsilon
                ),
            });
        }
        Ok(())
    }
}

impl Default for GaussianConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// What a roulette wheel does when every weight is zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ZeroWeightPolicy {
    /// Fail with [`RndError::ZeroTotalWeight`].
    #[default]
    Reject,
    /// Treat every index as equally likely.
    Uniform,
}

/// Settings for roulette-wheel draws.
///
/// # Example
///
/// ```
/// use estim_rnd::{RouletteConfig, ZeroWeightPolicy};
///
/// let config = RouletteConfig::new().with_zero_weight_policy(ZeroWeightPolicy::Uniform);
/// assert_eq!(config.zero_weight_policy(), ZeroWeightPolicy::Uniform);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RouletteConfig {
    zero_weight_policy: ZeroWeightPolicy,
}

impl RouletteConfig {
    /// Creates a configuration with defaults (`zero_weight_policy = Reject`).
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the all-zero weights policy.
    pub fn with_zero_weight_policy(mut self, policy: ZeroWeightPolicy) -> Self {
        self.zero_weight_policy = policy;
        self
    }

    /// Returns the all-zero weights policy.
    pub fn zero_weight_policy(&self) -> ZeroWeightPolicy {
        self.zero_weight_policy
    }
}
