//! Configuration for trajectory simulation.

use estim_rnd::GaussianConfig;

use crate::error::SimError;

/// Configuration for a [`Simulator`](crate::Simulator) run.
///
/// # Example
///
/// ```
/// use estim_sim::SimConfig;
///
/// let config = SimConfig::new()
///     .with_steps(500)
///     .with_sample_initial_state(true);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SimConfig {
    steps: usize,
    sample_initial_state: bool,
    gaussian: GaussianConfig,
}

impl SimConfig {
    /// Creates a configuration with defaults.
    ///
    /// Defaults: `steps = 100`, `sample_initial_state = false`, default
    /// [`GaussianConfig`].
    pub fn new() -> Self {
        Self {
            steps: 100,
            sample_initial_state: false,
            gaussian: GaussianConfig::default(),
        }
    }

    /// Sets the number of simulated steps.
    pub fn with_steps(mut self, steps: usize) -> Self {
        self.steps = steps;
        self
    }

    /// Draws the initial state from the initial covariance instead of
    /// starting at the mean.
    pub fn with_sample_initial_state(mut self, sample: bool) -> Self {
        self.sample_initial_state = sample;
        self
    }

    /// Sets the factorization settings used for the noise covariances.
    pub fn with_gaussian(mut self, gaussian: GaussianConfig) -> Self {
        self.gaussian = gaussian;
        self
    }

    /// Returns the number of simulated steps.
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Returns whether the initial state is sampled.
    pub fn sample_initial_state(&self) -> bool {
        self.sample_initial_state
    }

    /// Returns the factorization settings.
    pub fn gaussian(&self) -> &GaussianConfig {
        &self.gaussian
    }

    /// Validates this configuration.
    pub fn validate(&self) -> Result<(), SimError> {
        if self.steps == 0 {
            return Err(SimError::InvalidConfig {
                reason: "steps must be >= 1".to_string(),
            });
        }
        self.gaussian.validate()?;
        Ok(())
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self::new()
    }
}
