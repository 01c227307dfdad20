//! Noisy trajectory simulation.

use estim_model::{InitialCondition, LinearSystemModel};
use estim_rnd::{GaussianConfig, GaussianSampler, RandomSource};
use ndarray::{Array1, Array2};

use crate::config::SimConfig;
use crate::error::SimError;

/// States and outputs produced by [`Simulator::simulate`].
#[derive(Clone, Debug, PartialEq)]
pub struct Trajectory {
    states: Array2<f64>,
    outputs: Array2<f64>,
}

impl Trajectory {
    /// States as columns, `n × (steps + 1)`. Column 0 is the initial state.
    pub fn states(&self) -> &Array2<f64> {
        &self.states
    }

    /// Outputs as columns, `p × steps`. Column `t` observes state column `t + 1`.
    pub fn outputs(&self) -> &Array2<f64> {
        &self.outputs
    }

    /// Number of simulated steps.
    pub fn steps(&self) -> usize {
        self.outputs.ncols()
    }

    /// Returns a copy of the last state.
    pub fn final_state(&self) -> Array1<f64> {
        self.states.column(self.states.ncols() - 1).to_owned()
    }

    /// Consumes the trajectory, returning `(states, outputs)`.
    pub fn into_parts(self) -> (Array2<f64>, Array2<f64>) {
        (self.states, self.outputs)
    }
}

/// Drives a [`LinearSystemModel`] forward under sampled Gaussian noise.
///
/// Each step draws process noise `q ~ N(0, Q)`, propagates the state, draws
/// measurement noise `r ~ N(0, R)` and observes the new state. Either noise
/// term may be left out.
///
/// # Example
///
/// ```
/// use estim_model::{InitialCondition, presets};
/// use estim_sim::{SimConfig, Simulator};
/// use ndarray::{Array2, arr1, arr2};
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let model = presets::falling_ball(0.1).unwrap();
/// let initial = InitialCondition::new(&arr1(&[10.0, 0.0]), &Array2::eye(2)).unwrap();
/// let sim = Simulator::new(
///     model,
///     initial,
///     None,
///     Some(&arr2(&[[0.25]])),
///     SimConfig::new().with_steps(20),
/// )
/// .unwrap();
///
/// let gravity = Array2::from_elem((1, 20), presets::GRAVITY);
/// let mut rng = StdRng::seed_from_u64(42);
/// let traj = sim.simulate(Some(&gravity), &mut rng).unwrap();
/// assert_eq!(traj.outputs().dim(), (1, 20));
/// ```
#[derive(Clone, Debug)]
pub struct Simulator {
    model: LinearSystemModel,
    initial: InitialCondition,
    initial_noise: Option<GaussianSampler>,
    process_noise: Option<GaussianSampler>,
    measurement_noise: Option<GaussianSampler>,
    config: SimConfig,
}

impl Simulator {
    /// Builds a simulator, factoring the noise covariances once.
    ///
    /// # Errors
    ///
    /// - [`SimError::InvalidConfig`] / [`SimError::Rnd`] for an invalid config.
    /// - [`SimError::DimensionMismatch`] if the initial condition or a
    ///   covariance does not match the model dimensions.
    /// - [`SimError::Rnd`] if a covariance cannot be factored.
    #[tracing::instrument(skip_all, fields(steps = config.steps()))]
    pub fn new(
        model: LinearSystemModel,
        initial: InitialCondition,
        process_cov: Option<&Array2<f64>>,
        measurement_cov: Option<&Array2<f64>>,
        config: SimConfig,
    ) -> Result<Self, SimError> {
        config.validate()?;

        let (n, p) = model.dims();
        if initial.dim() != n {
            return Err(SimError::DimensionMismatch {
                field: "initial condition",
                expected: n,
                got: initial.dim(),
            });
        }

        let initial_noise = if config.sample_initial_state() {
            Some(noise_sampler("initial covariance", &initial.cov(), n, config.gaussian())?)
        } else {
            None
        };
        let process_noise = process_cov
            .map(|cov| noise_sampler("process covariance", cov, n, config.gaussian()))
            .transpose()?;
        let measurement_noise = measurement_cov
            .map(|cov| noise_sampler("measurement covariance", cov, p, config.gaussian()))
            .transpose()?;

        Ok(Self {
            model,
            initial,
            initial_noise,
            process_noise,
            measurement_noise,
            config,
        })
    }

    /// The simulated model.
    pub fn model(&self) -> &LinearSystemModel {
        &self.model
    }

    /// The run configuration.
    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Runs one simulation.
    ///
    /// `controls`, when given, must be `m × steps`; column `t` is the control
    /// applied at step `t`.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::ControlShape`] for a wrongly shaped control matrix
    /// and [`SimError::Model`] if propagation or observation fails.
    #[tracing::instrument(skip(self, controls, rng), fields(steps = self.config.steps()))]
    pub fn simulate(
        &self,
        controls: Option<&Array2<f64>>,
        rng: &mut impl RandomSource,
    ) -> Result<Trajectory, SimError> {
        let steps = self.config.steps();
        let (n, p) = self.model.dims();

        if let Some(c) = controls {
            let m = self.model.control_dim();
            if c.dim() != (m, steps) {
                return Err(SimError::ControlShape {
                    expected_rows: m,
                    expected_cols: steps,
                    rows: c.nrows(),
                    cols: c.ncols(),
                });
            }
        }

        let mut x = self.initial.state();
        if let Some(s) = &self.initial_noise {
            x += &s.sample_vector(rng);
        }

        let mut states = Array2::zeros((n, steps + 1));
        let mut outputs = Array2::zeros((p, steps));
        states.column_mut(0).assign(&x);

        for t in 0..steps {
            let u = controls.map(|c| c.column(t).to_owned());
            let q = self.process_noise.as_ref().map(|s| s.sample_vector(rng));
            x = self.model.propagate(&x, u.as_ref(), q.as_ref())?;

            let r = self.measurement_noise.as_ref().map(|s| s.sample_vector(rng));
            let y = self.model.observe(&x, u.as_ref(), r.as_ref())?;

            states.column_mut(t + 1).assign(&x);
            outputs.column_mut(t).assign(&y);
            tracing::trace!(step = t, "simulated step");
        }

        tracing::debug!(steps, "simulation complete");
        Ok(Trajectory { states, outputs })
    }
}

fn noise_sampler(
    field: &'static str,
    cov: &Array2<f64>,
    dim: usize,
    config: &GaussianConfig,
) -> Result<GaussianSampler, SimError> {
    let (rows, cols) = cov.dim();
    if rows != dim || cols != dim {
        return Err(SimError::DimensionMismatch {
            field,
            expected: dim,
            got: if rows != dim { rows } else { cols },
        });
    }
    Ok(GaussianSampler::new(cov, config)?)
}
