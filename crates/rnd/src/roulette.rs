//! Roulette-wheel (fitness-proportionate) selection.
//!
//! Index `i` is drawn with probability `w[i] / Σw`. The wheel is the
//! cumulative sum of the weights; each draw scales a unit-uniform value by
//! the total weight and binary-searches for the first CDF entry above it.
//! Normalising the weights is never needed.

use ndarray::{Array2, Axis};

use crate::config::{RouletteConfig, ZeroWeightPolicy};
use crate::error::RndError;
use crate::source::RandomSource;

/// Draws `count` indices into `weights`, with replacement, proportional to
/// the weights.
///
/// Uses the default [`RouletteConfig`], which rejects all-zero weights.
///
/// # Errors
///
/// See [`RouletteWheel::new`].
///
/// # Example
///
/// ```
/// use estim_rnd::weighted_draw;
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let mut rng = StdRng::seed_from_u64(42);
/// let draws = weighted_draw(&[1.0, 0.0, 0.0], 5, &mut rng).unwrap();
/// assert_eq!(draws, vec![0; 5]);
/// ```
pub fn weighted_draw(
    weights: &[f64],
    count: usize,
    rng: &mut impl RandomSource,
) -> Result<Vec<usize>, RndError> {
    weighted_draw_with(weights, count, &RouletteConfig::default(), rng)
}

/// Like [`weighted_draw`], with an explicit configuration.
#[tracing::instrument(skip(weights, config, rng), fields(n_weights = weights.len()))]
pub fn weighted_draw_with(
    weights: &[f64],
    count: usize,
    config: &RouletteConfig,
    rng: &mut impl RandomSource,
) -> Result<Vec<usize>, RndError> {
    Ok(RouletteWheel::new(weights, config)?.draw_n(count, rng))
}

/// Resamples a particle ensemble.
///
/// `particles` holds one particle per column. The result has the same shape;
/// its j-th column is a copy of the particle picked by the j-th weighted
/// draw.
///
/// # Errors
///
/// Returns [`RndError::WeightCountMismatch`] if `weights.len()` differs from
/// the number of columns, plus any error of [`weighted_draw`].
pub fn resample_columns(
    particles: &Array2<f64>,
    weights: &[f64],
    rng: &mut impl RandomSource,
) -> Result<Array2<f64>, RndError> {
    let n_particles = particles.ncols();
    if weights.len() != n_particles {
        return Err(RndError::WeightCountMismatch {
            weights: weights.len(),
            particles: n_particles,
        });
    }
    let indices = weighted_draw(weights, n_particles, rng)?;
    Ok(particles.select(Axis(1), &indices))
}

/// A prepared discrete distribution over `0..len`.
#[derive(Clone, Debug)]
pub struct RouletteWheel {
    /// Cumulative weights; `None` when the wheel is uniform.
    cdf: Option<Vec<f64>>,
    len: usize,
    /// Largest index with positive weight, the landing slot when rounding
    /// pushes a draw onto the total weight.
    last_positive: usize,
}

impl RouletteWheel {
    /// Builds the wheel for `weights`.
    ///
    /// # Errors
    ///
    /// - [`RndError::EmptyWeights`] if `weights` is empty.
    /// - [`RndError::InvalidWeight`] for a negative or non-finite weight.
    /// - [`RndError::TotalWeightOverflow`] if finite weights sum to infinity.
    /// - [`RndError::ZeroTotalWeight`] if every weight is zero and the policy
    ///   is [`ZeroWeightPolicy::Reject`].
    pub fn new(weights: &[f64], config: &RouletteConfig) -> Result<Self, RndError> {
        if weights.is_empty() {
            return Err(RndError::EmptyWeights);
        }
        if let Some((index, &value)) = weights
            .iter()
            .enumerate()
            .find(|(_, w)| !w.is_finite() || **w < 0.0)
        {
            return Err(RndError::InvalidWeight { index, value });
        }

        let len = weights.len();
        let mut cdf = Vec::with_capacity(len);
        let mut acc = 0.0;
        for &w in weights {
            acc += w;
            cdf.push(acc);
        }

        if acc <= 0.0 {
            return match config.zero_weight_policy() {
                ZeroWeightPolicy::Reject => Err(RndError::ZeroTotalWeight { len }),
                ZeroWeightPolicy::Uniform => {
                    tracing::debug!(len, "all weights zero, drawing uniformly");
                    Ok(Self {
                        cdf: None,
                        len,
                        last_positive: len - 1,
                    })
                }
            };
        }
        if !acc.is_finite() {
            return Err(RndError::TotalWeightOverflow { len });
        }

        let last_positive = weights.iter().rposition(|&w| w > 0.0).unwrap_or(len - 1);
        Ok(Self {
            cdf: Some(cdf),
            len,
            last_positive,
        })
    }

    /// Number of indices on the wheel.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always `false`: empty wheels cannot be built.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Sum of the weights (0 for a uniform fallback wheel).
    pub fn total_weight(&self) -> f64 {
        self.cdf
            .as_ref()
            .and_then(|cdf| cdf.last().copied())
            .unwrap_or(0.0)
    }

    /// Draws one index.
    pub fn draw(&self, rng: &mut impl RandomSource) -> usize {
        let u = rng.unit_uniform();
        match &self.cdf {
            Some(cdf) => {
                let x = u * cdf[self.len - 1];
                // smallest i with cdf[i] > x
                let idx = cdf.partition_point(|&c| c <= x);
                if idx >= self.len {
                    self.last_positive
                } else {
                    idx
                }
            }
            None => ((u * self.len as f64) as usize).min(self.len - 1),
        }
    }

    /// Draws `count` indices in draw order.
    pub fn draw_n(&self, count: usize, rng: &mut impl RandomSource) -> Vec<usize> {
        let out: Vec<usize> = (0..count).map(|_| self.draw(rng)).collect();
        tracing::trace!(count, "roulette draws complete");
        out
    }
}
