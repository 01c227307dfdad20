//! Correlated zero-mean Gaussian sampling.
//!
//! The covariance `Σ` is factored by SVD as `Σ = U S Uᵀ` and samples are
//! formed as `L Z` with `L = U sqrt(S)` and `Z` a matrix of independent
//! standard-normal draws. Unlike Cholesky, the SVD copes with singular and
//! nearly singular covariances.

use nalgebra::DMatrix;
use ndarray::{Array1, Array2};

use crate::config::GaussianConfig;
use crate::error::RndError;
use crate::source::RandomSource;

/// Relative threshold below which a singular value counts as zero when
/// reporting the covariance rank.
const RANK_TOLERANCE: f64 = 1e-12;

/// Draws `count` samples from `N(0, cov)`, returned as the columns of a
/// `dim × count` matrix.
///
/// Equivalent to [`GaussianSampler::new`] with the default configuration
/// followed by [`GaussianSampler::sample`].
///
/// # Errors
///
/// - [`RndError::InvalidSampleCount`] if `count <= 1`.
/// - [`RndError::NonSquareCovariance`] / [`RndError::EmptyCovariance`] for a
///   malformed covariance.
/// - [`RndError::Factorization`] if the covariance has non-finite entries or
///   the SVD does not converge.
///
/// # Example
///
/// ```
/// use estim_rnd::sample_correlated_gaussian;
/// use ndarray::arr2;
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let cov = arr2(&[[2.0, 0.5], [0.5, 1.0]]);
/// let mut rng = StdRng::seed_from_u64(42);
/// let samples = sample_correlated_gaussian(&cov, 10, &mut rng).unwrap();
/// assert_eq!(samples.dim(), (2, 10));
/// ```
pub fn sample_correlated_gaussian(
    cov: &Array2<f64>,
    count: usize,
    rng: &mut impl RandomSource,
) -> Result<Array2<f64>, RndError> {
    check_count(count)?;
    GaussianSampler::new(cov, &GaussianConfig::default())?.sample(count, rng)
}

/// A zero-mean Gaussian with a pre-factored covariance.
///
/// Only the factor `L` is kept; the covariance passed to [`GaussianSampler::new`]
/// is never retained or modified.
#[derive(Clone, Debug)]
pub struct GaussianSampler {
    factor: Array2<f64>,
}

impl GaussianSampler {
    /// Factors `cov` for repeated sampling.
    ///
    /// # Errors
    ///
    /// Returns [`RndError::InvalidConfig`] for an invalid `config`,
    /// [`RndError::NonSquareCovariance`] / [`RndError::EmptyCovariance`] for a
    /// malformed covariance and [`RndError::Factorization`] if the SVD
    /// cannot be computed.
    #[tracing::instrument(skip(cov, config), fields(dim = cov.nrows()))]
    pub fn new(cov: &Array2<f64>, config: &GaussianConfig) -> Result<Self, RndError> {
        config.validate()?;

        let (rows, cols) = cov.dim();
        if rows != cols {
            return Err(RndError::NonSquareCovariance { rows, cols });
        }
        if rows == 0 {
            return Err(RndError::EmptyCovariance);
        }
        if cov.iter().any(|v| !v.is_finite()) {
            return Err(RndError::Factorization {
                reason: "covariance contains non-finite values",
            });
        }

        let n = rows;
        let m = DMatrix::from_fn(n, n, |i, j| cov[[i, j]]);
        let svd = m
            .try_svd(true, false, config.svd_epsilon(), config.max_iterations())
            .ok_or(RndError::Factorization {
                reason: "svd did not converge",
            })?;
        let u = svd.u.ok_or(RndError::Factorization {
            reason: "svd did not produce left singular vectors",
        })?;
        let s = svd.singular_values;

        let s_max = s.iter().copied().fold(0.0_f64, f64::max);
        let rank = s.iter().filter(|&&v| v > RANK_TOLERANCE * s_max).count();
        if rank < n {
            tracing::debug!(rank, n, "covariance is rank deficient");
        }

        let factor = Array2::from_shape_fn((n, n), |(i, j)| u[(i, j)] * s[j].sqrt());
        Ok(Self { factor })
    }

    /// Dimension of the distribution.
    pub fn dim(&self) -> usize {
        self.factor.nrows()
    }

    /// Returns a copy of the factor `L` (`L Lᵀ = Σ`).
    pub fn factor(&self) -> Array2<f64> {
        self.factor.clone()
    }

    /// Draws `count` samples as the columns of a `dim × count` matrix.
    ///
    /// # Errors
    ///
    /// Returns [`RndError::InvalidSampleCount`] if `count <= 1`.
    #[tracing::instrument(skip(self, rng), fields(dim = self.dim()))]
    pub fn sample(&self, count: usize, rng: &mut impl RandomSource) -> Result<Array2<f64>, RndError> {
        check_count(count)?;
        let z = Array2::from_shape_fn((self.dim(), count), |_| rng.standard_normal());
        Ok(self.factor.dot(&z))
    }

    /// Draws a single noise vector of length `dim`.
    pub fn sample_vector(&self, rng: &mut impl RandomSource) -> Array1<f64> {
        let z = Array1::from_shape_fn(self.dim(), |_| rng.standard_normal());
        self.factor.dot(&z)
    }
}

fn check_count(count: usize) -> Result<(), RndError> {
    if count <= 1 {
        return Err(RndError::InvalidSampleCount { count });
    }
    Ok(())
}
