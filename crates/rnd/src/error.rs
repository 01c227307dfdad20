//! Error types for the estim-rnd crate.

/// Error type for all fallible operations in the estim-rnd crate.
///
/// Every variant except [`RndError::Factorization`] and
/// [`RndError::InvalidConfig`] reports an invalid argument.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RndError {
    /// Returned when fewer than two Gaussian samples are requested.
    #[error("sample count must be >= 2, got {count}")]
    InvalidSampleCount {
        /// The rejected sample count.
        count: usize,
    },

    /// Returned when the weight vector is empty.
    #[error("no weights provided")]
    EmptyWeights,

    /// Returned when a weight is negative or non-finite.
    #[error("weight {index} must be finite and non-negative, got {value}")]
    InvalidWeight {
        /// Position of the offending weight.
        index: usize,
        /// The offending value.
        value: f64,
    },

    /// Returned when every weight is zero and the policy rejects it.
    #[error("all {len} weights are zero")]
    ZeroTotalWeight {
        /// Number of weights supplied.
        len: usize,
    },

    /// Returned when finite weights sum past `f64::MAX`.
    #[error("sum of {len} weights overflows")]
    TotalWeightOverflow {
        /// Number of weights supplied.
        len: usize,
    },

    /// Returned when the number of weights differs from the number of particles.
    #[error("weights length {weights} does not match particle count {particles}")]
    WeightCountMismatch {
        /// Length of the weights slice.
        weights: usize,
        /// Number of particle columns.
        particles: usize,
    },

    /// Returned when the covariance matrix is not square.
    #[error("covariance must be square, got {rows}x{cols}")]
    NonSquareCovariance {
        /// Row count.
        rows: usize,
        /// Column count.
        cols: usize,
    },

    /// Returned when the covariance matrix has no rows.
    #[error("covariance is empty")]
    EmptyCovariance,

    /// Returned when the covariance could not be factorized.
    #[error("covariance factorization failed: {reason}")]
    Factorization {
        /// Why the factorization failed.
        reason: &'static str,
    },

    /// Returned when configuration is invalid.
    #[error("invalid configuration: {reason}")]
    InvalidConfig {
        /// Description of the problem.
        reason: String,
    },
}
