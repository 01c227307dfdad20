//! Error types for the estim-sim crate.

use estim_model::ModelError;
use estim_rnd::RndError;

/// Error type for all fallible operations in the estim-sim crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SimError {
    /// Model construction, propagation or observation failed.
    #[error(transparent)]
    Model(#[from] ModelError),

    /// Noise factorization or sampling failed.
    #[error(transparent)]
    Rnd(#[from] RndError),

    /// Returned when configuration is invalid.
    #[error("invalid configuration: {reason}")]
    InvalidConfig {
        /// Description of the problem.
        reason: String,
    },

    /// Returned when a noise covariance or initial condition does not fit
    /// the model.
    #[error("{field}: expected dimension {expected}, got {got}")]
    DimensionMismatch {
        /// Name of the mismatched input.
        field: &'static str,
        /// Dimension required by the model.
        expected: usize,
        /// Dimension supplied.
        got: usize,
    },

    /// Returned when the control matrix is not `m × steps`.
    #[error("controls must be {expected_rows}x{expected_cols}, got {rows}x{cols}")]
    ControlShape {
        /// Required row count (control dimension).
        expected_rows: usize,
        /// Required column count (number of steps).
        expected_cols: usize,
        /// Supplied row count.
        rows: usize,
        /// Supplied column count.
        cols: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_from_model() {
        let inner = ModelError::DimensionMismatch {
            field: "state vector length",
            expected: 2,
            got: 1,
        };
        let err: SimError = inner.clone().into();
        assert_eq!(err.to_string(), inner.to_string());
        assert!(matches!(err, SimError::Model(_)));
    }

    #[test]
    fn error_from_rnd() {
        let err: SimError = RndError::EmptyCovariance.into();
        assert_eq!(err.to_string(), "covariance is empty");
    }

    #[test]
    fn error_invalid_config() {
        let err = SimError::InvalidConfig {
            reason: "steps must be >= 1".to_string(),
        };
        assert_eq!(err.to_string(), "invalid configuration: steps must be >= 1");
    }

    #[test]
    fn error_dimension_mismatch() {
        let err = SimError::DimensionMismatch {
            field: "process covariance",
            expected: 2,
            got: 3,
        };
        assert_eq!(
            err.to_string(),
            "process covariance: expected dimension 2, got 3"
        );
    }

    #[test]
    fn error_control_shape() {
        let err = SimError::ControlShape {
            expected_rows: 1,
            expected_cols: 10,
            rows: 2,
            cols: 10,
        };
        assert_eq!(err.to_string(), "controls must be 1x10, got 2x10");
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<SimError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<SimError>();
    }
}
