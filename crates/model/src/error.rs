//! Error types for the estim-model crate.

/// Error type for all fallible operations in the estim-model crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ModelError {
    /// Returned when a matrix or vector size disagrees with the model's
    /// declared dimensions.
    #[error("{field}: expected {expected}, got {got}")]
    DimensionMismatch {
        /// Name of the mismatched dimension.
        field: &'static str,
        /// Expected size.
        expected: usize,
        /// Actual size.
        got: usize,
    },

    /// Returned when a scalar model parameter is out of range.
    #[error("invalid parameter {name}: {value}")]
    InvalidParameter {
        /// Name of the parameter.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },
}
