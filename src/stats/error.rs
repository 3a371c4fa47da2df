//! Error types for statistical operations.

use thiserror::Error;

/// Result type for statistics operations.
pub type StatsResult<T> = Result<T, StatsError>;

/// Errors that can occur during statistical operations.
///
/// Every variant is a deterministic input-validation failure: retrying the
/// same call with the same input fails the same way.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StatsError {
    /// Input sequence is empty when non-empty data is required.
    #[error("Empty data in {context}")]
    EmptyData { context: String },

    /// Raw input had no usable numeric values after coercion.
    #[error("No numeric data in {context}")]
    NoNumericData { context: String },

    /// Input data has fewer points than the statistic requires.
    #[error("Insufficient data in {context}: need {required} elements, got {got}")]
    InsufficientData {
        required: usize,
        got: usize,
        context: String,
    },

    /// Paired or aligned inputs have different lengths.
    #[error("Length mismatch in {context}: expected {expected}, got {got}")]
    LengthMismatch {
        expected: usize,
        got: usize,
        context: String,
    },

    /// Input is structurally valid but the statistic is undefined for it
    /// (zero variance, zero expected count, ...).
    #[error("Degenerate input in {context}: {reason}")]
    DegenerateInput { context: String, reason: String },

    /// Matrix could not be inverted: a pivot vanished during elimination.
    #[error("Singular matrix in {context}: pivot in column {column} is numerically zero")]
    SingularMatrix { context: String, column: usize },

    /// The caller asked for an analysis method the engine does not provide.
    #[error("Unsupported analysis method '{method}'")]
    UnsupportedMethod { method: String },

    /// Invalid parameter value for a distribution or routine.
    #[error("Invalid parameter '{name}' = {value}: {reason}")]
    InvalidParameter {
        name: String,
        value: f64,
        reason: String,
    },

    /// Probability value out of range [0, 1].
    #[error("Invalid probability {value}: must be in [0, 1]")]
    InvalidProbability { value: f64 },

    /// Engine configuration failed validation.
    #[error("Invalid configuration: {reason}")]
    InvalidConfig { reason: String },

    /// A JSON blob (analysis history) could not be written or read back.
    #[error("Serialization failed: {reason}")]
    Serialization { reason: String },
}

impl StatsError {
    pub(crate) fn empty(context: &str) -> Self {
        Self::EmptyData {
            context: context.to_string(),
        }
    }

    pub(crate) fn insufficient(required: usize, got: usize, context: &str) -> Self {
        Self::InsufficientData {
            required,
            got,
            context: context.to_string(),
        }
    }

    pub(crate) fn length_mismatch(expected: usize, got: usize, context: &str) -> Self {
        Self::LengthMismatch {
            expected,
            got,
            context: context.to_string(),
        }
    }

    pub(crate) fn degenerate(context: &str, reason: impl Into<String>) -> Self {
        Self::DegenerateInput {
            context: context.to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid_parameter(name: &str, value: f64, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.to_string(),
            value,
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = StatsError::invalid_parameter("df", -1.0, "must be positive");
        assert!(err.to_string().contains("df"));
        assert!(err.to_string().contains("-1"));

        let err = StatsError::InvalidProbability { value: 1.5 };
        assert!(err.to_string().contains("1.5"));
        assert!(err.to_string().contains("[0, 1]"));

        let err = StatsError::insufficient(2, 1, "variance");
        assert_eq!(
            err.to_string(),
            "Insufficient data in variance: need 2 elements, got 1"
        );
    }

    #[test]
    fn test_singular_matrix_display() {
        let err = StatsError::SingularMatrix {
            context: "multiple regression".to_string(),
            column: 2,
        };
        assert!(err.to_string().contains("column 2"));
    }
}
