//! Error types for collabfilter operations.
//!
//! The prediction engine itself is total: similarity, ranking, and
//! prediction never fail on a rectangular matrix. Errors come from building
//! matrices, parsing rating files, and validating user-supplied parameters.

use thiserror::Error;

/// Main error type for collabfilter operations.
///
/// # Examples
///
/// ```
/// use collabfilter::error::CfError;
///
/// let err = CfError::dimension_mismatch("row 2 length", 4, 3);
/// assert!(err.to_string().contains("dimension mismatch"));
/// ```
#[derive(Debug, Error)]
pub enum CfError {
    /// Matrix dimensions are inconsistent (ragged rows, wrong data length).
    #[error("Matrix dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Expected dimensions description
        expected: String,
        /// Actual dimensions found
        actual: String,
    },

    /// Invalid parameter value provided.
    #[error("Invalid hyperparameter: {param} = {value}, expected {constraint}")]
    InvalidHyperparameter {
        /// Parameter name
        param: String,
        /// Provided value
        value: String,
        /// Constraint description
        constraint: String,
    },

    /// Rating file could not be parsed.
    #[error("Parse error at line {line}: {message}")]
    Parse {
        /// 1-based line number in the input
        line: usize,
        /// What went wrong
        message: String,
    },

    /// I/O error (file not found, permission denied, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for CfError {
    fn from(err: serde_json::Error) -> Self {
        CfError::Serialization(err.to_string())
    }
}

impl CfError {
    /// Create a dimension mismatch error with descriptive context
    #[must_use]
    pub fn dimension_mismatch(context: &str, expected: usize, actual: usize) -> Self {
        Self::DimensionMismatch {
            expected: format!("{context}={expected}"),
            actual: format!("{actual}"),
        }
    }

    /// Create an invalid parameter error
    #[must_use]
    pub fn invalid_hyperparameter(
        param: &str,
        value: impl std::fmt::Display,
        constraint: &str,
    ) -> Self {
        Self::InvalidHyperparameter {
            param: param.to_string(),
            value: value.to_string(),
            constraint: constraint.to_string(),
        }
    }

    /// Create a parse error for a 1-based input line
    #[must_use]
    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            line,
            message: message.into(),
        }
    }
}

/// Convenience type alias for Results.
pub type Result<T> = std::result::Result<T, CfError>;
