//! Error types for cfrec

use std::path::PathBuf;
use std::process::ExitCode;

use collabfilter::CfError;
use thiserror::Error;

/// Result type alias for CLI operations
pub(crate) type Result<T> = std::result::Result<T, CliError>;

/// CLI error types
#[derive(Error, Debug)]
pub(crate) enum CliError {
    /// File not found
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// Not a file (e.g., directory)
    #[error("Not a file: {0}")]
    NotAFile(PathBuf),

    /// Rating file could not be parsed
    #[error("Invalid rating file: {0}")]
    InvalidFormat(String),

    /// Parameter rejected before running the engine
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding failed
    #[error("Serialization failed: {0}")]
    Serialization(String),
}

impl CliError {
    /// Numeric process status for this error
    pub(crate) fn code(&self) -> u8 {
        match self {
            Self::FileNotFound(_) | Self::NotAFile(_) => 3,
            Self::InvalidFormat(_) => 4,
            Self::InvalidParameter(_) => 5,
            Self::Io(_) => 7,
            Self::Serialization(_) => 1,
        }
    }

    /// Get exit code for this error
    pub(crate) fn exit_code(&self) -> ExitCode {
        ExitCode::from(self.code())
    }
}

impl From<CfError> for CliError {
    fn from(e: CfError) -> Self {
        match e {
            CfError::Io(io) => Self::Io(io),
            CfError::Parse { .. } | CfError::DimensionMismatch { .. } => {
                Self::InvalidFormat(e.to_string())
            }
            CfError::InvalidHyperparameter { .. } => Self::InvalidParameter(e.to_string()),
            CfError::Serialization(msg) => Self::Serialization(msg),
        }
    }
}
