//! Error types for block and pipeline operations.

use thiserror::Error;

/// Error type for block and pipeline operations.
#[derive(Error, Debug)]
pub enum OpsError {
    /// Invalid dimensions specified.
    #[error("invalid dimensions: {0}")]
    InvalidDimensions(String),

    /// Bands that must be co-registered have incompatible sizes.
    #[error("size mismatch: {0}")]
    SizeMismatch(String),

    /// Invalid parameter value.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Reading or writing a band failed.
    #[error(transparent)]
    Io(#[from] his_io::IoError),
}

/// Result type for block and pipeline operations.
pub type OpsResult<T> = Result<T, OpsError>;
