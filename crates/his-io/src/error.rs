//! Error types for band I/O.

use std::io;
use thiserror::Error;

/// Band I/O error.
#[derive(Debug, Error)]
pub enum IoError {
    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Unsupported raster layout or sample type.
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Decoding error.
    #[error("decode error: {0}")]
    DecodeError(String),

    /// Encoding error.
    #[error("encode error: {0}")]
    EncodeError(String),

    /// Bands that must be co-registered have different sizes.
    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Expected size.
        expected: String,
        /// Actual size.
        actual: String,
    },

    /// Row index past the last row of the band.
    #[error("row {row} out of range for band with {height} rows")]
    RowOutOfRange {
        /// Requested row.
        row: u32,
        /// Band height.
        height: u32,
    },

    /// Row buffer length differs from the band width.
    #[error("row length mismatch: band width {expected}, row has {actual} columns")]
    RowLength {
        /// Band width.
        expected: usize,
        /// Row length.
        actual: usize,
    },

    /// A sink was finished with a different number of rows than declared.
    #[error("incomplete band: {written} of {expected} rows written")]
    Incomplete {
        /// Rows actually written.
        written: u32,
        /// Rows declared at creation.
        expected: u32,
    },

    /// Metadata sidecar could not be serialized or parsed.
    #[error("metadata error: {0}")]
    Metadata(#[from] serde_yaml::Error),
}

/// Result type for band I/O.
pub type IoResult<T> = Result<T, IoError>;
