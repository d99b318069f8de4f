//! Error types for his-core operations.
//!
//! Covers the failures that can be detected before any row reaches the
//! converter: an out-of-range bit depth, a non-positive normalization
//! ceiling, and band rows of unequal length.
//!
//! # Usage
//!
//! ```rust
//! use his_core::{BitDepth, Error};
//!
//! let err = BitDepth::new(0).unwrap_err();
//! assert!(matches!(err, Error::InvalidBitDepth { bits: 0 }));
//! ```

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while setting up a conversion.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// Bit depth outside the supported `2..=16` range.
    #[error("invalid bit depth {bits}: expected {min}..={max}", min = crate::BitDepth::MIN, max = crate::BitDepth::MAX)]
    InvalidBitDepth {
        /// The rejected bit depth.
        bits: i64,
    },

    /// Normalization ceiling is zero, negative or not finite.
    #[error("invalid normalization ceiling {0}: must be a positive finite number")]
    InvalidMaxColors(f64),

    /// One band row does not have the expected number of columns.
    #[error("row length mismatch in band {band}: expected {expected} columns, got {actual}")]
    RowLengthMismatch {
        /// Index of the offending band (0, 1 or 2).
        band: usize,
        /// Expected number of columns.
        expected: usize,
        /// Actual number of columns.
        actual: usize,
    },
}
