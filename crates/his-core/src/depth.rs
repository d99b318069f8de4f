//! Source bit depth and the normalization ceiling.
//!
//! Samples are scaled into `[0, 1)` by dividing by `2^bits - 1`, the
//! largest value representable at the declared bit depth.
//!
//! # Example
//!
//! ```rust
//! use his_core::BitDepth;
//!
//! let depth = BitDepth::default();
//! assert_eq!(depth.bits(), 8);
//! assert_eq!(depth.max_colors(), 255.0);
//!
//! assert!(BitDepth::new(17).is_err());
//! ```

use std::fmt;

use crate::{Error, Result};

/// Declared bit depth of the source imagery, in `2..=16`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BitDepth(u8);

impl BitDepth {
    /// Smallest supported bit depth.
    pub const MIN: u8 = 2;
    /// Largest supported bit depth.
    pub const MAX: u8 = 16;
    /// Default bit depth (8-bit imagery).
    pub const DEFAULT: u8 = 8;

    /// Creates a bit depth, rejecting values outside `2..=16`.
    pub fn new(bits: i64) -> Result<Self> {
        if bits < Self::MIN as i64 || bits > Self::MAX as i64 {
            return Err(Error::InvalidBitDepth { bits });
        }
        Ok(Self(bits as u8))
    }

    /// Number of bits.
    #[inline]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Normalization ceiling, `2^bits - 1`.
    #[inline]
    pub fn max_colors(self) -> f64 {
        2f64.powi(self.0 as i32) - 1.0
    }
}

impl Default for BitDepth {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

impl TryFrom<u8> for BitDepth {
    type Error = Error;

    fn try_from(bits: u8) -> Result<Self> {
        Self::new(bits as i64)
    }
}

impl fmt::Display for BitDepth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-bit", self.0)
    }
}

/// Checks that a normalization ceiling is usable.
pub fn validate_max_colors(max_colors: f64) -> Result<f64> {
    if max_colors.is_finite() && max_colors > 0.0 {
        Ok(max_colors)
    } else {
        Err(Error::InvalidMaxColors(max_colors))
    }
}
