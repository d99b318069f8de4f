//! Floating-point value range of a band.
//!
//! Tracks the minimum and maximum over every numeric sample seen, skipping
//! no-data. Output writers update it row by row so that the range of a
//! whole band is known once the last row is written.
//!
//! # Example
//!
//! ```rust
//! use his_core::FpRange;
//!
//! let mut range = FpRange::new();
//! assert!(range.is_empty());
//!
//! range.update_row(&[Some(0.5), None, Some(0.25)]);
//! assert_eq!(range.min_max(), Some((0.25, 0.5)));
//! ```

use serde::{Deserialize, Serialize};

use crate::Sample;

/// Running min/max over non-no-data samples.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FpRange {
    min: Option<f64>,
    max: Option<f64>,
}

impl FpRange {
    /// Creates an empty range.
    pub const fn new() -> Self {
        Self { min: None, max: None }
    }

    /// Returns true if no numeric sample has been seen.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.min.is_none()
    }

    /// Includes one sample; no-data and NaN are ignored.
    #[inline]
    pub fn update(&mut self, sample: Sample) {
        let Some(v) = sample else { return };
        if v.is_nan() {
            return;
        }
        self.min = Some(self.min.map_or(v, |m| m.min(v)));
        self.max = Some(self.max.map_or(v, |m| m.max(v)));
    }

    /// Includes every sample of a row.
    pub fn update_row(&mut self, row: &[Sample]) {
        for &s in row {
            self.update(s);
        }
    }

    /// Combines two ranges.
    pub fn merge(self, other: FpRange) -> FpRange {
        let mut out = self;
        out.update(other.min);
        out.update(other.max);
        out
    }

    /// Smallest value seen.
    #[inline]
    pub fn min(&self) -> Option<f64> {
        self.min
    }

    /// Largest value seen.
    #[inline]
    pub fn max(&self) -> Option<f64> {
        self.max
    }

    /// Both bounds, or `None` when the range is empty.
    pub fn min_max(&self) -> Option<(f64, f64)> {
        self.min.zip(self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ignores_nodata() {
        let mut range = FpRange::new();
        range.update_row(&[None, None]);
        assert!(range.is_empty());
        assert_eq!(range.min_max(), None);
    }

    #[test]
    fn test_tracks_bounds() {
        let mut range = FpRange::new();
        range.update_row(&[Some(120.0), Some(0.0), None, Some(240.0)]);
        assert_eq!(range.min(), Some(0.0));
        assert_eq!(range.max(), Some(240.0));
    }

    #[test]
    fn test_ignores_nan() {
        let mut range = FpRange::new();
        range.update(Some(f64::NAN));
        assert!(range.is_empty());
    }

    #[test]
    fn test_merge() {
        let mut a = FpRange::new();
        a.update_row(&[Some(0.2), Some(0.4)]);
        let mut b = FpRange::new();
        b.update_row(&[Some(0.1), Some(0.3)]);

        assert_eq!(a.merge(b).min_max(), Some((0.1, 0.4)));
        assert_eq!(a.merge(FpRange::new()), a);
        assert_eq!(FpRange::new().merge(b), b);
    }
}
