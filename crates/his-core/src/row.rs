//! Row buffers for one scanline.
//!
//! A [`RowBuffer`] holds three equal-length band rows. On input they are
//! red, green and blue; after an in-place conversion the same storage holds
//! hue, intensity and saturation. The buffer is owned by the caller and is
//! reused from one scanline to the next.
//!
//! # Example
//!
//! ```rust
//! use his_core::RowBuffer;
//!
//! let mut rows = RowBuffer::new(4);
//! assert_eq!(rows.columns(), 4);
//!
//! let [red, green, blue] = rows.bands_mut();
//! red[0] = Some(255.0);
//! green[0] = Some(0.0);
//! blue[0] = Some(0.0);
//! assert_eq!(rows.band(0)[0], Some(255.0));
//! ```

use crate::{Error, Result, Sample};

/// Three caller-owned band rows of equal length.
#[derive(Debug, Clone, PartialEq)]
pub struct RowBuffer {
    bands: [Vec<Sample>; 3],
}

impl RowBuffer {
    /// Creates a buffer of `columns` no-data samples per band.
    pub fn new(columns: usize) -> Self {
        Self {
            bands: [vec![None; columns], vec![None; columns], vec![None; columns]],
        }
    }

    /// Wraps three existing rows, checking that their lengths agree.
    pub fn from_bands(bands: [Vec<Sample>; 3]) -> Result<Self> {
        let expected = bands[0].len();
        for (band, row) in bands.iter().enumerate().skip(1) {
            if row.len() != expected {
                return Err(Error::RowLengthMismatch {
                    band,
                    expected,
                    actual: row.len(),
                });
            }
        }
        Ok(Self { bands })
    }

    /// Number of columns per band.
    #[inline]
    pub fn columns(&self) -> usize {
        self.bands[0].len()
    }

    /// Returns true if the rows have no columns.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.columns() == 0
    }

    /// Read access to one band row.
    ///
    /// # Panics
    ///
    /// Panics if `index >= 3`.
    #[inline]
    pub fn band(&self, index: usize) -> &[Sample] {
        &self.bands[index]
    }

    /// Read access to all three rows at once.
    pub fn bands(&self) -> [&[Sample]; 3] {
        let [a, b, c] = &self.bands;
        [a.as_slice(), b.as_slice(), c.as_slice()]
    }

    /// Disjoint write access to all three rows at once.
    pub fn bands_mut(&mut self) -> [&mut [Sample]; 3] {
        let [a, b, c] = &mut self.bands;
        [a.as_mut_slice(), b.as_mut_slice(), c.as_mut_slice()]
    }

    /// Resets every sample to no-data, keeping the allocation.
    pub fn clear(&mut self) {
        for band in &mut self.bands {
            band.fill(None);
        }
    }
}
