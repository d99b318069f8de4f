//! In-memory bands.
//!
//! [`MemoryBand`] is both a [`RowSource`] and a [`RowSink`]: rows are read
//! by index from its storage and written by appending. Useful for tests and
//! for callers that already hold whole bands in memory.

use his_core::{FpRange, Sample};

use crate::traits::{check_read, check_row_len};
use crate::{IoError, IoResult, RowSink, RowSource};

/// Row-major single-band raster held in memory.
#[derive(Debug, Clone, PartialEq)]
pub struct MemoryBand {
    width: u32,
    height: u32,
    data: Vec<Sample>,
    rows: u32,
    range: FpRange,
}

impl MemoryBand {
    /// Creates an empty band ready to receive `height` rows.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: Vec::with_capacity(width as usize * height as usize),
            rows: 0,
            range: FpRange::new(),
        }
    }

    /// Creates a fully populated band from rows of equal length.
    pub fn from_rows(width: u32, rows: Vec<Vec<Sample>>) -> IoResult<Self> {
        let mut band = Self::new(width, rows.len() as u32);
        for row in &rows {
            band.write_row(row)?;
        }
        Ok(band)
    }

    /// Creates a populated band from row-major raw values.
    ///
    /// NaN and values equal to `nodata` become no-data.
    pub fn from_raw(width: u32, height: u32, values: &[f64], nodata: Option<f64>) -> IoResult<Self> {
        let expected = width as usize * height as usize;
        if values.len() != expected {
            return Err(IoError::DimensionMismatch {
                expected: format!("{} samples", expected),
                actual: format!("{} samples", values.len()),
            });
        }
        let data = his_core::sample::row_from_raw(values, nodata);
        let mut range = FpRange::new();
        range.update_row(&data);
        Ok(Self { width, height, data, rows: height, range })
    }

    /// One row of the populated part of the band.
    pub fn row(&self, row: u32) -> Option<&[Sample]> {
        if row >= self.rows {
            return None;
        }
        let w = self.width as usize;
        let start = row as usize * w;
        self.data.get(start..start + w)
    }

    /// All populated samples, row-major.
    pub fn samples(&self) -> &[Sample] {
        &self.data
    }

    /// Returns true once every declared row has been written.
    pub fn is_complete(&self) -> bool {
        self.rows == self.height
    }
}

impl RowSource for MemoryBand {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn read_row(&mut self, row: u32, buf: &mut [Sample]) -> IoResult<()> {
        check_read(self.width, self.height, row, buf)?;
        let src = self.row(row).ok_or(IoError::RowOutOfRange {
            row,
            height: self.rows_written(),
        })?;
        buf.copy_from_slice(src);
        Ok(())
    }
}

impl RowSink for MemoryBand {
    fn width(&self) -> u32 {
        self.width
    }

    fn write_row(&mut self, row: &[Sample]) -> IoResult<()> {
        check_row_len(self.width, row)?;
        if self.is_complete() {
            return Err(IoError::RowOutOfRange {
                row: self.rows_written(),
                height: self.height,
            });
        }
        self.range.update_row(row);
        self.data.extend_from_slice(row);
        self.rows += 1;
        Ok(())
    }

    fn rows_written(&self) -> u32 {
        self.rows
    }

    fn range(&self) -> FpRange {
        self.range
    }
}
