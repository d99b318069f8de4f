//! Row source and sink traits.
//!
//! A source hands out rows of one band by index; a sink accepts rows of one
//! band in order. Both work on [`Sample`] rows, so no-data is already
//! resolved to `None` by the time a row leaves a source.

use his_core::{FpRange, Sample};

use crate::{IoError, IoResult};

/// Single-band raster readable one row at a time.
pub trait RowSource {
    /// Columns per row.
    fn width(&self) -> u32;

    /// Number of rows.
    fn height(&self) -> u32;

    /// Returns `(width, height)`.
    fn dimensions(&self) -> (u32, u32) {
        (self.width(), self.height())
    }

    /// Reads row `row` into `buf`, which must hold exactly `width` samples.
    fn read_row(&mut self, row: u32, buf: &mut [Sample]) -> IoResult<()>;
}

/// Single-band raster writable one row at a time, top to bottom.
pub trait RowSink {
    /// Columns per row.
    fn width(&self) -> u32;

    /// Appends the next row.
    fn write_row(&mut self, row: &[Sample]) -> IoResult<()>;

    /// Number of rows written so far.
    fn rows_written(&self) -> u32;

    /// Value range of everything written so far.
    fn range(&self) -> FpRange;
}

/// Boxed source for dynamic dispatch.
pub type BoxedSource = Box<dyn RowSource + Send>;

/// Boxed sink for dynamic dispatch.
pub type BoxedSink = Box<dyn RowSink + Send>;

impl<T: RowSource + ?Sized> RowSource for Box<T> {
    fn width(&self) -> u32 {
        (**self).width()
    }

    fn height(&self) -> u32 {
        (**self).height()
    }

    fn read_row(&mut self, row: u32, buf: &mut [Sample]) -> IoResult<()> {
        (**self).read_row(row, buf)
    }
}

impl<T: RowSink + ?Sized> RowSink for Box<T> {
    fn width(&self) -> u32 {
        (**self).width()
    }

    fn write_row(&mut self, row: &[Sample]) -> IoResult<()> {
        (**self).write_row(row)
    }

    fn rows_written(&self) -> u32 {
        (**self).rows_written()
    }

    fn range(&self) -> FpRange {
        (**self).range()
    }
}

/// Checks a row index and buffer length against band dimensions.
pub(crate) fn check_read(width: u32, height: u32, row: u32, buf: &[Sample]) -> IoResult<()> {
    if row >= height {
        return Err(IoError::RowOutOfRange { row, height });
    }
    check_row_len(width, buf)
}

/// Checks a row buffer length against the band width.
pub(crate) fn check_row_len(width: u32, row: &[Sample]) -> IoResult<()> {
    if row.len() != width as usize {
        return Err(IoError::RowLength {
            expected: width as usize,
            actual: row.len(),
        });
    }
    Ok(())
}
