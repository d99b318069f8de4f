//! Single-band TIFF rasters.
//!
//! Inputs are grayscale TIFFs holding raw channel levels: 8, 16 or 32-bit
//! unsigned integers, or 32/64-bit floats. Levels are read as-is (not
//! normalized); scaling by the bit-depth ceiling is the converter's job.
//!
//! Outputs are written as 32-bit float grayscale TIFFs. Samples are narrowed
//! to single precision at this boundary and no-data is stored as NaN.
//!
//! # Example
//!
//! ```rust,ignore
//! use his_io::{RowSink, RowSource, TiffBandReader, TiffBandWriter};
//!
//! let mut red = TiffBandReader::open("red.tif", None)?;
//! let mut row = vec![None; red.width() as usize];
//! red.read_row(0, &mut row)?;
//!
//! let mut hue = TiffBandWriter::create("hue.tif", red.width(), red.height());
//! hue.write_row(&row)?;
//! ```

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

use his_core::{sample, FpRange, Sample};
use tiff::decoder::{Decoder, DecodingResult};
use tracing::{debug, trace};

use crate::traits::{check_read, check_row_len};
use crate::{IoError, IoResult, RowSink, RowSource};

/// Single-band TIFF opened for row reads.
///
/// Strips (or rows of tiles) are decoded on demand. Only the chunk row that
/// holds the most recently read raster row is kept in memory.
#[derive(Debug)]
pub struct TiffBandReader {
    path: PathBuf,
    width: u32,
    height: u32,
    nodata: Option<f64>,
    decoder: Decoder<BufReader<File>>,
    /// Chunk size: `(width, rows_per_strip)` for strips, the tile size otherwise.
    chunk_dims: (u32, u32),
    /// Decoded chunk row: its index and `rows x width` levels.
    cached: Option<(u32, Vec<f64>)>,
}

impl TiffBandReader {
    /// Opens a grayscale TIFF.
    ///
    /// Only the header is read here. NaN levels are always no-data; when
    /// `nodata` is set, levels equal to it are no-data as well.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not single-band.
    /// An unsupported sample type is reported by the first
    /// [`read_row`](RowSource::read_row).
    pub fn open<P: AsRef<Path>>(path: P, nodata: Option<f64>) -> IoResult<Self> {
        use tiff::ColorType;

        let path = path.as_ref().to_path_buf();
        let file = File::open(&path)?;

        let mut decoder = Decoder::new(BufReader::new(file))
            .map_err(|e| IoError::DecodeError(format!("{}: {}", path.display(), e)))?;

        let (width, height) = decoder
            .dimensions()
            .map_err(|e| IoError::DecodeError(format!("{}: {}", path.display(), e)))?;
        let color_type = decoder
            .colortype()
            .map_err(|e| IoError::DecodeError(format!("{}: {}", path.display(), e)))?;

        if !matches!(color_type, ColorType::Gray(_)) {
            return Err(IoError::UnsupportedFormat(format!(
                "{}: expected a single-band raster, found {:?}",
                path.display(),
                color_type
            )));
        }

        let (cw, ch) = decoder.chunk_dimensions();
        let chunk_dims = (cw.max(1), ch.max(1));

        debug!(path = %path.display(), width, height, ?color_type, ?chunk_dims, ?nodata, "Opened band");

        Ok(Self {
            path,
            width,
            height,
            nodata,
            decoder,
            chunk_dims,
            cached: None,
        })
    }

    /// Path of the raster.
    #[inline]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Decodes every chunk of chunk row `chunk_row` into the cache.
    fn load_chunk_row(&mut self, chunk_row: u32) -> IoResult<()> {
        let (cw, ch) = self.chunk_dims;
        let w = self.width as usize;
        let first = chunk_row * ch;
        let rows = (self.height - first).min(ch) as usize;
        let across = self.width.div_ceil(cw);

        // reuse the previous allocation
        let mut levels = self.cached.take().map(|(_, v)| v).unwrap_or_default();
        levels.clear();
        levels.resize(w * rows, f64::NAN);

        for cx in 0..across {
            let index = chunk_row * across + cx;
            let result = self
                .decoder
                .read_chunk(index)
                .map_err(|e| IoError::DecodeError(format!("{}: chunk {}: {}", self.path.display(), index, e)))?;
            let (aw, ah) = self.decoder.chunk_data_dimensions(index);
            let data = chunk_levels(result).ok_or_else(|| {
                IoError::UnsupportedFormat(format!("{}: unsupported sample type", self.path.display()))
            })?;

            let aw = aw as usize;
            let x0 = (cx * cw) as usize;
            if x0 + aw > w {
                return Err(IoError::DecodeError(format!(
                    "{}: chunk {} overruns the row",
                    self.path.display(),
                    index
                )));
            }
            for r in 0..(ah as usize).min(rows) {
                let src = data.get(r * aw..(r + 1) * aw).ok_or_else(|| {
                    IoError::DecodeError(format!("{}: chunk {} is truncated", self.path.display(), index))
                })?;
                levels[r * w + x0..r * w + x0 + aw].copy_from_slice(src);
            }
        }

        trace!(chunk_row, rows, "Decoded chunk row");
        self.cached = Some((chunk_row, levels));
        Ok(())
    }
}

/// Widens decoded samples to `f64` levels.
fn chunk_levels(result: DecodingResult) -> Option<Vec<f64>> {
    match result {
        DecodingResult::U8(buf) => Some(buf.into_iter().map(f64::from).collect()),
        DecodingResult::U16(buf) => Some(buf.into_iter().map(f64::from).collect()),
        DecodingResult::U32(buf) => Some(buf.into_iter().map(f64::from).collect()),
        DecodingResult::F32(buf) => Some(buf.into_iter().map(f64::from).collect()),
        DecodingResult::F64(buf) => Some(buf),
        _ => None,
    }
}

impl RowSource for TiffBandReader {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn read_row(&mut self, row: u32, buf: &mut [Sample]) -> IoResult<()> {
        check_read(self.width, self.height, row, buf)?;
        let chunk_row = row / self.chunk_dims.1;
        if !matches!(self.cached, Some((cached, _)) if cached == chunk_row) {
            self.load_chunk_row(chunk_row)?;
        }

        let w = self.width as usize;
        let start = (row - chunk_row * self.chunk_dims.1) as usize * w;
        if let Some((_, levels)) = &self.cached {
            for (dst, &level) in buf.iter_mut().zip(&levels[start..start + w]) {
                *dst = sample::from_raw_with_nodata(level, self.nodata);
            }
        }
        trace!(row, "read_row");
        Ok(())
    }
}

/// Single-band 32-bit float TIFF written row by row.
///
/// Rows are buffered and the file is encoded by [`finish`](Self::finish)
/// once every declared row has arrived.
#[derive(Debug)]
pub struct TiffBandWriter {
    path: PathBuf,
    width: u32,
    height: u32,
    rows: u32,
    period: Option<f32>,
    data: Vec<f32>,
    range: FpRange,
}

impl TiffBandWriter {
    /// Prepares a `width` x `height` output band at `path`.
    ///
    /// Nothing is written to disk until [`finish`](Self::finish).
    pub fn create<P: AsRef<Path>>(path: P, width: u32, height: u32) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            width,
            height,
            rows: 0,
            period: None,
            data: Vec::with_capacity(width as usize * height as usize),
            range: FpRange::new(),
        }
    }

    /// Declares the band cyclic with the given period (360 for hue).
    ///
    /// A value that rounds up to the period when narrowed is stored as its
    /// wrapped equivalent, keeping stored values in `[0, period)`.
    pub fn with_period(mut self, period: f64) -> Self {
        self.period = Some(period as f32);
        self
    }

    /// Path of the raster.
    #[inline]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Encodes the band and returns its value range.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::Incomplete`] if fewer rows than declared were
    /// written, or an I/O or encoding error.
    pub fn finish(self) -> IoResult<FpRange> {
        use tiff::encoder::{colortype, TiffEncoder};

        if self.rows != self.height {
            return Err(IoError::Incomplete {
                written: self.rows,
                expected: self.height,
            });
        }

        let file = File::create(&self.path)?;
        let mut encoder = TiffEncoder::new(BufWriter::new(file))
            .map_err(|e| IoError::EncodeError(format!("{}: {}", self.path.display(), e)))?;
        encoder
            .write_image::<colortype::Gray32Float>(self.width, self.height, &self.data)
            .map_err(|e| IoError::EncodeError(format!("{}: {}", self.path.display(), e)))?;

        debug!(path = %self.path.display(), width = self.width, height = self.height, "Wrote band");
        Ok(self.range)
    }
}

impl RowSink for TiffBandWriter {
    fn width(&self) -> u32 {
        self.width
    }

    fn write_row(&mut self, row: &[Sample]) -> IoResult<()> {
        check_row_len(self.width, row)?;
        if self.rows >= self.height {
            return Err(IoError::RowOutOfRange {
                row: self.rows,
                height: self.height,
            });
        }
        for &s in row {
            let mut stored = sample::to_raw_f32(s);
            if let Some(period) = self.period {
                if stored >= period {
                    stored -= period;
                }
            }
            // range of the stored (narrowed) values
            self.range.update(sample::from_raw(stored as f64));
            self.data.push(stored);
        }
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
