//! Row-streaming pipeline.
//!
//! Reads blocks of rows from three co-registered sources, converts each
//! block, and appends the result to three sinks:
//!
//! ```text
//!  red   --+                        +--> hue
//!  green --+--> [ block of rows ] --+--> intensity
//!  blue  --+      convert_block     +--> saturation
//! ```
//!
//! Only one block per band is held in memory, and file sources decode only
//! the strip or tile row being read. With `block_rows = 1` this is plain
//! row-at-a-time streaming; larger blocks give the parallel converter more
//! rows to spread across threads.

use his_color::RowConverter;
use his_core::{FpRange, Sample};
use his_io::{RowSink, RowSource};
use tracing::{debug, info, trace};

use crate::{OpsError, OpsResult};

/// Default number of rows converted per block.
pub const DEFAULT_BLOCK_ROWS: u32 = 64;

/// Rows covered by one block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockSpec {
    /// First row.
    pub row: u32,
    /// Number of rows.
    pub rows: u32,
}

/// Splits `height` rows into blocks of at most `block_rows` rows.
///
/// # Panics
///
/// Panics if `block_rows` is zero.
pub fn row_blocks(height: u32, block_rows: u32) -> impl Iterator<Item = BlockSpec> {
    assert!(block_rows > 0, "block_rows must be positive");
    (0..height.div_ceil(block_rows)).map(move |i| {
        let row = i * block_rows;
        BlockSpec {
            row,
            rows: (height - row).min(block_rows),
        }
    })
}

/// Progress callback for streaming runs.
pub trait ProgressCallback {
    /// Called after each written row with rows completed and total rows.
    fn on_progress(&mut self, completed: u32, total: u32);
}

impl<F: FnMut(u32, u32)> ProgressCallback for F {
    fn on_progress(&mut self, completed: u32, total: u32) {
        self(completed, total);
    }
}

/// Outcome of a pipeline run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PipelineSummary {
    /// Rows processed.
    pub rows: u32,
    /// Columns per row.
    pub columns: u32,
    /// Value range of each output band: hue, intensity, saturation.
    pub ranges: [FpRange; 3],
}

/// Streams three input bands through the converter into three output bands.
#[derive(Debug)]
pub struct RowPipeline<S, K> {
    sources: [S; 3],
    sinks: [K; 3],
    converter: RowConverter,
    block_rows: u32,
    width: u32,
    height: u32,
}

impl<S: RowSource, K: RowSink> RowPipeline<S, K> {
    /// Creates a pipeline over red, green, blue sources and hue, intensity,
    /// saturation sinks.
    ///
    /// # Errors
    ///
    /// Returns [`OpsError::SizeMismatch`] if the sources differ in size or a
    /// sink width differs from the source width.
    pub fn new(sources: [S; 3], sinks: [K; 3], converter: RowConverter) -> OpsResult<Self> {
        let (width, height) = sources[0].dimensions();
        for (band, source) in sources.iter().enumerate().skip(1) {
            let dims = source.dimensions();
            if dims != (width, height) {
                return Err(OpsError::SizeMismatch(format!(
                    "input band {} is {}x{}, band 0 is {}x{}",
                    band, dims.0, dims.1, width, height
                )));
            }
        }
        for (band, sink) in sinks.iter().enumerate() {
            if sink.width() != width {
                return Err(OpsError::SizeMismatch(format!(
                    "output band {} is {} columns wide, inputs are {}",
                    band,
                    sink.width(),
                    width
                )));
            }
        }

        Ok(Self {
            sources,
            sinks,
            converter,
            block_rows: DEFAULT_BLOCK_ROWS,
            width,
            height,
        })
    }

    /// Sets the number of rows converted per block (at least one).
    pub fn with_block_rows(mut self, block_rows: u32) -> Self {
        self.block_rows = block_rows.max(1);
        self
    }

    /// Runs the pipeline over every row.
    pub fn run(&mut self) -> OpsResult<PipelineSummary> {
        self.run_with_progress(|_: u32, _: u32| {})
    }

    /// Runs the pipeline, reporting progress after each written row.
    pub fn run_with_progress<P: ProgressCallback>(
        &mut self,
        mut progress: P,
    ) -> OpsResult<PipelineSummary> {
        let w = self.width as usize;
        let capacity = w * self.block_rows.min(self.height.max(1)) as usize;
        let mut planes: [Vec<Sample>; 3] = [
            vec![None; capacity],
            vec![None; capacity],
            vec![None; capacity],
        ];

        info!(
            width = self.width,
            height = self.height,
            block_rows = self.block_rows,
            max_colors = self.converter.max_colors(),
            "Converting RGB to HIS"
        );

        for block in row_blocks(self.height, self.block_rows) {
            let len = w * block.rows as usize;
            trace!(row = block.row, rows = block.rows, "block");

            for (source, plane) in self.sources.iter_mut().zip(planes.iter_mut()) {
                for r in 0..block.rows as usize {
                    source.read_row(block.row + r as u32, &mut plane[r * w..(r + 1) * w])?;
                }
            }

            {
                let [r, g, b] = &mut planes;
                crate::convert_block(
                    [&mut r[..len], &mut g[..len], &mut b[..len]],
                    w,
                    self.converter.max_colors(),
                )?;
            }

            for r in 0..block.rows as usize {
                for (sink, plane) in self.sinks.iter_mut().zip(planes.iter()) {
                    sink.write_row(&plane[r * w..(r + 1) * w])?;
                }
                progress.on_progress(block.row + r as u32 + 1, self.height);
            }
            debug!(done = block.row + block.rows, total = self.height, "Converted block");
        }

        let ranges = [
            self.sinks[0].range(),
            self.sinks[1].range(),
            self.sinks[2].range(),
        ];
        info!(rows = self.height, columns = self.width, "Conversion complete");

        Ok(PipelineSummary {
            rows: self.height,
            columns: self.width,
            ranges,
        })
    }

    /// Consumes the pipeline, returning the sinks.
    pub fn into_sinks(self) -> [K; 3] {
        self.sinks
    }
}
