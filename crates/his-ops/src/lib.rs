//! # his-ops
//!
//! Whole-band operations built on the row converter.
//!
//! # Modules
//!
//! - [`block`] - Sequential conversion of a block of rows
//! - [`parallel`] - Row-parallel conversion of a block (feature `parallel`)
//! - [`pipeline`] - Streams rows from three sources through the converter
//!   into three sinks
//!
//! Rows are independent and so are the columns within a row, so blocks are
//! split into one task per row with no shared mutable state. Results are
//! identical to sequential conversion.
//!
//! # Example
//!
//! ```rust
//! use his_color::RowConverter;
//! use his_io::MemoryBand;
//! use his_ops::pipeline::RowPipeline;
//!
//! let red = MemoryBand::from_rows(2, vec![vec![Some(255.0), None]]).unwrap();
//! let green = MemoryBand::from_rows(2, vec![vec![Some(0.0), Some(1.0)]]).unwrap();
//! let blue = MemoryBand::from_rows(2, vec![vec![Some(0.0), Some(1.0)]]).unwrap();
//! let sinks = [MemoryBand::new(2, 1), MemoryBand::new(2, 1), MemoryBand::new(2, 1)];
//!
//! let converter = RowConverter::new(255.0).unwrap();
//! let mut pipeline = RowPipeline::new([red, green, blue], sinks, converter).unwrap();
//! let summary = pipeline.run().unwrap();
//! assert_eq!(summary.rows, 1);
//!
//! let [hue, _, _] = pipeline.into_sinks();
//! assert_eq!(hue.samples(), &[Some(0.0), None]);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
pub mod block;
pub mod pipeline;

#[cfg(feature = "parallel")]
pub mod parallel;

pub use error::{OpsError, OpsResult};
pub use pipeline::{row_blocks, BlockSpec, PipelineSummary, ProgressCallback, RowPipeline};

// Row-parallel when the `parallel` feature is enabled, sequential otherwise.
#[cfg(feature = "parallel")]
pub use parallel::convert_block;
#[cfg(not(feature = "parallel"))]
pub use block::convert_block;
