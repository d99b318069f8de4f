//! # his-io
//!
//! Row-streamed raster band I/O for RGB to HIS conversion.
//!
//! Each band is a single-channel raster read or written one row at a time.
//! Three sources supply the red, green and blue rows; three sinks receive
//! hue, intensity and saturation.
//!
//! ```text
//! +-------------+            +-------------+
//! | RowSource   |            | RowSink     |
//! +-------------+            +-------------+
//!       ^                          ^
//!       |                          |
//! +-----+-----------+      +-------+---------+
//! | TiffBandReader  |      | TiffBandWriter  |
//! | MemoryBand      |      | MemoryBand      |
//! +-----------------+      +-----------------+
//! ```
//!
//! Written bands are described by a YAML sidecar ([`metadata`]) carrying
//! the title, units, value range, grey-scale color table and history.
//!
//! # Example
//!
//! ```rust
//! use his_io::{MemoryBand, RowSink, RowSource};
//!
//! let mut band = MemoryBand::from_rows(2, vec![vec![Some(1.0), None]]).unwrap();
//! let mut row = vec![None; 2];
//! band.read_row(0, &mut row).unwrap();
//! assert_eq!(row, vec![Some(1.0), None]);
//!
//! let mut out = MemoryBand::new(2, 1);
//! out.write_row(&row).unwrap();
//! assert_eq!(out.rows_written(), 1);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
pub mod memory;
pub mod metadata;
pub mod traits;

#[cfg(feature = "tiff")]
pub mod tiff;

pub use error::{IoError, IoResult};
pub use memory::MemoryBand;
pub use metadata::{BandMetadata, ColorRule, ColorTable, History};
pub use traits::{BoxedSink, BoxedSource, RowSink, RowSource};

#[cfg(feature = "tiff")]
pub use crate::tiff::{TiffBandReader, TiffBandWriter};
