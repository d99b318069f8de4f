//! # his-core
//!
//! Core types for converting RGB raster imagery to the HIS
//! (Hue-Intensity-Saturation) color model.
//!
//! This crate provides the foundational types used throughout the workspace:
//!
//! - [`Sample`] - One channel value at one column, with no-data as `None`
//! - [`RgbBand`], [`HisBand`] - Band identities for the three inputs and outputs
//! - [`BitDepth`] - Validated source bit depth and its normalization ceiling
//! - [`RowBuffer`] - Three caller-owned band rows for one scanline
//! - [`FpRange`] - Running value range over a band
//!
//! ## Crate Structure
//!
//! ```text
//! his-core (this crate)
//!    ^
//!    |
//!    +-- his-color (the RGB -> HIS converter)
//!    +-- his-io (row sources, sinks, TIFF bands, metadata)
//!    +-- his-ops (parallel blocks, streaming pipeline)
//!    +-- rgb2his (command line)
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod band;
pub mod depth;
pub mod error;
pub mod range;
pub mod row;
pub mod sample;

pub use band::{HisBand, RgbBand};
pub use depth::BitDepth;
pub use error::{Error, Result};
pub use range::FpRange;
pub use row::RowBuffer;
pub use sample::Sample;

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```
/// use his_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::band::{HisBand, RgbBand};
    pub use crate::depth::BitDepth;
    pub use crate::error::{Error, Result};
    pub use crate::range::FpRange;
    pub use crate::row::RowBuffer;
    pub use crate::sample::{self, Sample};
}
