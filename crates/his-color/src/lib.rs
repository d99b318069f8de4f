//! # his-color
//!
//! RGB to HIS (Hue-Intensity-Saturation) conversion.
//!
//! The conversion is a pure, column-local transform: every column of a row
//! is resolved from its own three input samples, with no state carried
//! between columns or rows.
//!
//! - [`rgb_to_his`] - One pixel from numeric channels
//! - [`convert_pixel`] - One column, with no-data propagation
//! - [`convert_row`] / [`convert_row_into`] - One scanline
//! - [`RowConverter`] - Ceiling bound to a bit depth, for row streaming
//!
//! # Quick Start
//!
//! ```rust
//! use his_color::RowConverter;
//! use his_core::{BitDepth, RowBuffer};
//!
//! let converter = RowConverter::from_depth(BitDepth::default());
//!
//! let mut rows = RowBuffer::from_bands([
//!     vec![Some(255.0), Some(128.0), None],
//!     vec![Some(0.0), Some(128.0), Some(1.0)],
//!     vec![Some(0.0), Some(128.0), Some(2.0)],
//! ]).unwrap();
//!
//! converter.convert(&mut rows);
//!
//! // Pure red
//! assert_eq!(rows.band(0)[0], Some(0.0));
//! // Gray has no hue
//! assert_eq!(rows.band(0)[1], None);
//! assert_eq!(rows.band(2)[1], Some(0.0));
//! // No-data in any input blanks the whole column
//! assert_eq!(rows.band(1)[2], None);
//! ```
//!
//! # Hue sectors
//!
//! | Channel at max | Hue (before scaling by 60) |
//! |----------------|----------------------------|
//! | red            | `b' - g'`                  |
//! | green          | `2 + r' - b'`              |
//! | blue           | `4 + g' - r'`              |
//!
//! Ties prefer red, then green, then blue.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod his;
pub mod row;

pub use his::{convert_pixel, rgb_to_his, His, HueSector, ToHis};
pub use row::{convert_row, convert_row_into, RowConverter};

/// Prelude with commonly used items.
pub mod prelude {
    pub use crate::{convert_pixel, convert_row, convert_row_into, rgb_to_his};
    pub use crate::{His, HueSector, RowConverter, ToHis};
}
