//! Row conversion.
//!
//! A row is three equal-length band slices. Conversion walks the columns in
//! order and, for each column, reads all three inputs before writing any of
//! the three outputs, so the input storage can be reused for the output.

use his_core::{BitDepth, Result, RowBuffer, Sample};
use tracing::{debug, trace};

use crate::his::convert_pixel;

/// Converts a row in place.
///
/// On entry the bands hold red, green, blue; on return they hold hue,
/// intensity, saturation.
///
/// # Panics
///
/// Panics if the bands differ in length, or (in debug builds) if
/// `max_colors` is not positive.
///
/// # Example
///
/// ```rust
/// use his_color::convert_row;
///
/// let mut r = [Some(0.0), Some(9.0)];
/// let mut g = [Some(255.0), Some(9.0)];
/// let mut b = [Some(0.0), None];
/// convert_row([&mut r, &mut g, &mut b], 255.0);
///
/// assert_eq!(r, [Some(120.0), None]);
/// assert_eq!(g, [Some(0.5), None]);
/// assert_eq!(b, [Some(1.0), None]);
/// ```
pub fn convert_row(bands: [&mut [Sample]; 3], max_colors: f64) {
    let [red, green, blue] = bands;
    let columns = red.len();
    assert_eq!(green.len(), columns, "green row length");
    assert_eq!(blue.len(), columns, "blue row length");
    debug_assert!(max_colors > 0.0, "max_colors must be positive");

    debug!(columns, max_colors, "convert_row");

    for column in 0..columns {
        let rgb = [red[column], green[column], blue[column]];
        let [h, i, s] = convert_pixel(rgb, max_colors);
        trace!(column, hue = ?h, intensity = ?i, saturation = ?s, "his");
        red[column] = h;
        green[column] = i;
        blue[column] = s;
    }
}

/// Converts a row into separate output rows.
///
/// # Panics
///
/// Panics if any of the six rows differs in length from the red input, or
/// (in debug builds) if `max_colors` is not positive.
pub fn convert_row_into(rgb: [&[Sample]; 3], his: [&mut [Sample]; 3], max_colors: f64) {
    let [red, green, blue] = rgb;
    let [hue, intensity, saturation] = his;
    let columns = red.len();
    assert_eq!(green.len(), columns, "green row length");
    assert_eq!(blue.len(), columns, "blue row length");
    assert_eq!(hue.len(), columns, "hue row length");
    assert_eq!(intensity.len(), columns, "intensity row length");
    assert_eq!(saturation.len(), columns, "saturation row length");
    debug_assert!(max_colors > 0.0, "max_colors must be positive");

    debug!(columns, max_colors, "convert_row_into");

    for column in 0..columns {
        let [h, i, s] = convert_pixel([red[column], green[column], blue[column]], max_colors);
        trace!(column, hue = ?h, intensity = ?i, saturation = ?s, "his");
        hue[column] = h;
        intensity[column] = i;
        saturation[column] = s;
    }
}

/// Row converter bound to one normalization ceiling.
///
/// The ceiling is shared across the whole image; the converter itself holds
/// no per-row state and can be shared between threads.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowConverter {
    max_colors: f64,
}

impl RowConverter {
    /// Creates a converter for a raw ceiling, which must be positive and finite.
    pub fn new(max_colors: f64) -> Result<Self> {
        let max_colors = his_core::depth::validate_max_colors(max_colors)?;
        Ok(Self { max_colors })
    }

    /// Creates a converter for imagery of the given bit depth.
    pub fn from_depth(depth: BitDepth) -> Self {
        Self {
            max_colors: depth.max_colors(),
        }
    }

    /// Normalization ceiling.
    #[inline]
    pub fn max_colors(&self) -> f64 {
        self.max_colors
    }

    /// Converts a row buffer in place.
    pub fn convert(&self, rows: &mut RowBuffer) {
        convert_row(rows.bands_mut(), self.max_colors);
    }

    /// Converts into separate output rows.
    pub fn convert_into(&self, rgb: &RowBuffer, his: &mut RowBuffer) {
        convert_row_into(rgb.bands(), his.bands_mut(), self.max_colors);
    }
}
