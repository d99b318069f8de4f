//! Sequential block conversion.
//!
//! A block is `rows x width` samples per band, stored row-major in three
//! planes (red, green, blue on input; hue, intensity, saturation on output).

use his_color::convert_row;
use his_core::Sample;
use tracing::trace;

use crate::{OpsError, OpsResult};

/// Converts a block of rows in place, one row after another.
///
/// # Example
///
/// ```rust
/// use his_ops::block::convert_block;
///
/// let mut r = vec![Some(255.0), Some(0.0)];
/// let mut g = vec![Some(0.0), Some(0.0)];
/// let mut b = vec![Some(0.0), Some(255.0)];
/// convert_block([&mut r, &mut g, &mut b], 1, 255.0).unwrap();
/// assert_eq!(r, vec![Some(0.0), Some(240.0)]);
/// ```
pub fn convert_block(planes: [&mut [Sample]; 3], width: usize, max_colors: f64) -> OpsResult<()> {
    let rows = validate_block(&planes, width, max_colors)?;
    trace!(rows, width, "block::convert_block");
    if width == 0 {
        return Ok(());
    }

    let [red, green, blue] = planes;
    for ((r, g), b) in red
        .chunks_mut(width)
        .zip(green.chunks_mut(width))
        .zip(blue.chunks_mut(width))
    {
        convert_row([r, g, b], max_colors);
    }
    Ok(())
}

/// Checks plane lengths and the ceiling, returning the number of rows.
pub(crate) fn validate_block(
    planes: &[&mut [Sample]; 3],
    width: usize,
    max_colors: f64,
) -> OpsResult<usize> {
    if !(max_colors.is_finite() && max_colors > 0.0) {
        return Err(OpsError::InvalidParameter(format!(
            "max_colors must be positive, got {}",
            max_colors
        )));
    }

    let len = planes[0].len();
    for (band, plane) in planes.iter().enumerate().skip(1) {
        if plane.len() != len {
            return Err(OpsError::SizeMismatch(format!(
                "band {} has {} samples, band 0 has {}",
                band,
                plane.len(),
                len
            )));
        }
    }

    if width == 0 {
        if len != 0 {
            return Err(OpsError::InvalidDimensions(format!(
                "width 0 with {} samples",
                len
            )));
        }
        return Ok(0);
    }

    if len % width != 0 {
        return Err(OpsError::InvalidDimensions(format!(
            "{} samples is not a whole number of rows of width {}",
            len, width
        )));
    }

    Ok(len / width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_matches_rows() {
        let mut r = vec![Some(255.0), Some(10.0), None, Some(0.0)];
        let mut g = vec![Some(255.0), Some(20.0), Some(3.0), Some(255.0)];
        let mut b = vec![Some(0.0), Some(30.0), Some(3.0), Some(0.0)];

        let mut expected = [r.clone(), g.clone(), b.clone()];
        for row in 0..2 {
            let range = row * 2..row * 2 + 2;
            let [er, eg, eb] = &mut expected;
            convert_row(
                [&mut er[range.clone()], &mut eg[range.clone()], &mut eb[range]],
                255.0,
            );
        }

        convert_block([&mut r, &mut g, &mut b], 2, 255.0).unwrap();
        assert_eq!([r, g, b], expected);
    }

    #[test]
    fn test_partial_row_rejected() {
        let mut r = vec![None; 3];
        let mut g = vec![None; 3];
        let mut b = vec![None; 3];
        assert!(matches!(
            convert_block([&mut r, &mut g, &mut b], 2, 255.0),
            Err(OpsError::InvalidDimensions(_))
        ));
    }

    #[test]
    fn test_plane_mismatch_rejected() {
        let mut r = vec![None; 2];
        let mut g = vec![None; 2];
        let mut b = vec![None; 4];
        assert!(matches!(
            convert_block([&mut r, &mut g, &mut b], 2, 255.0),
            Err(OpsError::SizeMismatch(_))
        ));
    }

    #[test]
    fn test_bad_ceiling_rejected() {
        let mut r = vec![None; 2];
        let mut g = vec![None; 2];
        let mut b = vec![None; 2];
        assert!(matches!(
            convert_block([&mut r, &mut g, &mut b], 2, 0.0),
            Err(OpsError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_zero_width() {
        let mut r: Vec<Sample> = vec![];
        let mut g: Vec<Sample> = vec![];
        let mut b: Vec<Sample> = vec![];
        convert_block([&mut r, &mut g, &mut b], 0, 255.0).unwrap();
    }
}
