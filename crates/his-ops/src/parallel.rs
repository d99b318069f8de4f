//! Row-parallel block conversion using Rayon.
//!
//! Each row of a block is handed to its own task. Tasks own disjoint row
//! slices of the three planes and share only the read-only ceiling, so no
//! locking is needed and the output is identical to sequential conversion.
//!
//! # Example
//!
//! ```rust
//! use his_ops::parallel;
//!
//! let width = 256;
//! let mut r = vec![Some(200.0); width * 64];
//! let mut g = vec![Some(100.0); width * 64];
//! let mut b = vec![Some(50.0); width * 64];
//! parallel::convert_block([&mut r, &mut g, &mut b], width, 255.0).unwrap();
//! assert!(r.iter().all(|h| h.is_some()));
//! ```

use his_color::convert_row;
use his_core::Sample;
use rayon::prelude::*;
use tracing::trace;

use crate::block::validate_block;
use crate::OpsResult;

/// Converts a block of rows in place, one Rayon task per row.
pub fn convert_block(planes: [&mut [Sample]; 3], width: usize, max_colors: f64) -> OpsResult<()> {
    let rows = validate_block(&planes, width, max_colors)?;
    trace!(rows, width, "parallel::convert_block");
    if width == 0 {
        return Ok(());
    }

    let [red, green, blue] = planes;
    red.par_chunks_mut(width)
        .zip(green.par_chunks_mut(width))
        .zip(blue.par_chunks_mut(width))
        .for_each(|((r, g), b)| convert_row([r, g, b], max_colors));

    Ok(())
}

/// Converts whole bands into new HIS planes, leaving the inputs untouched.
///
/// Returns hue, intensity, saturation.
pub fn convert_planes(
    red: &[Sample],
    green: &[Sample],
    blue: &[Sample],
    width: usize,
    max_colors: f64,
) -> OpsResult<[Vec<Sample>; 3]> {
    let mut hue = red.to_vec();
    let mut intensity = green.to_vec();
    let mut saturation = blue.to_vec();
    convert_block([&mut hue, &mut intensity, &mut saturation], width, max_colors)?;
    Ok([hue, intensity, saturation])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block;

    fn gradient(width: usize, height: usize, seed: usize) -> Vec<Sample> {
        (0..width * height)
            .map(|i| {
                let v = (i * 37 + seed * 91) % 300;
                // sprinkle no-data
                if v >= 256 { None } else { Some(v as f64) }
            })
            .collect()
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let (w, h) = (61, 17);
        let (r, g, b) = (gradient(w, h, 0), gradient(w, h, 1), gradient(w, h, 2));

        let par = convert_planes(&r, &g, &b, w, 255.0).unwrap();

        let (mut sr, mut sg, mut sb) = (r.clone(), g.clone(), b.clone());
        block::convert_block([&mut sr, &mut sg, &mut sb], w, 255.0).unwrap();

        assert_eq!(par, [sr, sg, sb]);
    }

    #[test]
    fn test_inputs_untouched() {
        let r = vec![Some(255.0)];
        let g = vec![Some(0.0)];
        let b = vec![Some(0.0)];
        let [hue, intensity, saturation] = convert_planes(&r, &g, &b, 1, 255.0).unwrap();
        assert_eq!(r, vec![Some(255.0)]);
        assert_eq!(hue, vec![Some(0.0)]);
        assert_eq!(intensity, vec![Some(0.5)]);
        assert_eq!(saturation, vec![Some(1.0)]);
    }

    #[test]
    fn test_rejects_mismatch() {
        assert!(convert_planes(&[None; 4], &[None; 4], &[None; 2], 2, 255.0).is_err());
    }
}
