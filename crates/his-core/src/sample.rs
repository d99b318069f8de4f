//! Samples and the no-data marker.
//!
//! A [`Sample`] is a double-precision channel value at one column of one
//! band, or `None` when the value is absent. No-data is never subject to
//! arithmetic; it is carried through the conversion as-is.
//!
//! Raster storage has no `Option`, so the helpers here translate at the
//! storage boundary: float rasters store no-data as NaN, integer rasters
//! may declare a raw value that stands for no-data.
//!
//! # Example
//!
//! ```rust
//! use his_core::sample;
//!
//! assert_eq!(sample::from_raw(0.25), Some(0.25));
//! assert_eq!(sample::from_raw(f64::NAN), None);
//! assert!(sample::to_raw(None).is_nan());
//! assert_eq!(sample::from_raw_with_nodata(0.0, Some(0.0)), None);
//! ```

/// One channel value; `None` is no-data.
pub type Sample = Option<f64>;

/// Returns true if the sample is no-data.
#[inline]
pub fn is_nodata(sample: Sample) -> bool {
    sample.is_none()
}

/// Reads a raw stored value, treating NaN as no-data.
#[inline]
pub fn from_raw(value: f64) -> Sample {
    if value.is_nan() { None } else { Some(value) }
}

/// Reads a raw stored value with an optional declared no-data value.
///
/// NaN is always no-data. When `nodata` is set, values exactly equal to it
/// are no-data as well.
#[inline]
pub fn from_raw_with_nodata(value: f64, nodata: Option<f64>) -> Sample {
    match nodata {
        Some(nd) if value == nd => None,
        _ => from_raw(value),
    }
}

/// Stores a sample as a raw value, writing no-data as NaN.
#[inline]
pub fn to_raw(sample: Sample) -> f64 {
    sample.unwrap_or(f64::NAN)
}

/// Stores a sample narrowed to single precision, writing no-data as NaN.
#[inline]
pub fn to_raw_f32(sample: Sample) -> f32 {
    sample.map_or(f32::NAN, |v| v as f32)
}

/// Converts a slice of raw values into samples.
pub fn row_from_raw(values: &[f64], nodata: Option<f64>) -> Vec<Sample> {
    values.iter().map(|&v| from_raw_with_nodata(v, nodata)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nan_is_nodata() {
        assert!(is_nodata(from_raw(f64::NAN)));
        assert!(!is_nodata(from_raw(0.0)));
    }

    #[test]
    fn test_declared_nodata() {
        assert_eq!(from_raw_with_nodata(255.0, Some(255.0)), None);
        assert_eq!(from_raw_with_nodata(254.0, Some(255.0)), Some(254.0));
        assert_eq!(from_raw_with_nodata(f64::NAN, Some(255.0)), None);
        assert_eq!(from_raw_with_nodata(255.0, None), Some(255.0));
    }

    #[test]
    fn test_narrowing() {
        assert!(to_raw_f32(None).is_nan());
        assert_eq!(to_raw_f32(Some(0.5)), 0.5f32);
    }

    #[test]
    fn test_row_from_raw() {
        let row = row_from_raw(&[1.0, f64::NAN, 3.0], Some(3.0));
        assert_eq!(row, vec![Some(1.0), None, None]);
    }
}
