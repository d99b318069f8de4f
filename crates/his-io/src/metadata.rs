//! Band metadata sidecars.
//!
//! Every written HIS band gets a YAML sidecar next to the raster
//! (`hue.tif` -> `hue.tif.yaml`) holding:
//!
//! - title and units (only hue carries "degrees")
//! - value range over the whole band
//! - a grey-scale color table spanning that range
//! - the command history that produced the band
//!
//! # Example
//!
//! ```rust
//! use his_core::{FpRange, HisBand};
//! use his_io::{BandMetadata, ColorTable};
//!
//! let mut range = FpRange::new();
//! range.update_row(&[Some(0.0), Some(240.0)]);
//!
//! let meta = BandMetadata::for_band(HisBand::Hue, 2, 1, range);
//! assert_eq!(meta.title, "Image hue");
//! assert_eq!(meta.units.as_deref(), Some("degrees"));
//! assert_eq!(meta.colors, ColorTable::grey_scale(0.0, 240.0));
//! assert_eq!(meta.colors.lookup(120.0), Some([128, 128, 128]));
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use his_core::{FpRange, HisBand};
use serde::{Deserialize, Serialize};

use crate::IoResult;

/// One color table entry: a value and the color assigned to it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorRule {
    /// Band value.
    pub value: f64,
    /// Red, green, blue.
    pub rgb: [u8; 3],
}

/// Piecewise-linear color table over band values.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ColorTable {
    /// Rules in ascending value order.
    pub rules: Vec<ColorRule>,
}

impl ColorTable {
    /// Grey ramp from black at `min` to white at `max`.
    pub fn grey_scale(min: f64, max: f64) -> Self {
        Self {
            rules: vec![
                ColorRule { value: min, rgb: [0, 0, 0] },
                ColorRule { value: max, rgb: [255, 255, 255] },
            ],
        }
    }

    /// Grey ramp over a band range; a single black rule at zero if the
    /// band holds no numeric sample.
    pub fn grey_scale_for(range: &FpRange) -> Self {
        match range.min_max() {
            Some((min, max)) => Self::grey_scale(min, max),
            None => Self {
                rules: vec![ColorRule { value: 0.0, rgb: [0, 0, 0] }],
            },
        }
    }

    /// Color of a value, interpolated between neighbouring rules.
    ///
    /// Values outside the table, and NaN, have no color.
    pub fn lookup(&self, value: f64) -> Option<[u8; 3]> {
        let first = self.rules.first()?;
        if value == first.value {
            return Some(first.rgb);
        }
        for pair in self.rules.windows(2) {
            let (lo, hi) = (pair[0], pair[1]);
            if value >= lo.value && value <= hi.value {
                let span = hi.value - lo.value;
                let t = if span > 0.0 { (value - lo.value) / span } else { 0.0 };
                let mut rgb = [0u8; 3];
                for (c, out) in rgb.iter_mut().enumerate() {
                    let a = lo.rgb[c] as f64;
                    let b = hi.rgb[c] as f64;
                    *out = (a + (b - a) * t).round() as u8;
                }
                return Some(rgb);
            }
        }
        None
    }
}

/// Provenance of a band.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct History {
    /// Program that created the band.
    pub module: String,
    /// Full command line.
    pub command: String,
    /// Source rasters, red, green, blue.
    #[serde(default)]
    pub sources: Vec<String>,
}

/// Descriptive metadata for one written HIS band.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BandMetadata {
    /// Which output band this is.
    pub band: HisBand,
    /// Descriptive title.
    pub title: String,
    /// Unit annotation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub units: Option<String>,
    /// Columns.
    pub width: u32,
    /// Rows.
    pub height: u32,
    /// Value range over the band.
    pub range: FpRange,
    /// Display colors.
    pub colors: ColorTable,
    /// Provenance.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub history: Option<History>,
}

impl BandMetadata {
    /// Metadata for `band` with a grey-scale table over `range`.
    pub fn for_band(band: HisBand, width: u32, height: u32, range: FpRange) -> Self {
        Self {
            band,
            title: band.title().to_string(),
            units: band.units().map(str::to_string),
            width,
            height,
            range,
            colors: ColorTable::grey_scale_for(&range),
            history: None,
        }
    }

    /// Attaches provenance.
    pub fn with_history(mut self, history: History) -> Self {
        self.history = Some(history);
        self
    }
}

/// Sidecar path for a raster: the raster path with `.yaml` appended.
pub fn sidecar_path(raster: &Path) -> PathBuf {
    let mut name = raster.as_os_str().to_owned();
    name.push(".yaml");
    PathBuf::from(name)
}

/// Writes the sidecar for `raster`, returning its path.
pub fn write_sidecar(raster: &Path, meta: &BandMetadata) -> IoResult<PathBuf> {
    let path = sidecar_path(raster);
    let text = serde_yaml::to_string(meta)?;
    fs::write(&path, text)?;
    Ok(path)
}

/// Reads the sidecar of `raster`.
pub fn read_sidecar(raster: &Path) -> IoResult<BandMetadata> {
    let text = fs::read_to_string(sidecar_path(raster))?;
    Ok(serde_yaml::from_str(&text)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_grey_scale_lookup() {
        let table = ColorTable::grey_scale(0.0, 1.0);
        assert_eq!(table.lookup(0.0), Some([0, 0, 0]));
        assert_eq!(table.lookup(1.0), Some([255, 255, 255]));
        assert_eq!(table.lookup(0.5), Some([128, 128, 128]));
        assert_eq!(table.lookup(1.5), None);
        assert_eq!(table.lookup(f64::NAN), None);
    }

    #[test]
    fn test_degenerate_range() {
        let table = ColorTable::grey_scale(0.0, 0.0);
        assert_eq!(table.lookup(0.0), Some([0, 0, 0]));

        let empty = ColorTable::grey_scale_for(&FpRange::new());
        assert_eq!(empty.rules.len(), 1);
    }

    #[test]
    fn test_units_only_on_hue() {
        let range = FpRange::new();
        assert!(BandMetadata::for_band(HisBand::Hue, 1, 1, range).units.is_some());
        assert!(BandMetadata::for_band(HisBand::Intensity, 1, 1, range).units.is_none());
        assert!(BandMetadata::for_band(HisBand::Saturation, 1, 1, range).units.is_none());
    }

    #[test]
    fn test_sidecar_path() {
        assert_eq!(sidecar_path(Path::new("out/hue.tif")), PathBuf::from("out/hue.tif.yaml"));
    }

    #[test]
    fn test_sidecar_roundtrip() {
        let dir = tempdir().unwrap();
        let raster = dir.path().join("saturation.tif");

        let mut range = FpRange::new();
        range.update_row(&[Some(0.0), Some(1.0), None]);
        let meta = BandMetadata::for_band(HisBand::Saturation, 3, 1, range).with_history(History {
            module: "rgb2his".into(),
            command: "rgb2his --red r.tif".into(),
            sources: vec!["r.tif".into(), "g.tif".into(), "b.tif".into()],
        });

        let written = write_sidecar(&raster, &meta).unwrap();
        assert!(written.exists());

        let text = std::fs::read_to_string(&written).unwrap();
        assert!(text.contains("Image saturation"));
        assert!(!text.contains("units"));

        let loaded = read_sidecar(&raster).unwrap();
        assert_eq!(loaded, meta);
    }
}
