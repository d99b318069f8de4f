//! Band identities.
//!
//! The converter works on three co-registered input bands (red, green,
//! blue) and produces three co-registered output bands (hue, intensity,
//! saturation). The index of each band is its position in a row triple.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Input band of an RGB image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RgbBand {
    /// Red channel.
    Red,
    /// Green channel.
    Green,
    /// Blue channel.
    Blue,
}

impl RgbBand {
    /// All input bands in row-triple order.
    pub const ALL: [RgbBand; 3] = [RgbBand::Red, RgbBand::Green, RgbBand::Blue];

    /// Position in a row triple.
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            RgbBand::Red => 0,
            RgbBand::Green => 1,
            RgbBand::Blue => 2,
        }
    }

    /// Lowercase name, as used on the command line.
    pub const fn name(self) -> &'static str {
        match self {
            RgbBand::Red => "red",
            RgbBand::Green => "green",
            RgbBand::Blue => "blue",
        }
    }
}

impl fmt::Display for RgbBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Output band of an HIS image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HisBand {
    /// Hue in degrees, `[0, 360)`; no-data for achromatic pixels.
    Hue,
    /// Intensity in `[0, 1]`.
    Intensity,
    /// Saturation in `[0, 1]`.
    Saturation,
}

impl HisBand {
    /// All output bands in row-triple order.
    pub const ALL: [HisBand; 3] = [HisBand::Hue, HisBand::Intensity, HisBand::Saturation];

    /// Position in a row triple.
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            HisBand::Hue => 0,
            HisBand::Intensity => 1,
            HisBand::Saturation => 2,
        }
    }

    /// Lowercase name, as used on the command line.
    pub const fn name(self) -> &'static str {
        match self {
            HisBand::Hue => "hue",
            HisBand::Intensity => "intensity",
            HisBand::Saturation => "saturation",
        }
    }

    /// Descriptive title attached to the written band.
    pub const fn title(self) -> &'static str {
        match self {
            HisBand::Hue => "Image hue",
            HisBand::Intensity => "Image intensity",
            HisBand::Saturation => "Image saturation",
        }
    }

    /// Unit annotation; only hue carries one.
    pub const fn units(self) -> Option<&'static str> {
        match self {
            HisBand::Hue => Some("degrees"),
            HisBand::Intensity | HisBand::Saturation => None,
        }
    }

    /// Period of an angular band; stored hue stays below a full turn.
    pub const fn period(self) -> Option<f64> {
        match self {
            HisBand::Hue => Some(360.0),
            HisBand::Intensity | HisBand::Saturation => None,
        }
    }
}

impl fmt::Display for HisBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
