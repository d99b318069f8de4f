//! Per-pixel RGB to HIS conversion.
//!
//! Channels are scaled into `[0, 1)` by the normalization ceiling, then:
//!
//! ```text
//! max, min   = extrema of (r, g, b)
//! chroma     = max - min
//! intensity  = (max + min) / 2
//! saturation = chroma / (max + min)       if intensity <= 0.5
//!            = chroma / (2 - max - min)   otherwise
//! hue        = 60 * sector formula, wrapped into [0, 360)
//! ```
//!
//! A pixel with `chroma == 0` is achromatic: its hue is undefined and is
//! reported as `None`, while intensity and saturation stay numeric.
//!
//! All comparisons are exact. The hue sector is chosen by testing each
//! scaled channel for equality with `max` in red, green, blue order.

use his_core::Sample;
use tracing::trace;

/// One converted pixel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct His {
    /// Hue in degrees, `[0, 360)`, or `None` for an achromatic pixel.
    pub hue: Option<f64>,
    /// Intensity, `(max + min) / 2` of the scaled channels.
    pub intensity: f64,
    /// Saturation; zero for an achromatic pixel.
    pub saturation: f64,
}

impl His {
    /// Returns true if the hue is undefined.
    #[inline]
    pub fn is_achromatic(&self) -> bool {
        self.hue.is_none()
    }

    /// Output samples in hue, intensity, saturation order.
    #[inline]
    pub fn to_samples(self) -> [Sample; 3] {
        [self.hue, Some(self.intensity), Some(self.saturation)]
    }
}

/// Channel that attained the maximum, which selects the hue formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HueSector {
    /// Between yellow and magenta.
    Red,
    /// Between cyan and yellow.
    Green,
    /// Between magenta and cyan.
    Blue,
}

impl HueSector {
    /// Picks the sector for scaled channels and their maximum.
    ///
    /// Ties prefer red, then green, then blue.
    #[inline]
    pub fn select(red: f64, green: f64, blue: f64, max: f64) -> Self {
        if red == max {
            HueSector::Red
        } else if green == max {
            HueSector::Green
        } else {
            debug_assert!(blue == max || blue.is_nan() || max.is_nan());
            HueSector::Blue
        }
    }
}

/// Minimum and maximum of three channels, by explicit comparison.
///
/// # Example
///
/// ```rust
/// use his_color::his::extrema;
///
/// assert_eq!(extrema(0.2, 0.9, 0.4), (0.2, 0.9));
/// ```
#[inline]
pub fn extrema(red: f64, green: f64, blue: f64) -> (f64, f64) {
    let mut max = red;
    if green > max {
        max = green;
    }
    if blue > max {
        max = blue;
    }

    let mut min = red;
    if green < min {
        min = green;
    }
    if blue < min {
        min = blue;
    }

    (min, max)
}

/// Converts one pixel of numeric channels.
///
/// `max_colors` is the normalization ceiling (`2^bits - 1`). Values outside
/// `[0, max_colors]` are processed without validation.
///
/// # Example
///
/// ```rust
/// use his_color::rgb_to_his;
///
/// let his = rgb_to_his(0.0, 255.0, 0.0, 255.0);
/// assert_eq!(his.hue, Some(120.0));
/// assert_eq!(his.intensity, 0.5);
/// assert_eq!(his.saturation, 1.0);
/// ```
pub fn rgb_to_his(red: f64, green: f64, blue: f64, max_colors: f64) -> His {
    let red = red / max_colors;
    let green = green / max_colors;
    let blue = blue / max_colors;

    let (min, max) = extrema(red, green, blue);
    trace!(min, max, "levels");

    let chroma = max - min;
    let intensity = (max + min) / 2.0;

    if chroma == 0.0 {
        return His {
            hue: None,
            intensity,
            saturation: 0.0,
        };
    }

    let saturation = if intensity <= 0.5 {
        chroma / (max + min)
    } else {
        chroma / (2.0 - max - min)
    };

    let r = (max - red) / chroma;
    let g = (max - green) / chroma;
    let b = (max - blue) / chroma;

    let mut hue = match HueSector::select(red, green, blue, max) {
        HueSector::Red => b - g,
        HueSector::Green => 2.0 + r - b,
        HueSector::Blue => 4.0 + g - r,
    };

    hue *= 60.0;
    if hue < 0.0 {
        hue += 360.0;
    }
    // a tiny negative hue rounds to a full turn
    if hue >= 360.0 {
        hue -= 360.0;
    }

    His {
        hue: Some(hue),
        intensity,
        saturation,
    }
}

/// Converts one column of samples.
///
/// If any input is no-data, all three outputs are no-data.
#[inline]
pub fn convert_pixel(rgb: [Sample; 3], max_colors: f64) -> [Sample; 3] {
    match rgb {
        [Some(r), Some(g), Some(b)] => rgb_to_his(r, g, b, max_colors).to_samples(),
        _ => [None; 3],
    }
}

/// RGB to HIS conversion on channel triples.
///
/// # Example
///
/// ```rust
/// use his_color::ToHis;
///
/// let his = [255.0, 255.0, 255.0].to_his(255.0).unwrap();
/// assert!(his.is_achromatic());
/// assert_eq!(his.intensity, 1.0);
///
/// assert!([Some(1.0), None, Some(2.0)].to_his(255.0).is_none());
/// ```
pub trait ToHis {
    /// Converts the triple, or returns `None` if it carries no-data.
    fn to_his(self, max_colors: f64) -> Option<His>;
}

impl ToHis for [f64; 3] {
    #[inline]
    fn to_his(self, max_colors: f64) -> Option<His> {
        Some(rgb_to_his(self[0], self[1], self[2], max_colors))
    }
}

impl ToHis for [Sample; 3] {
    #[inline]
    fn to_his(self, max_colors: f64) -> Option<His> {
        match self {
            [Some(r), Some(g), Some(b)] => Some(rgb_to_his(r, g, b, max_colors)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const MAX8: f64 = 255.0;

    #[test]
    fn test_white_is_achromatic() {
        let his = rgb_to_his(255.0, 255.0, 255.0, MAX8);
        assert_eq!(his.hue, None);
        assert_eq!(his.intensity, 1.0);
        assert_eq!(his.saturation, 0.0);
    }

    #[test]
    fn test_black_is_achromatic() {
        let his = rgb_to_his(0.0, 0.0, 0.0, MAX8);
        assert_eq!(his.hue, None);
        assert_eq!(his.intensity, 0.0);
        assert_eq!(his.saturation, 0.0);
    }

    #[test]
    fn test_primaries() {
        let red = rgb_to_his(255.0, 0.0, 0.0, MAX8);
        assert_eq!(red, His { hue: Some(0.0), intensity: 0.5, saturation: 1.0 });

        let green = rgb_to_his(0.0, 255.0, 0.0, MAX8);
        assert_eq!(green, His { hue: Some(120.0), intensity: 0.5, saturation: 1.0 });

        let blue = rgb_to_his(0.0, 0.0, 255.0, MAX8);
        assert_eq!(blue, His { hue: Some(240.0), intensity: 0.5, saturation: 1.0 });
    }

    #[test]
    fn test_secondaries() {
        assert_eq!(rgb_to_his(255.0, 255.0, 0.0, MAX8).hue, Some(60.0));
        assert_eq!(rgb_to_his(0.0, 255.0, 255.0, MAX8).hue, Some(180.0));
        assert_eq!(rgb_to_his(255.0, 0.0, 255.0, MAX8).hue, Some(300.0));
    }

    #[test]
    fn test_gray_keeps_scaled_intensity() {
        let his = rgb_to_his(51.0, 51.0, 51.0, MAX8);
        assert!(his.is_achromatic());
        assert_eq!(his.intensity, 51.0 / 255.0);
        assert_eq!(his.saturation, 0.0);
    }

    #[test]
    fn test_light_branch_saturation() {
        // max = 1, min = 0.6: intensity 0.8 > 0.5
        let his = rgb_to_his(255.0, 153.0, 153.0, MAX8);
        let (max, min) = (1.0, 153.0 / 255.0);
        assert_relative_eq!(his.intensity, (max + min) / 2.0);
        assert_relative_eq!(his.saturation, (max - min) / (2.0 - max - min));
        assert_eq!(his.hue, Some(0.0));
    }

    #[test]
    fn test_dark_branch_saturation() {
        // max = 0.4, min = 0.2: intensity 0.3 <= 0.5
        let his = rgb_to_his(51.0, 102.0, 51.0, MAX8);
        let (max, min) = (102.0 / 255.0, 51.0 / 255.0);
        assert_relative_eq!(his.saturation, (max - min) / (max + min));
        assert_relative_eq!(his.hue.unwrap(), 120.0);
    }

    #[test]
    fn test_negative_hue_wraps() {
        // red max, blue above green: b' - g' < 0
        let his = rgb_to_his(255.0, 0.0, 128.0, MAX8);
        let hue = his.hue.unwrap();
        assert!(hue > 300.0 && hue < 360.0, "hue = {}", hue);
    }

    #[test]
    fn test_sector_tie_break_prefers_red() {
        assert_eq!(HueSector::select(1.0, 1.0, 0.0, 1.0), HueSector::Red);
        assert_eq!(HueSector::select(1.0, 0.0, 1.0, 1.0), HueSector::Red);
        assert_eq!(HueSector::select(1.0, 1.0, 1.0, 1.0), HueSector::Red);
        assert_eq!(HueSector::select(0.0, 1.0, 1.0, 1.0), HueSector::Green);
        assert_eq!(HueSector::select(0.0, 0.5, 1.0, 1.0), HueSector::Blue);
    }

    #[test]
    fn test_red_green_tie_uses_red_formula() {
        // r = g = max > b: red formula b' - g' = 1 - 0
        let his = rgb_to_his(200.0, 200.0, 100.0, MAX8);
        assert_relative_eq!(his.hue.unwrap(), 60.0);
    }

    #[test]
    fn test_convert_pixel_nodata() {
        assert_eq!(convert_pixel([None, Some(1.0), Some(1.0)], MAX8), [None; 3]);
        assert_eq!(convert_pixel([Some(1.0), None, Some(1.0)], MAX8), [None; 3]);
        assert_eq!(convert_pixel([Some(1.0), Some(1.0), None], MAX8), [None; 3]);
    }

    #[test]
    fn test_convert_pixel_achromatic_only_blanks_hue() {
        let out = convert_pixel([Some(255.0), Some(255.0), Some(255.0)], MAX8);
        assert_eq!(out, [None, Some(1.0), Some(0.0)]);
    }

    #[test]
    fn test_ranges_over_8bit_grid() {
        for r in (0..=255).step_by(15) {
            for g in (0..=255).step_by(17) {
                for b in (0..=255).step_by(51) {
                    let his = rgb_to_his(r as f64, g as f64, b as f64, MAX8);
                    assert!((0.0..=1.0).contains(&his.intensity), "{r} {g} {b}");
                    assert!((0.0..=1.0).contains(&his.saturation), "{r} {g} {b}");
                    if let Some(hue) = his.hue {
                        assert!((0.0..360.0).contains(&hue), "{r} {g} {b}: {hue}");
                    } else {
                        assert!(r == g && g == b);
                    }
                }
            }
        }
    }

    #[test]
    fn test_to_his_trait() {
        let a = [0.0, 0.0, 255.0].to_his(MAX8).unwrap();
        let b = [Some(0.0), Some(0.0), Some(255.0)].to_his(MAX8).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.hue, Some(240.0));
    }

    #[test]
    fn test_16bit_ceiling() {
        let his = rgb_to_his(65535.0, 0.0, 0.0, 65535.0);
        assert_eq!(his.hue, Some(0.0));
        assert_eq!(his.saturation, 1.0);
    }

    #[test]
    fn test_hue_never_reaches_full_turn() {
        // b' sits one ulp below 1, so the red sector yields a tiny negative hue
        let his = rgb_to_his(1.0, 0.0, 2f64.powi(-53), 1.0);
        let hue = his.hue.unwrap();
        assert!(hue < 360.0);
        assert_eq!(hue, 0.0);
    }

    #[test]
    fn test_extrema() {
        assert_eq!(extrema(0.2, 0.9, 0.4), (0.2, 0.9));
        assert_eq!(extrema(0.7, 0.7, 0.1), (0.1, 0.7));
        assert_eq!(extrema(0.5, 0.5, 0.5), (0.5, 0.5));
        assert_eq!(extrema(-1.0, 0.0, 2.0), (-1.0, 2.0));
    }
}
