//! Color space transforms used to derive presentable identifiers for palette colors.
//!
//! These do not participate in any quantization or filtering decision;
//! they only render the colors the rest of the crate produces.

use palette::Srgb;

/// A color in HSL form: hue in degrees, saturation and luminance as percentages.
///
/// Produced by [`rgb_to_hsl`], which rotates the hue to the complementary color
/// and rounds the components, so this is a display value rather than a faithful
/// HSL encoding of the input. See [`rgb_to_hsl`] for the exact semantics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    /// Hue in whole degrees. May exceed `360`, since the complementary
    /// rotation is applied without wrapping.
    pub h: f64,
    /// Saturation as a percentage, rounded to two decimals.
    pub s: f64,
    /// Luminance as a percentage, rounded to two decimals.
    pub l: f64,
}

/// Formats the color as an uppercase `#RRGGBB` hex string,
/// with each channel zero-padded to two digits.
#[must_use]
pub fn rgb_to_hex(color: Srgb<u8>) -> String {
    format!("#{:02X}{:02X}{:02X}", color.red, color.green, color.blue)
}

/// Converts the color to HSL and rotates the hue by `+180°`, yielding the HSL
/// of the *complementary* color rather than of the input itself.
///
/// The rotation is applied after rounding the hue to a whole degree and without
/// wrapping, so the resulting hue lies in `180.0..=540.0`. Saturation and
/// luminance are percentages rounded to two decimals.
///
/// Returns `None` for achromatic colors (all three channels equal): white,
/// gray, and black have no hue, so there is no HSL value to produce.
#[must_use]
pub fn rgb_to_hsl(color: Srgb<u8>) -> Option<Hsl> {
    // When all of R, G, and B are equal the color is neutral and hue is undefined.
    if color.red == color.green && color.green == color.blue {
        return None;
    }

    let r = f64::from(color.red) / 255.0;
    let g = f64::from(color.green) / 255.0;
    let b = f64::from(color.blue) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let difference = max - min;

    let luminance = (max + min) / 2.0;
    let saturation = if luminance <= 0.5 {
        difference / (max + min)
    } else {
        difference / (2.0 - max - min)
    };

    let max_channel = color.red.max(color.green).max(color.blue);
    let mut hue = if max_channel == color.red {
        (g - b) / difference
    } else if max_channel == color.green {
        2.0 + (b - r) / difference
    } else {
        4.0 + (r - g) / difference
    };

    // Each of the six sectors above spans 60 degrees.
    hue *= 60.0;
    if hue < 0.0 {
        hue += 360.0;
    }

    Some(Hsl {
        h: hue.round() + 180.0,
        s: round_percent(saturation * 100.0),
        l: round_percent(luminance * 100.0),
    })
}

/// Converts the HSL value back to RGB and formats it as an uppercase `#RRGGBB`
/// hex string.
///
/// Useful when a rendered value derived purely from hue, saturation, and
/// luminance is needed rather than one derived from direct RGB channels.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn hsl_to_hex(hsl: Hsl) -> String {
    let l = hsl.l / 100.0;
    let a = hsl.s * l.min(1.0 - l) / 100.0;

    let channel = |n: f64| {
        let k = (n + hsl.h / 30.0) % 12.0;
        let value = l - a * (k - 3.0).min(9.0 - k).clamp(-1.0, 1.0);
        (255.0 * value).round() as u8
    };

    format!("#{:02X}{:02X}{:02X}", channel(0.0), channel(8.0), channel(4.0))
}

/// Rounds a percentage to two decimals.
fn round_percent(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
