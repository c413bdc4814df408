//! Color conversion helpers.
//!
//! Converts between hex strings and [`HsvColor`] through `palette`, and
//! provides the clamping used by every gesture mapping. Hex output is always
//! lowercase `#rrggbb` in a fixed-capacity [`HexColor`], so nothing here
//! allocates.

use core::fmt::Write;

use palette::{FromColor, Hsl, Hsv, Srgb};

use crate::types::{ExternalColor, HsvColor};

/// Capacity of a `#rrggbb` string.
pub const HEX_CAPACITY: usize = 7;

/// A `#rrggbb` color string.
pub type HexColor = heapless::String<HEX_CAPACITY>;

/// Color decoding errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ColorError {
    /// The string is not a 3- or 6-digit hex color.
    InvalidHex,

    /// A numeric HSV component is NaN or infinite.
    NonFiniteComponent,
}

impl core::fmt::Display for ColorError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ColorError::InvalidHex => {
                write!(f, "color is not a valid #rgb or #rrggbb hex string")
            }
            ColorError::NonFiniteComponent => {
                write!(f, "HSV component is not a finite number")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ColorError {}

/// Clamps a scalar into `[0, 1]`.
///
/// NaN maps to 0.
#[inline]
pub fn normalize(value: f32) -> f32 {
    if value.is_nan() || value < 0.0 {
        0.0
    } else if value > 1.0 {
        1.0
    } else {
        value
    }
}

/// Wraps a hue angle in degrees into `[0, 360)`.
#[inline]
pub fn wrap_hue(hue: f32) -> f32 {
    let mut wrapped = hue % 360.0;
    if wrapped < 0.0 {
        wrapped += 360.0;
    }
    // Tiny negative inputs round up to exactly 360 in f32.
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// Converts a hue fraction in `[0, 1]` (clamped first) to degrees in `[0, 360)`.
#[inline]
pub fn fraction_to_hue(fraction: f32) -> f32 {
    wrap_hue(normalize(fraction) * 360.0)
}

/// Creates an RGB color from HSV components (hue in degrees).
#[inline]
pub fn hsv(hue: f32, saturation: f32, value: f32) -> Srgb {
    let hsv = Hsv::new(hue, saturation, value);
    Srgb::from_color(hsv)
}

/// Creates an RGB color from HSL components (hue in degrees).
#[inline]
pub fn hsl(hue: f32, saturation: f32, lightness: f32) -> Srgb {
    let hsl = Hsl::new(hue, saturation, lightness);
    Srgb::from_color(hsl)
}

/// Formats an RGB color as lowercase `#rrggbb`.
pub fn to_hex(color: Srgb) -> HexColor {
    let rgb: Srgb<u8> = color.into_format();
    let mut hex = HexColor::new();
    // Seven bytes always fit.
    let _ = write!(hex, "#{:02x}{:02x}{:02x}", rgb.red, rgb.green, rgb.blue);
    hex
}

/// Encodes an HSV color as `#rrggbb`.
#[inline]
pub fn hsv_to_hex(color: HsvColor) -> HexColor {
    to_hex(hsv(color.hue, color.saturation, color.value))
}

/// Preview color for a hue: fully saturated at half lightness.
///
/// Only meant for decorations such as the hue thumb; it ignores the picked
/// saturation and value.
#[inline]
pub fn hue_preview_hex(hue: f32) -> HexColor {
    to_hex(hsl(hue, 1.0, 0.5))
}

/// Decodes a hex string (`#rrggbb`, `rrggbb`, `#rgb` or `rgb`) into HSV.
///
/// # Errors
/// * `InvalidHex` - the string is not a valid hex color
pub fn hex_to_hsv(hex: &str) -> Result<HsvColor, ColorError> {
    if !hex.is_ascii() {
        return Err(ColorError::InvalidHex);
    }
    let rgb: Srgb<u8> = hex.trim().parse().map_err(|_| ColorError::InvalidHex)?;
    let hsv: Hsv = Hsv::from_color(rgb.into_format::<f32>());

    Ok(HsvColor::new(
        wrap_hue(hsv.hue.into_positive_degrees()),
        normalize(hsv.saturation),
        normalize(hsv.value),
    ))
}

/// Decodes a host-supplied color, falling back to white when it is malformed.
pub fn decode_or_default(color: ExternalColor<'_>) -> HsvColor {
    match color.decode() {
        Ok(hsv) => hsv,
        Err(_err) => {
            #[cfg(feature = "defmt")]
            defmt::warn!("undecodable color ({}), using white", _err);
            HsvColor::WHITE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        const EPSILON: f32 = 0.005;
        let diff = a - b;
        diff < EPSILON && diff > -EPSILON
    }

    #[test]
    fn normalize_clamps_out_of_range() {
        assert_eq!(normalize(-0.5), 0.0);
        assert_eq!(normalize(-1000.0), 0.0);
        assert_eq!(normalize(1.5), 1.0);
        assert_eq!(normalize(f32::INFINITY), 1.0);
        assert_eq!(normalize(0.25), 0.25);
        assert_eq!(normalize(0.0), 0.0);
        assert_eq!(normalize(1.0), 1.0);
        assert_eq!(normalize(f32::NAN), 0.0);
    }

    #[test]
    fn normalize_is_idempotent() {
        for i in -20..=40 {
            let x = i as f32 * 0.05;
            assert_eq!(normalize(normalize(x)), normalize(x));
        }
    }

    #[test]
    fn wrap_hue_stays_in_range() {
        assert_eq!(wrap_hue(0.0), 0.0);
        assert_eq!(wrap_hue(360.0), 0.0);
        assert_eq!(wrap_hue(725.0), 5.0);
        assert_eq!(wrap_hue(-90.0), 270.0);
        let tiny = wrap_hue(-1e-9);
        assert!((0.0..360.0).contains(&tiny));
    }

    #[test]
    fn fraction_to_hue_wraps_full_bar() {
        assert_eq!(fraction_to_hue(0.0), 0.0);
        assert_eq!(fraction_to_hue(0.5), 180.0);
        assert_eq!(fraction_to_hue(1.0), 0.0);
        assert_eq!(fraction_to_hue(3.0), 0.0);
        assert_eq!(fraction_to_hue(-1.0), 0.0);
    }

    #[test]
    fn primary_hues_encode_to_primaries() {
        assert_eq!(hsv_to_hex(HsvColor::new(0.0, 1.0, 1.0)).as_str(), "#ff0000");
        assert_eq!(hsv_to_hex(HsvColor::new(120.0, 1.0, 1.0)).as_str(), "#00ff00");
        assert_eq!(hsv_to_hex(HsvColor::new(240.0, 1.0, 1.0)).as_str(), "#0000ff");
    }

    #[test]
    fn white_and_black_encode() {
        assert_eq!(hsv_to_hex(HsvColor::WHITE).as_str(), "#ffffff");
        assert_eq!(hsv_to_hex(HsvColor::new(200.0, 0.7, 0.0)).as_str(), "#000000");
    }

    #[test]
    fn hue_preview_ignores_saturation_and_value() {
        assert_eq!(hue_preview_hex(0.0).as_str(), "#ff0000");
        assert_eq!(hue_preview_hex(120.0).as_str(), "#00ff00");
        assert_eq!(hue_preview_hex(240.0).as_str(), "#0000ff");
        assert_eq!(hue_preview_hex(60.0).as_str(), "#ffff00");
    }

    #[test]
    fn hex_decodes_to_hsv() {
        let red = hex_to_hsv("#ff0000").unwrap();
        assert!(approx(red.hue, 0.0));
        assert!(approx(red.saturation, 1.0));
        assert!(approx(red.value, 1.0));

        let blue = hex_to_hsv("0000ff").unwrap();
        assert!(approx(blue.hue, 240.0));

        let white = hex_to_hsv("#fff").unwrap();
        assert!(approx(white.saturation, 0.0));
        assert!(approx(white.value, 1.0));
    }

    #[test]
    fn hex_decode_matches_known_color() {
        let hsv = hex_to_hsv("#3498db").unwrap();
        assert!(approx(hsv.hue, 204.07));
        assert!(approx(hsv.saturation, 0.7626));
        assert!(approx(hsv.value, 0.8588));
    }

    #[test]
    fn malformed_hex_is_rejected() {
        assert_eq!(hex_to_hsv(""), Err(ColorError::InvalidHex));
        assert_eq!(hex_to_hsv("#12345"), Err(ColorError::InvalidHex));
        assert_eq!(hex_to_hsv("#gggggg"), Err(ColorError::InvalidHex));
        assert_eq!(hex_to_hsv("#ééé"), Err(ColorError::InvalidHex));
    }

    #[test]
    fn decode_or_default_falls_back_to_white() {
        assert_eq!(decode_or_default(ExternalColor::Hex("nope")), HsvColor::WHITE);
        assert_eq!(
            decode_or_default(ExternalColor::Hsv([f32::NAN, 0.5, 0.5])),
            HsvColor::WHITE
        );
    }

    #[test]
    fn numeric_triple_is_normalized() {
        let hsv = decode_or_default(ExternalColor::Hsv([400.0, 1.5, -0.2]));
        assert!(approx(hsv.hue, 40.0));
        assert_eq!(hsv.saturation, 1.0);
        assert_eq!(hsv.value, 0.0);
    }
}
