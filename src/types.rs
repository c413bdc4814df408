//! Core value types shared by the pickers and the coordinator.

use crate::color::{self, ColorError, HexColor};

/// A color in the HSV model.
///
/// `hue` is an angle in degrees within `[0, 360)`, `saturation` and `value`
/// are intensities within `[0, 1]`. This is the canonical in-memory form;
/// every mapping operates on it and hex strings are only produced at the edges.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct HsvColor {
    /// Hue angle in degrees, `[0, 360)`.
    pub hue: f32,

    /// Saturation, `[0, 1]`.
    pub saturation: f32,

    /// Value (brightness), `[0, 1]`.
    pub value: f32,
}

impl HsvColor {
    /// White: hue 0, no saturation, full value.
    pub const WHITE: Self = Self::new(0.0, 0.0, 1.0);

    /// Creates a color from raw components. No normalization is applied.
    #[inline]
    pub const fn new(hue: f32, saturation: f32, value: f32) -> Self {
        Self {
            hue,
            saturation,
            value,
        }
    }

    /// Returns the saturation/value slice of this color.
    #[inline]
    pub fn sat_val(&self) -> SatVal {
        SatVal::new(self.saturation, self.value)
    }

    /// Returns a copy with the hue replaced.
    #[inline]
    pub fn with_hue(self, hue: f32) -> Self {
        Self { hue, ..self }
    }

    /// Returns a copy with saturation and value replaced.
    #[inline]
    pub fn with_sat_val(self, sat_val: SatVal) -> Self {
        Self {
            saturation: sat_val.saturation,
            value: sat_val.value,
            ..self
        }
    }
}

impl Default for HsvColor {
    fn default() -> Self {
        Self::WHITE
    }
}

/// The saturation/value pair owned by the rectangle picker.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SatVal {
    /// Saturation, `[0, 1]`. Grows left to right.
    pub saturation: f32,

    /// Value, `[0, 1]`. Grows bottom to top.
    pub value: f32,
}

impl SatVal {
    /// Creates a saturation/value pair.
    #[inline]
    pub const fn new(saturation: f32, value: f32) -> Self {
        Self { saturation, value }
    }
}

/// Orientation of the hue bar.
///
/// Selects which screen axis drives the hue. Fixed for a picker's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Arrangement {
    /// Hue grows left to right; reads the x axis.
    Horizontal,

    /// Hue grows top to bottom; reads the y axis.
    #[default]
    Vertical,
}

impl Arrangement {
    /// Picks the component of an `(x, y)` pair that this arrangement reads.
    #[inline]
    pub fn select(self, x: f32, y: f32) -> f32 {
        match self {
            Arrangement::Horizontal => x,
            Arrangement::Vertical => y,
        }
    }
}

/// How drag deltas reported by the host relate to each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DeltaMode {
    /// Each move reports the distance since the previous move.
    ///
    /// The drag anchor is refreshed to the computed value after every move.
    #[default]
    Incremental,

    /// Each move reports the distance since the gesture started.
    ///
    /// The drag anchor is captured once at drag start and held until the drag ends.
    Cumulative,
}

/// A position in a picker's local pixel space, origin at the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    /// Creates a point.
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Padding around a picker, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Insets {
    /// Left and right padding.
    pub horizontal: f32,

    /// Top and bottom padding.
    pub vertical: f32,
}

/// A color as supplied by the host.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ExternalColor<'a> {
    /// Hex string: `#rrggbb`, `rrggbb`, or the 3-digit shorthand.
    Hex(&'a str),

    /// Components already in HSV form: hue in degrees, saturation and value in `[0, 1]`.
    Hsv([f32; 3]),
}

impl ExternalColor<'_> {
    /// Decodes this color into HSV.
    ///
    /// Hex strings go through [`color::hex_to_hsv`]. Numeric triples must be
    /// finite; their saturation and value are normalized and the hue wrapped
    /// into `[0, 360)`.
    pub fn decode(&self) -> Result<HsvColor, ColorError> {
        match *self {
            ExternalColor::Hex(hex) => color::hex_to_hsv(hex),
            ExternalColor::Hsv([hue, saturation, value]) => {
                if !(hue.is_finite() && saturation.is_finite() && value.is_finite()) {
                    return Err(ColorError::NonFiniteComponent);
                }
                Ok(HsvColor::new(
                    color::wrap_hue(hue),
                    color::normalize(saturation),
                    color::normalize(value),
                ))
            }
        }
    }
}

impl<'a> From<&'a str> for ExternalColor<'a> {
    fn from(hex: &'a str) -> Self {
        ExternalColor::Hex(hex)
    }
}

impl<'a> From<&'a HexColor> for ExternalColor<'a> {
    fn from(hex: &'a HexColor) -> Self {
        ExternalColor::Hex(hex.as_str())
    }
}

impl From<[f32; 3]> for ExternalColor<'_> {
    fn from(hsv: [f32; 3]) -> Self {
        ExternalColor::Hsv(hsv)
    }
}

impl From<HsvColor> for ExternalColor<'_> {
    fn from(hsv: HsvColor) -> Self {
        ExternalColor::Hsv([hsv.hue, hsv.saturation, hsv.value])
    }
}
