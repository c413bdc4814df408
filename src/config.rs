//! Picker configuration.
//!
//! Dimensions are not validated: non-positive sizes are the caller's problem.

use crate::types::{Arrangement, DeltaMode, Insets};

/// Default hue bar length along its axis.
pub const DEFAULT_BAR_LENGTH: f32 = 200.0;

/// Default hue bar thickness across its axis.
pub const DEFAULT_BAR_THICKNESS: f32 = 12.0;

/// Default saturation/value rectangle width.
pub const DEFAULT_SAT_VAL_WIDTH: f32 = 200.0;

/// Default saturation/value rectangle height.
pub const DEFAULT_SAT_VAL_HEIGHT: f32 = 120.0;

/// Default thumb diameter for both pickers.
pub const DEFAULT_THUMB_SIZE: f32 = 24.0;

/// Hue bar configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct HuePickerConfig {
    /// Which axis drives the hue.
    pub arrangement: Arrangement,

    /// Length of the bar along its axis; the `L` of the hue mapping.
    pub bar_length: f32,

    /// Thickness of the bar across its axis.
    pub bar_thickness: f32,

    /// Thumb diameter.
    pub thumb_size: f32,

    /// Corner radius of the bar.
    pub border_radius: f32,

    /// Tint the thumb border with the current hue.
    pub border_tinted: bool,

    /// How drag deltas are interpreted.
    pub delta_mode: DeltaMode,
}

impl Default for HuePickerConfig {
    fn default() -> Self {
        Self {
            arrangement: Arrangement::default(),
            bar_length: DEFAULT_BAR_LENGTH,
            bar_thickness: DEFAULT_BAR_THICKNESS,
            thumb_size: DEFAULT_THUMB_SIZE,
            border_radius: 0.0,
            border_tinted: false,
            delta_mode: DeltaMode::default(),
        }
    }
}

impl HuePickerConfig {
    /// Extent of the bar along the hue axis.
    #[inline]
    pub fn long_side(&self) -> f32 {
        self.bar_length
    }

    /// Extent of the bar across the hue axis.
    #[inline]
    pub fn short_side(&self) -> f32 {
        self.bar_thickness
    }

    /// Padding that keeps the thumb inside the container at both ends of the bar.
    pub fn insets(&self) -> Insets {
        let along = self.thumb_size / 2.0;
        let overhang = self.thumb_size - self.short_side();
        let across = if overhang > 0.0 { overhang / 2.0 } else { 0.0 };

        match self.arrangement {
            Arrangement::Horizontal => Insets {
                horizontal: along,
                vertical: across,
            },
            Arrangement::Vertical => Insets {
                horizontal: across,
                vertical: along,
            },
        }
    }
}

/// Saturation/value rectangle configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SatValPickerConfig {
    /// Rectangle width; saturation axis.
    pub width: f32,

    /// Rectangle height; value axis.
    pub height: f32,

    /// Thumb diameter.
    pub thumb_size: f32,

    /// Corner radius of the rectangle.
    pub border_radius: f32,

    /// How drag deltas are interpreted.
    pub delta_mode: DeltaMode,
}

impl Default for SatValPickerConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_SAT_VAL_WIDTH,
            height: DEFAULT_SAT_VAL_HEIGHT,
            thumb_size: DEFAULT_THUMB_SIZE,
            border_radius: 0.0,
            delta_mode: DeltaMode::default(),
        }
    }
}

impl SatValPickerConfig {
    /// Container size that fits the thumb at every edge, as `(width, height)`.
    #[inline]
    pub fn container_size(&self) -> (f32, f32) {
        (self.width + self.thumb_size, self.height + self.thumb_size)
    }
}

/// Configuration for the combined picker.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PickerConfig {
    pub hue: HuePickerConfig,
    pub sat_val: SatValPickerConfig,
}

impl PickerConfig {
    /// Creates a new configuration builder with all defaults.
    pub fn builder() -> PickerConfigBuilder {
        PickerConfigBuilder::new()
    }
}

/// Builder for [`PickerConfig`].
#[derive(Debug, Clone, Copy, Default)]
pub struct PickerConfigBuilder {
    config: PickerConfig,
}

impl PickerConfigBuilder {
    /// Creates a builder holding the default configuration.
    pub fn new() -> Self {
        Self {
            config: PickerConfig::default(),
        }
    }

    /// Sets the hue bar orientation. Default is `Vertical`.
    pub fn arrangement(mut self, arrangement: Arrangement) -> Self {
        self.config.hue.arrangement = arrangement;
        self
    }

    /// Sets the hue bar length and thickness.
    pub fn hue_bar(mut self, length: f32, thickness: f32) -> Self {
        self.config.hue.bar_length = length;
        self.config.hue.bar_thickness = thickness;
        self
    }

    /// Sets the hue thumb diameter.
    pub fn hue_thumb_size(mut self, size: f32) -> Self {
        self.config.hue.thumb_size = size;
        self
    }

    /// Sets the hue bar corner radius.
    pub fn hue_border_radius(mut self, radius: f32) -> Self {
        self.config.hue.border_radius = radius;
        self
    }

    /// Tints the hue thumb border with the current hue.
    pub fn hue_border_tinted(mut self, tinted: bool) -> Self {
        self.config.hue.border_tinted = tinted;
        self
    }

    /// Sets the saturation/value rectangle size.
    pub fn sat_val_size(mut self, width: f32, height: f32) -> Self {
        self.config.sat_val.width = width;
        self.config.sat_val.height = height;
        self
    }

    /// Sets the saturation/value thumb diameter.
    pub fn sat_val_thumb_size(mut self, size: f32) -> Self {
        self.config.sat_val.thumb_size = size;
        self
    }

    /// Sets the saturation/value rectangle corner radius.
    pub fn sat_val_border_radius(mut self, radius: f32) -> Self {
        self.config.sat_val.border_radius = radius;
        self
    }

    /// Sets the drag delta convention for both pickers.
    ///
    /// Default is `DeltaMode::Incremental`.
    pub fn delta_mode(mut self, mode: DeltaMode) -> Self {
        self.config.hue.delta_mode = mode;
        self.config.sat_val.delta_mode = mode;
        self
    }

    /// Builds the configuration.
    pub fn build(self) -> PickerConfig {
        self.config
    }
}
