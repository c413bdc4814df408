#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`HuePicker`**: Maps taps and drags along a hue bar to a hue angle in `[0, 360)`
//! - **`SatValPicker`**: Maps taps and drags in a rectangle to saturation and value in `[0, 1]`
//! - **`ColorPicker`**: Owns the canonical HSV triple, merges both pickers and notifies a listener
//! - **`ColorListener`**: Trait to implement for receiving the combined `#rrggbb` color
//! - **`PickerHandler`**: Trait to implement for per-phase gesture callbacks
//! - **`GestureEvent`**: Drag start/move/end/terminate and tap events delivered by the host
//! - **`DeltaMode`**: Whether drag deltas are incremental or cumulative from gesture start
//! - **`PickerConfig`**: Dimensions, orientation and delta convention, built with
//!   `PickerConfig::builder()`
//!
//! All arithmetic happens on [`HsvColor`]. Hex strings are decoded and encoded
//! through `palette` at the edges only, and are held in fixed-capacity
//! `heapless` strings so the crate never allocates.

// Re-export the palette color types used at the crate boundary
pub use palette::Srgb;

pub mod color;
pub mod config;
pub mod gesture;
pub mod hue;
pub mod picker;
pub mod sat_val;
pub mod types;

pub use color::{ColorError, HexColor, hex_to_hsv, hsv_to_hex, normalize};
pub use config::{HuePickerConfig, PickerConfig, PickerConfigBuilder, SatValPickerConfig};
pub use gesture::{
    DragDelta, DragSession, GestureEvent, GesturePhase, PickerHandler, PickerState, PickerUpdate,
};
pub use hue::HuePicker;
pub use picker::{ColorListener, ColorPicker, ColorQuery, PickerTarget};
pub use sat_val::SatValPicker;
pub use types::{Arrangement, DeltaMode, ExternalColor, HsvColor, Insets, Point, SatVal};

/// Color used when a host-supplied color cannot be decoded.
pub const DEFAULT_COLOR: HsvColor = HsvColor::WHITE;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_color_is_white() {
        assert_eq!(hsv_to_hex(DEFAULT_COLOR).as_str(), "#ffffff");
        assert_eq!(HsvColor::default(), DEFAULT_COLOR);
    }
}
