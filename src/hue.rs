//! Hue bar picker.
//!
//! Maps a 1-D position along the bar to a hue angle. The tracker stores the
//! thumb position as a fraction of the bar in `[0, 1]`; the hue is derived
//! from it and wrapped into `[0, 360)`, so the far end of the bar reads as
//! hue 0 while the thumb stays at the end.

use crate::color::{self, HexColor};
use crate::config::HuePickerConfig;
use crate::gesture::{GestureEvent, GestureTracker, PickerHandler, PickerState, PickerUpdate};
use crate::picker::ColorQuery;
use crate::types::{Arrangement, Point};

/// Border color of the thumb when tinting is off.
const THUMB_BORDER_WHITE: &str = "#ffffff";

/// Maps gestures on a hue bar to a hue angle.
#[derive(Debug, Clone, Copy)]
pub struct HuePicker {
    config: HuePickerConfig,
    tracker: GestureTracker<f32>,
}

impl HuePicker {
    /// Creates a hue picker showing `hue` (degrees, expected in `[0, 360)`).
    pub fn new(config: HuePickerConfig, hue: f32) -> Self {
        Self {
            config,
            tracker: GestureTracker::new(hue / 360.0, config.delta_mode),
        }
    }

    /// Returns the configuration.
    pub fn config(&self) -> &HuePickerConfig {
        &self.config
    }

    /// Current hue in degrees, `[0, 360)`.
    pub fn hue(&self) -> f32 {
        color::fraction_to_hue(self.tracker.value())
    }

    /// Thumb position as a fraction of the bar, `[0, 1]`.
    pub fn fraction(&self) -> f32 {
        color::normalize(self.tracker.value())
    }

    /// Current drag state.
    pub fn state(&self) -> PickerState {
        self.tracker.state()
    }

    /// Hue of the current drag anchor, in degrees.
    pub fn anchor_hue(&self) -> f32 {
        color::fraction_to_hue(self.tracker.session().anchor())
    }

    /// Applies a hue pushed by the coordinator.
    ///
    /// The caller must pass a hue in `[0, 360)`.
    pub fn set_hue(&mut self, hue: f32) {
        self.tracker.set_value(hue / 360.0);
    }

    /// Hue for a tap at `coordinate` along the bar axis.
    pub fn press(&mut self, coordinate: f32) -> f32 {
        let axis_point = match self.config.arrangement {
            Arrangement::Horizontal => Point::new(coordinate, 0.0),
            Arrangement::Vertical => Point::new(0.0, coordinate),
        };
        self.handle(GestureEvent::Tap(axis_point)).value
    }

    /// Feeds one gesture event and returns the hue it produced.
    pub fn handle(&mut self, event: GestureEvent) -> PickerUpdate<f32> {
        let length = self.config.long_side();
        let arrangement = self.config.arrangement;

        self.tracker.handle(
            event,
            |location| color::normalize(arrangement.select(location.x, location.y) / length),
            |anchor, delta| {
                color::normalize(anchor + arrangement.select(delta.dx, delta.dy) / length)
            },
        );

        PickerUpdate {
            value: self.hue(),
            event,
        }
    }

    /// Like [`handle`](Self::handle), then dispatches the update to `handler`.
    pub fn handle_with<H: PickerHandler<f32> + ?Sized>(
        &mut self,
        event: GestureEvent,
        handler: &mut H,
    ) -> PickerUpdate<f32> {
        let update = self.handle(event);
        update.dispatch(handler);
        update
    }

    /// Pixel offset of the thumb along the bar axis.
    pub fn thumb_offset(&self) -> f32 {
        self.config.long_side() * self.fraction()
    }

    /// Border color of the thumb: the hue preview when tinting is on, white otherwise.
    pub fn thumb_border_color(&self) -> HexColor {
        if self.config.border_tinted {
            self.current_color()
        } else {
            let mut white = HexColor::new();
            let _ = white.push_str(THUMB_BORDER_WHITE);
            white
        }
    }
}

impl ColorQuery for HuePicker {
    /// Fully saturated preview of the current hue, for the thumb fill.
    fn current_color(&self) -> HexColor {
        color::hue_preview_hex(self.hue())
    }
}
