//! Saturation/value rectangle picker.
//!
//! Saturation grows left to right, value grows bottom to top. The hue is an
//! input supplied by the coordinator and never changed here.

use crate::color::{self, HexColor};
use crate::config::SatValPickerConfig;
use crate::gesture::{GestureEvent, GestureTracker, PickerHandler, PickerState, PickerUpdate};
use crate::picker::ColorQuery;
use crate::types::{HsvColor, Point, SatVal};

/// Maps gestures on the saturation/value rectangle to a [`SatVal`] pair.
#[derive(Debug, Clone, Copy)]
pub struct SatValPicker {
    config: SatValPickerConfig,
    hue: f32,
    tracker: GestureTracker<SatVal>,
}

impl SatValPicker {
    /// Creates a picker for `hue` showing `sat_val`.
    pub fn new(config: SatValPickerConfig, hue: f32, sat_val: SatVal) -> Self {
        Self {
            config,
            hue,
            tracker: GestureTracker::new(sat_val, config.delta_mode),
        }
    }

    /// Returns the configuration.
    pub fn config(&self) -> &SatValPickerConfig {
        &self.config
    }

    /// Current saturation and value.
    pub fn sat_val(&self) -> SatVal {
        self.tracker.value()
    }

    /// Hue the rectangle is drawn for.
    pub fn hue(&self) -> f32 {
        self.hue
    }

    /// The full color this picker currently shows.
    pub fn hsv(&self) -> HsvColor {
        let sat_val = self.sat_val();
        HsvColor::new(self.hue, sat_val.saturation, sat_val.value)
    }

    /// Current drag state.
    pub fn state(&self) -> PickerState {
        self.tracker.state()
    }

    /// Current drag anchor.
    pub fn anchor(&self) -> SatVal {
        self.tracker.session().anchor()
    }

    /// Applies a hue pushed by the coordinator.
    pub fn set_hue(&mut self, hue: f32) {
        self.hue = hue;
    }

    /// Applies saturation and value pushed by the coordinator.
    pub fn set_sat_val(&mut self, sat_val: SatVal) {
        self.tracker.set_value(sat_val);
    }

    /// Saturation and value for a tap at `(x, y)` inside the rectangle.
    pub fn press(&mut self, x: f32, y: f32) -> SatVal {
        self.handle(GestureEvent::Tap(Point::new(x, y))).value
    }

    /// Feeds one gesture event and returns the pair it produced.
    pub fn handle(&mut self, event: GestureEvent) -> PickerUpdate<SatVal> {
        let width = self.config.width;
        let height = self.config.height;

        let value = self.tracker.handle(
            event,
            |location| {
                SatVal::new(
                    color::normalize(location.x / width),
                    1.0 - color::normalize(location.y / height),
                )
            },
            |anchor, delta| {
                SatVal::new(
                    color::normalize(anchor.saturation + delta.dx / width),
                    color::normalize(anchor.value - delta.dy / height),
                )
            },
        );

        PickerUpdate { value, event }
    }

    /// Like [`handle`](Self::handle), then dispatches the update to `handler`.
    pub fn handle_with<H: PickerHandler<SatVal> + ?Sized>(
        &mut self,
        event: GestureEvent,
        handler: &mut H,
    ) -> PickerUpdate<SatVal> {
        let update = self.handle(event);
        update.dispatch(handler);
        update
    }

    /// Thumb center in rectangle coordinates.
    pub fn thumb_position(&self) -> Point {
        let sat_val = self.sat_val();
        Point::new(
            self.config.width * sat_val.saturation,
            self.config.height * (1.0 - sat_val.value),
        )
    }

    /// Saturated end of the horizontal gradient (right edge, top row).
    pub fn gradient_end_color(&self) -> HexColor {
        color::hue_preview_hex(self.hue)
    }
}

impl ColorQuery for SatValPicker {
    /// The complete picked color, `hsv(hue, saturation, value)`.
    fn current_color(&self) -> HexColor {
        color::hsv_to_hex(self.hsv())
    }
}
