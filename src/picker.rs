//! Coordinator that merges the two pickers into one color.
//!
//! Provides [`ColorPicker`], the single owner of the canonical HSV triple, and
//! the [`ColorListener`] trait through which the host receives the combined
//! color. Also defines [`ColorQuery`], the read-only color query every picker
//! exposes.

use crate::color::{self, HexColor};
use crate::config::PickerConfig;
use crate::gesture::{GestureEvent, PickerHandler, PickerUpdate};
use crate::hue::HuePicker;
use crate::sat_val::SatValPicker;
use crate::types::{ExternalColor, HsvColor, SatVal};

/// Trait for receiving the picked color.
///
/// Implement this to forward color changes to the host (a signal, a callback,
/// a model field). Called synchronously while the triggering event is handled.
pub trait ColorListener {
    /// Receives the combined color as lowercase `#rrggbb`.
    fn on_color_change(&mut self, color: &str);
}

impl<F: FnMut(&str)> ColorListener for F {
    fn on_color_change(&mut self, color: &str) {
        self(color)
    }
}

/// Read-only query for the color a picker currently shows.
pub trait ColorQuery {
    /// Returns the current color as `#rrggbb`.
    fn current_color(&self) -> HexColor;
}

/// Which picker an event is aimed at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PickerTarget {
    Hue,
    SatVal,
}

/// Owns the hue and saturation/value pickers and the combined color.
///
/// Each picker only mutates its own slice of the triple; the coordinator is
/// the sole place where the slices are merged. The listener is notified with
/// the full color whenever a tap or drag move changes the triple, and when
/// the host replaces the color with a different one.
///
/// # Type Parameters
/// * `L` - Listener implementation type
pub struct ColorPicker<L: ColorListener> {
    listener: L,
    hue_picker: HuePicker,
    sat_val_picker: SatValPicker,
    hsv: HsvColor,
}

impl<L: ColorListener> ColorPicker<L> {
    /// Creates a picker seeded from `color` and announces it to the listener.
    ///
    /// A color that fails to decode is replaced by white.
    pub fn new<'a>(color: impl Into<ExternalColor<'a>>, config: PickerConfig, listener: L) -> Self {
        let hsv = color::decode_or_default(color.into());

        let mut picker = Self {
            listener,
            hue_picker: HuePicker::new(config.hue, hsv.hue),
            sat_val_picker: SatValPicker::new(config.sat_val, hsv.hue, hsv.sat_val()),
            hsv,
        };
        picker.emit();
        picker
    }

    /// Replaces the color from the host side.
    ///
    /// Both pickers are re-seeded and the listener notified, unless the
    /// color is already shown. A hex string is compared on its encoding, so
    /// feeding an emitted color back in leaves the pickers untouched. A color
    /// that fails to decode is replaced by white.
    pub fn set_color<'a>(&mut self, color: impl Into<ExternalColor<'a>>) {
        let external = color.into();
        let hsv = color::decode_or_default(external);
        let unchanged = match external {
            ExternalColor::Hex(_) => color::hsv_to_hex(hsv) == self.current_color(),
            ExternalColor::Hsv(_) => hsv == self.hsv,
        };
        if unchanged {
            return;
        }

        self.hue_picker.set_hue(hsv.hue);
        self.sat_val_picker.set_hue(hsv.hue);
        self.sat_val_picker.set_sat_val(hsv.sat_val());
        self.hsv = hsv;
        self.emit();
    }

    /// Routes an event to the targeted picker and returns the combined color.
    pub fn handle(&mut self, target: PickerTarget, event: GestureEvent) -> HsvColor {
        match target {
            PickerTarget::Hue => {
                self.handle_hue(event);
            }
            PickerTarget::SatVal => {
                self.handle_sat_val(event);
            }
        }
        self.hsv
    }

    /// Feeds an event to the hue picker and merges its hue.
    ///
    /// Returns the hue picker's update so the host can run its own callbacks.
    pub fn handle_hue(&mut self, event: GestureEvent) -> PickerUpdate<f32> {
        let update = self.hue_picker.handle(event);
        if event.is_value_changing() {
            self.sat_val_picker.set_hue(update.value);
            self.commit(self.hsv.with_hue(update.value));
        }
        update
    }

    /// Like [`handle_hue`](Self::handle_hue), then dispatches the update to `handler`.
    pub fn handle_hue_with<H: PickerHandler<f32> + ?Sized>(
        &mut self,
        event: GestureEvent,
        handler: &mut H,
    ) -> PickerUpdate<f32> {
        let update = self.handle_hue(event);
        update.dispatch(handler);
        update
    }

    /// Feeds an event to the saturation/value picker and merges its pair.
    ///
    /// Returns the saturation/value picker's update so the host can run its
    /// own callbacks.
    pub fn handle_sat_val(&mut self, event: GestureEvent) -> PickerUpdate<SatVal> {
        let update = self.sat_val_picker.handle(event);
        if event.is_value_changing() {
            self.commit(self.hsv.with_sat_val(update.value));
        }
        update
    }

    /// Like [`handle_sat_val`](Self::handle_sat_val), then dispatches the update to `handler`.
    pub fn handle_sat_val_with<H: PickerHandler<SatVal> + ?Sized>(
        &mut self,
        event: GestureEvent,
        handler: &mut H,
    ) -> PickerUpdate<SatVal> {
        let update = self.handle_sat_val(event);
        update.dispatch(handler);
        update
    }

    /// Returns the canonical HSV triple.
    pub fn hsv(&self) -> HsvColor {
        self.hsv
    }

    /// Returns the hue picker.
    pub fn hue_picker(&self) -> &HuePicker {
        &self.hue_picker
    }

    /// Returns the saturation/value picker.
    pub fn sat_val_picker(&self) -> &SatValPicker {
        &self.sat_val_picker
    }

    /// Returns a reference to the listener.
    pub fn listener(&self) -> &L {
        &self.listener
    }

    /// Returns a mutable reference to the listener.
    pub fn listener_mut(&mut self) -> &mut L {
        &mut self.listener
    }

    /// Consumes the picker and returns the listener.
    pub fn into_listener(self) -> L {
        self.listener
    }

    fn commit(&mut self, hsv: HsvColor) {
        if hsv != self.hsv {
            self.hsv = hsv;
            self.emit();
        }
    }

    fn emit(&mut self) {
        let hex = self.current_color();
        #[cfg(feature = "defmt")]
        defmt::trace!("color changed: {=str}", hex.as_str());
        self.listener.on_color_change(&hex);
    }
}

impl<L: ColorListener> ColorQuery for ColorPicker<L> {
    /// Delegates to the saturation/value picker, which shows the full color.
    fn current_color(&self) -> HexColor {
        self.sat_val_picker.current_color()
    }
}
