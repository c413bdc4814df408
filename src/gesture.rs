//! Gesture events and the drag state machine shared by both pickers.
//!
//! The host feeds [`GestureEvent`]s in temporal order. Each picker runs them
//! through a gesture tracker, which owns the picker's value and its
//! [`DragSession`] anchor, and reports the result as a [`PickerUpdate`].
//! Hosts that want per-phase callbacks implement [`PickerHandler`] and call
//! [`PickerUpdate::dispatch`].

use crate::types::{DeltaMode, Point};

/// Pointer travel reported with a drag event, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DragDelta {
    pub dx: f32,
    pub dy: f32,
}

impl DragDelta {
    /// Creates a drag delta.
    #[inline]
    pub const fn new(dx: f32, dy: f32) -> Self {
        Self { dx, dy }
    }

    /// Whether both components are finite numbers.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.dx.is_finite() && self.dy.is_finite()
    }
}

/// Phase tag of a gesture event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GesturePhase {
    Start,
    Move,
    End,
    Terminate,
    Tap,
}

/// A single input event delivered by the host's gesture recognizer.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GestureEvent {
    /// Pointer went down on the thumb and a drag began.
    DragStart(DragDelta),

    /// Pointer moved during a drag.
    DragMove(DragDelta),

    /// Pointer was released.
    DragEnd(DragDelta),

    /// The host took the pointer away (e.g. another control claimed it).
    DragTerminate(DragDelta),

    /// Tap at a position in the picker's local coordinates.
    Tap(Point),
}

impl GestureEvent {
    /// Returns the phase tag of this event.
    pub fn phase(&self) -> GesturePhase {
        match self {
            GestureEvent::DragStart(_) => GesturePhase::Start,
            GestureEvent::DragMove(_) => GesturePhase::Move,
            GestureEvent::DragEnd(_) => GesturePhase::End,
            GestureEvent::DragTerminate(_) => GesturePhase::Terminate,
            GestureEvent::Tap(_) => GesturePhase::Tap,
        }
    }

    /// Returns true for events that may change a picker's value.
    pub fn is_value_changing(&self) -> bool {
        matches!(self, GestureEvent::DragMove(_) | GestureEvent::Tap(_))
    }
}

/// Drag state of a picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PickerState {
    /// No drag in progress.
    #[default]
    Idle,

    /// A drag is in progress.
    Dragging,
}

/// Anchor used as the base for drag delta computation.
///
/// Created at drag start, reset whenever the picker receives an external
/// value while idle or a tap, refreshed after each move in
/// [`DeltaMode::Incremental`], and settled on the final value when the drag ends.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DragSession<V> {
    anchor: V,
}

impl<V: Copy> DragSession<V> {
    /// Creates a session anchored at `anchor`.
    #[inline]
    pub fn new(anchor: V) -> Self {
        Self { anchor }
    }

    /// Returns the current anchor.
    #[inline]
    pub fn anchor(&self) -> V {
        self.anchor
    }

    fn reanchor(&mut self, anchor: V) {
        self.anchor = anchor;
    }
}

/// Result of feeding one event to a picker.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PickerUpdate<V> {
    /// The picker's value after the event.
    pub value: V,

    /// The raw event, for host-level pass-through.
    pub event: GestureEvent,
}

impl<V: Copy> PickerUpdate<V> {
    /// Phase of the event that produced this update.
    #[inline]
    pub fn phase(&self) -> GesturePhase {
        self.event.phase()
    }

    /// Invokes the handler method designated for this update's phase.
    pub fn dispatch<H: PickerHandler<V> + ?Sized>(&self, handler: &mut H) {
        match self.event {
            GestureEvent::DragStart(delta) => handler.on_drag_start(self.value, delta),
            GestureEvent::DragMove(delta) => handler.on_drag_move(self.value, delta),
            GestureEvent::DragEnd(delta) => handler.on_drag_end(self.value, delta),
            GestureEvent::DragTerminate(delta) => handler.on_drag_terminate(self.value, delta),
            GestureEvent::Tap(location) => handler.on_press(self.value, location),
        }
    }
}

/// Host callbacks for a picker, one per gesture phase.
///
/// Every method receives the freshly computed value and the raw gesture
/// payload. All methods default to doing nothing, so implementors only
/// override the phases they care about.
pub trait PickerHandler<V> {
    /// A drag started.
    fn on_drag_start(&mut self, _value: V, _delta: DragDelta) {}

    /// The pointer moved during a drag.
    fn on_drag_move(&mut self, _value: V, _delta: DragDelta) {}

    /// The drag ended normally.
    fn on_drag_end(&mut self, _value: V, _delta: DragDelta) {}

    /// The drag was interrupted by the host.
    fn on_drag_terminate(&mut self, _value: V, _delta: DragDelta) {}

    /// The picker was tapped.
    fn on_press(&mut self, _value: V, _location: Point) {}
}

/// Drag state machine holding a picker's value and anchor.
///
/// Generic over the value a picker owns; the picker supplies the press and
/// drag mappings.
#[derive(Debug, Clone, Copy)]
pub(crate) struct GestureTracker<V> {
    state: PickerState,
    value: V,
    session: DragSession<V>,
    mode: DeltaMode,
}

impl<V: Copy> GestureTracker<V> {
    pub(crate) fn new(value: V, mode: DeltaMode) -> Self {
        Self {
            state: PickerState::Idle,
            value,
            session: DragSession::new(value),
            mode,
        }
    }

    pub(crate) fn value(&self) -> V {
        self.value
    }

    pub(crate) fn state(&self) -> PickerState {
        self.state
    }

    pub(crate) fn session(&self) -> &DragSession<V> {
        &self.session
    }

    /// Applies a value pushed from outside.
    ///
    /// While idle the anchor follows it; during a drag the gesture keeps its anchor.
    pub(crate) fn set_value(&mut self, value: V) {
        self.value = value;
        if self.state == PickerState::Idle {
            self.session.reanchor(value);
        }
    }

    /// Runs one event through the state machine and returns the resulting value.
    pub(crate) fn handle<P, D>(&mut self, event: GestureEvent, press: P, drag: D) -> V
    where
        P: FnOnce(Point) -> V,
        D: FnOnce(V, DragDelta) -> V,
    {
        match event {
            GestureEvent::Tap(location) => {
                self.value = press(location);
                self.session.reanchor(self.value);
            }
            GestureEvent::DragStart(_) => {
                self.begin();
            }
            GestureEvent::DragMove(delta) if !delta.is_finite() => {}
            GestureEvent::DragMove(delta) => {
                if self.state == PickerState::Idle {
                    // Move without start: begin implicitly from the stored value.
                    self.begin();
                }
                self.value = drag(self.session.anchor(), delta);
                if self.mode == DeltaMode::Incremental {
                    self.session.reanchor(self.value);
                }
            }
            GestureEvent::DragEnd(_) | GestureEvent::DragTerminate(_) => {
                self.state = PickerState::Idle;
                self.session.reanchor(self.value);
            }
        }
        self.value
    }

    fn begin(&mut self) {
        self.state = PickerState::Dragging;
        self.session.reanchor(self.value);
    }
}
