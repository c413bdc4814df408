//! Shared test infrastructure for hsv-picker integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use hsv_picker::{
    ColorListener, DragDelta, GestureEvent, GesturePhase, HsvColor, PickerHandler, Point,
};

// ============================================================================
// Mock Listener
// ============================================================================

/// Mock listener that records every emitted color
pub struct MockListener {
    colors: Vec<String>,
}

impl MockListener {
    pub fn new() -> Self {
        Self { colors: Vec::new() }
    }

    pub fn last_color(&self) -> Option<&str> {
        self.colors.last().map(String::as_str)
    }

    pub fn color_history(&self) -> &[String] {
        &self.colors
    }

    pub fn emission_count(&self) -> usize {
        self.colors.len()
    }
}

impl ColorListener for MockListener {
    fn on_color_change(&mut self, color: &str) {
        self.colors.push(color.to_string());
    }
}

// ============================================================================
// Mock Handler
// ============================================================================

/// Mock per-phase handler that records which callback fired with which value
pub struct MockHandler<V> {
    calls: Vec<(GesturePhase, V)>,
}

impl<V: Copy> MockHandler<V> {
    pub fn new() -> Self {
        Self { calls: Vec::new() }
    }

    pub fn calls(&self) -> &[(GesturePhase, V)] {
        &self.calls
    }

    pub fn phases(&self) -> Vec<GesturePhase> {
        self.calls.iter().map(|(phase, _)| *phase).collect()
    }
}

impl<V: Copy> PickerHandler<V> for MockHandler<V> {
    fn on_drag_start(&mut self, value: V, _delta: DragDelta) {
        self.calls.push((GesturePhase::Start, value));
    }

    fn on_drag_move(&mut self, value: V, _delta: DragDelta) {
        self.calls.push((GesturePhase::Move, value));
    }

    fn on_drag_end(&mut self, value: V, _delta: DragDelta) {
        self.calls.push((GesturePhase::End, value));
    }

    fn on_drag_terminate(&mut self, value: V, _delta: DragDelta) {
        self.calls.push((GesturePhase::Terminate, value));
    }

    fn on_press(&mut self, value: V, _location: Point) {
        self.calls.push((GesturePhase::Tap, value));
    }
}

// ============================================================================
// Gesture Helpers
// ============================================================================

pub fn start() -> GestureEvent {
    GestureEvent::DragStart(DragDelta::default())
}

pub fn drag(dx: f32, dy: f32) -> GestureEvent {
    GestureEvent::DragMove(DragDelta::new(dx, dy))
}

pub fn end(dx: f32, dy: f32) -> GestureEvent {
    GestureEvent::DragEnd(DragDelta::new(dx, dy))
}

pub fn terminate(dx: f32, dy: f32) -> GestureEvent {
    GestureEvent::DragTerminate(DragDelta::new(dx, dy))
}

pub fn tap(x: f32, y: f32) -> GestureEvent {
    GestureEvent::Tap(Point::new(x, y))
}

// ============================================================================
// Test Helper Functions
// ============================================================================

/// Compare two floats with tolerance
pub fn approx_eq(a: f32, b: f32, epsilon: f32) -> bool {
    (a - b).abs() < epsilon
}

/// Compare two HSV colors; hue tolerance is in degrees
pub fn hsv_equal(a: HsvColor, b: HsvColor) -> bool {
    approx_eq(a.hue, b.hue, 0.5)
        && approx_eq(a.saturation, b.saturation, 0.01)
        && approx_eq(a.value, b.value, 0.01)
}
