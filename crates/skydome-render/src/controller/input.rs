//! Raw pointer and wheel state fed by host events.
//!
//! Event handlers and the frame tick run on the same thread, so the state
//! is a plain record: every event overwrites it and the tick reads whatever
//! was written last.

use skydome_config::schema::ControllerConfig;

/// A pointer position in window pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerSample {
    pub x: f32,
    pub y: f32,
}

/// Latest raw input seen by the host.
#[derive(Debug, Clone, PartialEq)]
pub struct InputState {
    pointer: Option<PointerSample>,
    first_pointer: Option<PointerSample>,
    wheel: f32,
    wheel_min: f32,
    wheel_max: f32,
}

impl InputState {
    /// Empty input with the wheel accumulator bounded to `[wheel_min, wheel_max]`.
    ///
    /// Reversed bounds are swapped and a NaN bound leaves that side open.
    pub fn new(wheel_min: f32, wheel_max: f32) -> Self {
        let lo = if wheel_min.is_nan() { f32::NEG_INFINITY } else { wheel_min };
        let hi = if wheel_max.is_nan() { f32::INFINITY } else { wheel_max };
        let (wheel_min, wheel_max) = if lo <= hi { (lo, hi) } else { (hi, lo) };
        Self {
            pointer: None,
            first_pointer: None,
            wheel: 0.0_f32.clamp(wheel_min, wheel_max),
            wheel_min,
            wheel_max,
        }
    }

    pub fn from_config(config: &ControllerConfig) -> Self {
        Self::new(config.wheel_min as f32, config.wheel_max as f32)
    }

    /// Record a pointer (mouse or touch) move.
    pub fn on_pointer_move(&mut self, x: f32, y: f32) {
        let sample = PointerSample { x, y };
        self.pointer = Some(sample);
        if self.first_pointer.is_none() {
            self.first_pointer = Some(sample);
        }
    }

    /// Accumulate a wheel delta, clamped to the configured range.
    pub fn on_wheel(&mut self, delta: f32) {
        if !delta.is_finite() {
            return;
        }
        self.wheel = (self.wheel + delta).clamp(self.wheel_min, self.wheel_max);
    }

    /// Most recent pointer position, if the pointer has moved at all.
    pub fn pointer(&self) -> Option<PointerSample> {
        self.pointer
    }

    /// First pointer position of the session.
    pub fn first_pointer(&self) -> Option<PointerSample> {
        self.first_pointer
    }

    pub fn wheel(&self) -> f32 {
        self.wheel
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::from_config(&ControllerConfig::default())
    }
}
