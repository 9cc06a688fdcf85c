//! Single-value tweens measured in milliseconds.

use crate::easing::EasingFunction;

/// Interpolates one scalar from `from` to `to` over `duration_ms`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    from: f32,
    to: f32,
    duration_ms: f32,
    easing: EasingFunction,
}

impl Tween {
    /// Create a linear tween lasting `duration_ms`.
    pub fn new(from: f32, to: f32, duration_ms: f32) -> Self {
        Self {
            from,
            to,
            duration_ms: duration_ms.max(0.0),
            easing: EasingFunction::Linear,
        }
    }

    /// A tween that holds `value` for `duration_ms`.
    pub fn hold(value: f32, duration_ms: f32) -> Self {
        Self::new(value, value, duration_ms)
    }

    /// Set the easing function.
    pub fn easing(mut self, easing: EasingFunction) -> Self {
        self.easing = easing;
        self
    }

    pub fn from_value(&self) -> f32 {
        self.from
    }

    pub fn to_value(&self) -> f32 {
        self.to
    }

    pub fn duration_ms(&self) -> f32 {
        self.duration_ms
    }

    /// Normalized progress after `elapsed_ms`, clamped to `[0, 1]`.
    pub fn progress(&self, elapsed_ms: f32) -> f32 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        (elapsed_ms / self.duration_ms).clamp(0.0, 1.0)
    }

    /// Value after `elapsed_ms`.
    pub fn value_at(&self, elapsed_ms: f32) -> f32 {
        let eased = self.easing.apply(self.progress(elapsed_ms));
        self.from + (self.to - self.from) * eased
    }

    pub fn is_complete(&self, elapsed_ms: f32) -> bool {
        elapsed_ms >= self.duration_ms
    }
}
