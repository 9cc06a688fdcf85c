//! Host-supplied gates and tuning for the drag animator.

use crate::coalesce::pointer_interval_ms;
use crate::spring::SpringParams;

/// Slowest supported animation speed multiplier.
pub const MIN_SPEED: f32 = 0.1;

/// Fastest supported animation speed multiplier.
pub const MAX_SPEED: f32 = 2.0;

/// Default speed multiplier (half of reference speed).
pub const DEFAULT_SPEED: f32 = 0.5;

/// Default marker opacity while tracking.
pub const DEFAULT_MARKER_OPACITY: f32 = 0.5;

/// Boolean gates checked before any drag input is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DropGates {
    pub disabled: bool,
    pub readonly: bool,
    pub drop_enabled: bool,
    pub editing: bool,
}

impl DropGates {
    /// Gates that accept input.
    pub const OPEN: DropGates = DropGates {
        disabled: false,
        readonly: false,
        drop_enabled: true,
        editing: false,
    };

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn readonly(mut self, readonly: bool) -> Self {
        self.readonly = readonly;
        self
    }

    pub fn drop_enabled(mut self, drop_enabled: bool) -> Self {
        self.drop_enabled = drop_enabled;
        self
    }

    pub fn editing(mut self, editing: bool) -> Self {
        self.editing = editing;
        self
    }

    /// True if no gate blocks drag input.
    #[inline]
    pub fn accepts_input(&self) -> bool {
        !self.disabled && !self.readonly && self.drop_enabled && !self.editing
    }
}

impl Default for DropGates {
    fn default() -> Self {
        Self::OPEN
    }
}

/// Numeric tuning for the marker animation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationConfig {
    speed: f32,
    marker_opacity: f32,
}

impl AnimationConfig {
    pub fn new(speed: f32, marker_opacity: f32) -> Self {
        Self::default().with_speed(speed).with_marker_opacity(marker_opacity)
    }

    /// Set the speed multiplier, clamped to [`MIN_SPEED`]..=[`MAX_SPEED`].
    pub fn with_speed(mut self, speed: f32) -> Self {
        self.speed = if speed.is_finite() {
            let clamped = speed.clamp(MIN_SPEED, MAX_SPEED);
            if clamped != speed {
                tracing::warn!(speed, clamped, "animation speed out of range");
            }
            clamped
        } else {
            tracing::warn!(speed, "non-finite animation speed, using default");
            DEFAULT_SPEED
        };
        self
    }

    /// Set the marker's tracking opacity, clamped to `[0, 1]`.
    pub fn with_marker_opacity(mut self, opacity: f32) -> Self {
        self.marker_opacity = if opacity.is_finite() {
            opacity.clamp(0.0, 1.0)
        } else {
            tracing::warn!(opacity, "non-finite marker opacity, using default");
            DEFAULT_MARKER_OPACITY
        };
        self
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn marker_opacity(&self) -> f32 {
        self.marker_opacity
    }

    pub fn spring_params(&self) -> SpringParams {
        SpringParams::for_speed(self.speed)
    }

    pub fn pointer_interval_ms(&self) -> u64 {
        pointer_interval_ms(self.speed)
    }
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            speed: DEFAULT_SPEED,
            marker_opacity: DEFAULT_MARKER_OPACITY,
        }
    }
}
