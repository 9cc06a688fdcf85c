//! Easing curves for marker transitions.
//!
//! Every curve maps `[0, 1]` onto `[0, 1]` monotonically, so a transition
//! built from them never overshoots its end value.

/// Easing functions for marker transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EasingFunction {
    /// Linear interpolation
    #[default]
    Linear,
    /// Quadratic ease out
    QuadOut,
    /// Cubic ease in
    CubicIn,
    /// Cubic ease out
    CubicOut,
    /// Quartic ease out
    QuartOut,
}

impl EasingFunction {
    /// Apply the easing function to a normalized time value (0.0 to 1.0).
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);

        match self {
            EasingFunction::Linear => t,
            EasingFunction::QuadOut => t * (2.0 - t),
            EasingFunction::CubicIn => t * t * t,
            EasingFunction::CubicOut => {
                let t = t - 1.0;
                t * t * t + 1.0
            }
            EasingFunction::QuartOut => {
                let t = t - 1.0;
                1.0 - t * t * t * t
            }
        }
    }
}
