//! Discrete damped spring chasing a low-pass-filtered target.
//!
//! One call to [`SpringFollower::step`] is one display frame. The update is
//! frame-rate dependent on purpose; hosts run it close to 60 Hz.

use glam::Vec2;

/// Spring pull at speed multiplier 1.0.
pub const BASE_SPRING_STRENGTH: f32 = 0.08;

/// Velocity retention at speed multiplier 1.0.
pub const BASE_DAMPING: f32 = 0.35;

/// How much velocity retention grows per unit of speed below 1.0.
pub const DAMPING_SLOPE: f32 = 0.1;

/// Per-frame smoothing factor applied to the raw pointer target.
pub const TARGET_SMOOTHING: f32 = 0.3;

/// Coefficients for one spring step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringParams {
    /// Fraction of the displacement added to velocity each frame.
    pub strength: f32,
    /// Fraction of velocity carried into the next frame.
    pub damping: f32,
    /// Fraction of the target gap closed by the smoothed attractor each frame.
    pub smoothing: f32,
}

impl SpringParams {
    /// Derive coefficients from an animation speed multiplier.
    ///
    /// Lower speeds pull more weakly and keep more velocity, which reads as a
    /// slower, floatier chase.
    pub fn for_speed(speed: f32) -> Self {
        Self {
            strength: BASE_SPRING_STRENGTH * speed,
            damping: BASE_DAMPING + (1.0 - speed) * DAMPING_SLOPE,
            smoothing: TARGET_SMOOTHING,
        }
    }
}

impl Default for SpringParams {
    fn default() -> Self {
        Self::for_speed(1.0)
    }
}

/// Spring body: rendered position, velocity, and the attractor it chases.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SpringFollower {
    /// Current rendered position.
    pub position: Vec2,
    /// Velocity carried across frames.
    pub velocity: Vec2,
    /// Raw pointer target.
    pub target: Vec2,
    /// Low-pass-filtered target used as the attractor.
    pub smoothed_target: Vec2,
}

impl SpringFollower {
    /// Start a fresh chase from `position` toward `target`, at rest.
    pub fn launch(position: Vec2, target: Vec2) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
            target,
            smoothed_target: target,
        }
    }

    /// Set the raw pointer target; the attractor catches up over the next frames.
    pub fn set_target(&mut self, target: Vec2) {
        self.target = target;
    }

    /// Place everything at `point` and stop moving.
    pub fn snap_to(&mut self, point: Vec2) {
        *self = Self::launch(point, point);
    }

    /// Attractor minus position.
    pub fn displacement(&self) -> Vec2 {
        self.smoothed_target - self.position
    }

    /// Advance one frame.
    pub fn step(&mut self, params: &SpringParams) {
        self.smoothed_target += (self.target - self.smoothed_target) * params.smoothing;

        let displacement = self.smoothed_target - self.position;
        self.velocity = self.velocity * params.damping + displacement * params.strength;
        self.position += self.velocity;
    }
}
