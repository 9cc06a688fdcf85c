//! The visual marker and the cosmetic transitions played on it.
//!
//! Transitions are fire-and-forget: they only drive scale and opacity. The
//! spring loop owns the marker position, except for the snap on drop.

use crate::easing::EasingFunction;
use crate::tween::Tween;
use glam::Vec2;

/// Entry pulse length at speed 1.0, in milliseconds.
pub const ENTRY_PULSE_MS: f32 = 150.0;

/// Scale the marker pulses in from.
pub const ENTRY_PULSE_SCALE: f32 = 0.6;

/// Exit fade length at speed 1.0, in milliseconds.
pub const EXIT_FADE_MS: f32 = 200.0;

/// First release stage (pop) length at speed 1.0, in milliseconds.
pub const RELEASE_POP_MS: f32 = 200.0;

/// Second release stage (burst) length at speed 1.0, in milliseconds.
pub const RELEASE_BURST_MS: f32 = 600.0;

/// Scale reached at the end of the pop stage.
pub const RELEASE_POP_SCALE: f32 = 1.5;

/// Scale reached at the end of the burst.
pub const RELEASE_BURST_SCALE: f32 = 32.0;

/// What the host should render for the marker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerVisual {
    /// Center in drop-target local coordinates.
    pub position: Vec2,
    pub scale: f32,
    pub opacity: f32,
}

impl MarkerVisual {
    pub const HIDDEN: MarkerVisual = MarkerVisual {
        position: Vec2::ZERO,
        scale: 1.0,
        opacity: 0.0,
    };

    pub fn is_visible(&self) -> bool {
        self.opacity > 0.0
    }
}

impl Default for MarkerVisual {
    fn default() -> Self {
        Self::HIDDEN
    }
}

/// The element the animation drives. Optional: without one, the animator
/// still keeps its bookkeeping but skips every cosmetic transition.
pub trait Marker {
    fn apply(&mut self, visual: &MarkerVisual);
}

impl<F> Marker for F
where
    F: FnMut(&MarkerVisual),
{
    fn apply(&mut self, visual: &MarkerVisual) {
        self(visual)
    }
}

/// Which cosmetic sequence is playing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransitionKind {
    EntryPulse,
    Exit,
    Release,
}

/// One stage of a transition: scale and opacity tweened side by side.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionStage {
    pub scale: Tween,
    pub opacity: Tween,
}

impl TransitionStage {
    pub fn duration_ms(&self) -> f32 {
        self.scale.duration_ms().max(self.opacity.duration_ms())
    }
}

/// Scale and opacity at a point in time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionSample {
    pub scale: f32,
    pub opacity: f32,
    pub finished: bool,
}

/// A sequence of stages started at a fixed time.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerTransition {
    kind: TransitionKind,
    start_ms: u64,
    stages: Vec<TransitionStage>,
}

impl MarkerTransition {
    pub fn new(kind: TransitionKind, start_ms: u64, stages: Vec<TransitionStage>) -> Self {
        Self {
            kind,
            start_ms,
            stages,
        }
    }

    /// Fade and scale the marker in at the start of a session.
    pub fn entry_pulse(start_ms: u64, speed: f32, opacity: f32) -> Self {
        let duration = ENTRY_PULSE_MS / speed;
        Self::new(
            TransitionKind::EntryPulse,
            start_ms,
            vec![TransitionStage {
                scale: Tween::new(ENTRY_PULSE_SCALE, 1.0, duration).easing(EasingFunction::QuadOut),
                opacity: Tween::new(0.0, opacity, duration).easing(EasingFunction::QuadOut),
            }],
        )
    }

    /// Fade and shrink the marker out after the pointer leaves.
    pub fn exit(start_ms: u64, speed: f32, from: &MarkerVisual) -> Self {
        let duration = EXIT_FADE_MS / speed;
        Self::new(
            TransitionKind::Exit,
            start_ms,
            vec![TransitionStage {
                scale: Tween::new(from.scale, from.scale * 0.5, duration)
                    .easing(EasingFunction::CubicOut),
                opacity: Tween::new(from.opacity, 0.0, duration).easing(EasingFunction::CubicOut),
            }],
        )
    }

    /// Pop then burst outward while fading to transparent.
    ///
    /// Scale never decreases and opacity never increases across both stages.
    pub fn release(start_ms: u64, speed: f32, from_scale: f32, opacity: f32) -> Self {
        let pop = RELEASE_POP_MS / speed;
        let burst = RELEASE_BURST_MS / speed;
        let from_scale = from_scale.min(RELEASE_POP_SCALE);

        Self::new(
            TransitionKind::Release,
            start_ms,
            vec![
                TransitionStage {
                    scale: Tween::new(from_scale, RELEASE_POP_SCALE, pop)
                        .easing(EasingFunction::CubicIn),
                    opacity: Tween::hold(opacity, pop),
                },
                TransitionStage {
                    scale: Tween::new(RELEASE_POP_SCALE, RELEASE_BURST_SCALE, burst)
                        .easing(EasingFunction::QuartOut),
                    opacity: Tween::new(opacity, 0.0, burst).easing(EasingFunction::QuartOut),
                },
            ],
        )
    }

    pub fn kind(&self) -> TransitionKind {
        self.kind
    }

    pub fn start_ms(&self) -> u64 {
        self.start_ms
    }

    pub fn total_duration_ms(&self) -> f32 {
        self.stages.iter().map(TransitionStage::duration_ms).sum()
    }

    /// Sample the transition at `now_ms`.
    pub fn sample(&self, now_ms: u64) -> TransitionSample {
        let mut elapsed = now_ms.saturating_sub(self.start_ms) as f32;

        for stage in &self.stages {
            let duration = stage.duration_ms();
            if elapsed < duration {
                return TransitionSample {
                    scale: stage.scale.value_at(elapsed),
                    opacity: stage.opacity.value_at(elapsed),
                    finished: false,
                };
            }
            elapsed -= duration;
        }

        match self.stages.last() {
            Some(last) => TransitionSample {
                scale: last.scale.to_value(),
                opacity: last.opacity.to_value(),
                finished: true,
            },
            None => TransitionSample {
                scale: 1.0,
                opacity: 0.0,
                finished: true,
            },
        }
    }
}
