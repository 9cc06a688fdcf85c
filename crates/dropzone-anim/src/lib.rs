//! Dropzone Anim - the drag marker animation engine
//!
//! A marker follows the pointer across a drop target with a damped spring,
//! enters from the nearest edge, and bursts outward on drop:
//! - Entry-edge placement on the first event of a session
//! - Rate-limited drag-over and coalesced pointer-move input
//! - Per-frame spring loop chasing a smoothed target
//! - Entry pulse, exit fade and release burst transitions
//! - An explicit phase machine and change flags for the host to observe
//!
//! The crate never talks to a real display: the host supplies a
//! [`FrameScheduler`], a [`DropTarget`] and optionally a [`Marker`], then binds
//! the `on_*` handlers of [`DragAnimator`] to its native events.

pub mod animator;
pub mod changes;
pub mod coalesce;
pub mod config;
pub mod easing;
pub mod edge;
pub mod marker;
pub mod phase;
pub mod scheduler;
pub mod spring;
pub mod state;
pub mod target;
pub mod tween;

pub use animator::{DRAG_EVENT_INTERVAL_MS, DragAnimator};
pub use changes::StateChanges;
pub use coalesce::{PendingPointer, PointerCoalescer};
pub use config::{AnimationConfig, DropGates};
pub use easing::EasingFunction;
pub use edge::{ENTRY_OFFSET, Edge};
pub use marker::{Marker, MarkerTransition, MarkerVisual, TransitionKind};
pub use phase::DragPhase;
pub use scheduler::{FrameHandle, FrameScheduler, ManualScheduler};
pub use spring::{SpringFollower, SpringParams};
pub use state::{ActiveTransition, DragAnimationState};
pub use target::DropTarget;
pub use tween::Tween;

pub use glam::Vec2;
