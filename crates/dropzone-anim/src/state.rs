//! The single mutable state object behind one drop target.

use crate::changes::StateChanges;
use crate::coalesce::{PendingPointer, PointerCoalescer};
use crate::marker::{MarkerTransition, MarkerVisual, TransitionKind};
use crate::phase::DragPhase;
use crate::scheduler::FrameHandle;
use crate::spring::SpringFollower;
use glam::Vec2;
use static_assertions::assert_impl_all;

/// A marker transition together with the frame it is waiting on.
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveTransition {
    pub transition: MarkerTransition,
    pub handle: FrameHandle,
}

/// Drag animation state, created once per widget and reused across sessions.
///
/// Only [`DragAnimator`](crate::animator::DragAnimator) mutates it; everyone
/// else reads it to render.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DragAnimationState {
    pub(crate) is_dragging: bool,
    pub(crate) is_animating: bool,
    pub(crate) spring: SpringFollower,
    pub(crate) last_event_ms: u64,
    pub(crate) animation_handle: Option<FrameHandle>,
    pub(crate) phase: DragPhase,
    pub(crate) visual: MarkerVisual,
    pub(crate) pointer: PointerCoalescer,
    pub(crate) transition: Option<ActiveTransition>,
    pub(crate) changes: StateChanges,
}

assert_impl_all!(DragAnimationState: Clone, PartialEq, Default, Send, Sync);

impl DragAnimationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// True from the first accepted drag-enter until the session closes.
    pub fn is_dragging(&self) -> bool {
        self.is_dragging
    }

    /// True while the spring loop has a frame scheduled.
    pub fn is_animating(&self) -> bool {
        self.is_animating
    }

    pub fn marker(&self) -> Vec2 {
        self.spring.position
    }

    pub fn target(&self) -> Vec2 {
        self.spring.target
    }

    pub fn smoothed_target(&self) -> Vec2 {
        self.spring.smoothed_target
    }

    pub fn velocity(&self) -> Vec2 {
        self.spring.velocity
    }

    pub fn last_event_ms(&self) -> u64 {
        self.last_event_ms
    }

    /// The spring loop's scheduled frame, if any.
    pub fn animation_handle(&self) -> Option<FrameHandle> {
        self.animation_handle
    }

    pub fn phase(&self) -> DragPhase {
        self.phase
    }

    pub fn visual(&self) -> &MarkerVisual {
        &self.visual
    }

    pub fn pending_pointer(&self) -> Option<&PendingPointer> {
        self.pointer.pending()
    }

    pub fn transition(&self) -> Option<&ActiveTransition> {
        self.transition.as_ref()
    }

    pub fn transition_kind(&self) -> Option<TransitionKind> {
        self.transition.as_ref().map(|active| active.transition.kind())
    }

    /// Changes accumulated since the host last drained them.
    pub fn changes(&self) -> StateChanges {
        self.changes
    }
}
