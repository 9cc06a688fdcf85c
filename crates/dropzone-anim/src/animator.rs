//! The drag animation core.
//!
//! [`DragAnimator`] owns the [`DragAnimationState`] for one drop target and
//! exposes the handlers a host binds to its native drag and pointer events.
//! Everything it animates is expressed as frames requested from a
//! [`FrameScheduler`]: one for the spring loop, one for whichever marker
//! transition is playing. Nothing blocks.
//!
//! # Example
//!
//! ```
//! use dropzone_anim::{DragAnimator, ManualScheduler};
//! use dropzone_core::geometry::Size;
//! use glam::Vec2;
//!
//! let mut animator = DragAnimator::new(ManualScheduler::new())
//!     .with_drop_target(Size::new(200.0_f32, 100.0));
//!
//! animator.on_drag_enter(Vec2::new(10.0, 50.0), 0);
//! assert!(animator.is_dragging());
//! assert_eq!(animator.marker_position(), Vec2::new(-120.0, 50.0));
//!
//! // Host refresh loop
//! animator.pump(16);
//! assert!(animator.marker_position().x > -120.0);
//!
//! assert!(animator.on_drop(Vec2::new(40.0, 50.0), 32));
//! assert!(!animator.is_dragging());
//! ```

use crate::changes::StateChanges;
use crate::config::{AnimationConfig, DropGates};
use crate::edge::entry_position;
use crate::marker::{Marker, MarkerTransition, MarkerVisual, TransitionKind};
use crate::phase::DragPhase;
use crate::scheduler::{FrameHandle, FrameScheduler, ManualScheduler};
use crate::spring::SpringFollower;
use crate::state::{ActiveTransition, DragAnimationState};
use crate::target::DropTarget;
use dropzone_core::geometry::Size;
use dropzone_core::profiling::profile_function;
use glam::Vec2;

/// Minimum spacing between accepted drag-enter/over events (~60 Hz).
pub const DRAG_EVENT_INTERVAL_MS: u64 = 16;

/// Drives the marker for one drop target.
pub struct DragAnimator<S: FrameScheduler = ManualScheduler> {
    state: DragAnimationState,
    gates: DropGates,
    config: AnimationConfig,
    scheduler: S,
    target: Option<Box<dyn DropTarget>>,
    marker: Option<Box<dyn Marker>>,
}

impl<S: FrameScheduler> DragAnimator<S> {
    /// Create an animator with open gates, default tuning, and no target or marker.
    pub fn new(scheduler: S) -> Self {
        Self {
            state: DragAnimationState::new(),
            gates: DropGates::default(),
            config: AnimationConfig::default(),
            scheduler,
            target: None,
            marker: None,
        }
    }

    pub fn with_drop_target(mut self, target: impl DropTarget + 'static) -> Self {
        self.target = Some(Box::new(target));
        self
    }

    pub fn with_marker(mut self, marker: impl Marker + 'static) -> Self {
        self.marker = Some(Box::new(marker));
        self
    }

    pub fn with_gates(mut self, gates: DropGates) -> Self {
        self.gates = gates;
        self
    }

    pub fn with_config(mut self, config: AnimationConfig) -> Self {
        self.config = config;
        self
    }

    pub fn set_drop_target(&mut self, target: Option<Box<dyn DropTarget>>) {
        self.target = target;
    }

    pub fn set_marker(&mut self, marker: Option<Box<dyn Marker>>) {
        self.marker = marker;
    }

    /// Replace the gates. Closing a gate mid-session tears the session down so
    /// no frame keeps running behind a disabled widget.
    pub fn set_gates(&mut self, gates: DropGates) {
        self.gates = gates;
        if !gates.accepts_input() {
            self.teardown();
        }
    }

    /// Replace the tuning. A running spring loop picks it up on its next frame.
    pub fn set_config(&mut self, config: AnimationConfig) {
        self.config = config;
    }

    pub fn state(&self) -> &DragAnimationState {
        &self.state
    }

    pub fn gates(&self) -> DropGates {
        self.gates
    }

    pub fn config(&self) -> AnimationConfig {
        self.config
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    pub fn is_dragging(&self) -> bool {
        self.state.is_dragging
    }

    pub fn is_animating(&self) -> bool {
        self.state.is_animating
    }

    pub fn marker_position(&self) -> Vec2 {
        self.state.spring.position
    }

    pub fn target_position(&self) -> Vec2 {
        self.state.spring.target
    }

    pub fn visual(&self) -> &MarkerVisual {
        &self.state.visual
    }

    pub fn phase(&self) -> DragPhase {
        self.state.phase
    }

    /// Drain the change flags accumulated since the last call.
    pub fn take_changes(&mut self) -> StateChanges {
        std::mem::take(&mut self.state.changes)
    }

    /// Drag entered or moved over the target. `pointer` is in target-local space.
    pub fn on_drag_enter(&mut self, pointer: Vec2, now_ms: u64) {
        if self.input_blocked("drag_enter") {
            return;
        }
        let Some(extent) = self.extent() else {
            tracing::trace!("drag_enter without a mounted drop target");
            return;
        };

        if self.state.phase.is_closing() {
            self.supersede_closing();
        }

        if !self.state.is_dragging {
            self.state.last_event_ms = now_ms;
            self.begin_session(pointer, extent, now_ms);
            return;
        }

        let elapsed = now_ms.saturating_sub(self.state.last_event_ms);
        if elapsed < DRAG_EVENT_INTERVAL_MS {
            tracing::trace!(elapsed, "drag_enter rate limited");
            return;
        }

        self.state.last_event_ms = now_ms;
        self.state.spring.set_target(pointer);
        self.state.changes |= StateChanges::TARGET;
    }

    /// Drag left the target. Leaving into one of the target's own children is
    /// not a leave.
    pub fn on_drag_leave(&mut self, related_is_descendant: bool, now_ms: u64) {
        if self.input_blocked("drag_leave") {
            return;
        }
        if related_is_descendant {
            tracing::trace!("drag_leave into descendant ignored");
            return;
        }
        if !self.state.phase.is_following() {
            return;
        }

        self.cancel_loop();
        self.cancel_transition();
        self.state.pointer.clear();
        self.set_dragging(false);
        tracing::debug!("drag session left");

        if self.marker.is_some() {
            let exit = MarkerTransition::exit(now_ms, self.config.speed(), &self.state.visual);
            self.start_transition(exit);
            self.set_phase(DragPhase::Exiting);
        } else {
            self.state.visual.opacity = 0.0;
            self.state.changes |= StateChanges::VISUAL;
            self.set_phase(DragPhase::Idle);
        }
    }

    /// Files dropped at `pointer`. Returns whether the drop was handled; the
    /// host proceeds with file intake on its own.
    ///
    /// If the drop target unmounted mid-session the session is torn down and
    /// the drop reports `false`.
    pub fn on_drop(&mut self, pointer: Vec2, now_ms: u64) -> bool {
        if self.input_blocked("drop") {
            return false;
        }
        if self.extent().is_none() {
            tracing::debug!("drop without a mounted drop target, ending session");
            self.teardown();
            return false;
        }

        self.cancel_loop();
        self.cancel_transition();
        self.state.pointer.clear();
        self.state.spring.snap_to(pointer);
        self.state.visual.position = pointer;
        self.state.changes |= StateChanges::POSITION | StateChanges::TARGET;
        tracing::debug!(x = pointer.x, y = pointer.y, phase = ?self.state.phase, "drop");

        if self.marker.is_none() {
            self.set_dragging(false);
            self.set_phase(DragPhase::Idle);
            return true;
        }

        let visual = self.state.visual;
        let (from_scale, opacity) = if visual.is_visible() {
            (visual.scale, visual.opacity)
        } else {
            (1.0, self.config.marker_opacity())
        };
        let release = MarkerTransition::release(now_ms, self.config.speed(), from_scale, opacity);
        self.apply_sample(&release, now_ms);

        if self.state.phase == DragPhase::Exiting {
            self.set_phase(DragPhase::Idle);
        }
        self.start_transition(release);
        self.set_phase(DragPhase::Releasing);
        self.push_visual();

        true
    }

    /// Pointer moved during a drag. Applied on a later frame, coalesced.
    pub fn on_pointer_move(&mut self, pointer: Vec2, now_ms: u64) {
        if self.input_blocked("pointer_move") {
            return;
        }
        if !self.state.is_dragging || !self.state.phase.is_following() {
            return;
        }

        self.state.pointer.push(pointer, now_ms);
    }

    /// A frame requested from the scheduler fired.
    ///
    /// Handles that were cancelled or superseded are ignored.
    pub fn on_frame(&mut self, handle: FrameHandle, now_ms: u64) {
        if self.state.animation_handle == Some(handle) {
            self.state.animation_handle = None;
            self.step_spring(now_ms);
        } else if self
            .state
            .transition
            .as_ref()
            .is_some_and(|active| active.handle == handle)
        {
            self.step_transition(now_ms);
        } else {
            tracing::trace!(%handle, "stale frame ignored");
        }
    }

    /// Cancel every scheduled frame and return to idle. Called on unmount.
    pub fn teardown(&mut self) {
        let active = self.state.is_dragging
            || self.state.is_animating
            || self.state.transition.is_some()
            || self.state.phase != DragPhase::Idle;
        if !active {
            return;
        }

        self.cancel_loop();
        self.cancel_transition();
        self.state.pointer.clear();
        self.set_dragging(false);
        self.state.visual.opacity = 0.0;
        self.state.changes |= StateChanges::VISUAL;
        self.set_phase(DragPhase::Idle);
        self.push_visual();
        tracing::debug!("drag animator torn down");
    }

    fn input_blocked(&self, op: &'static str) -> bool {
        if self.gates.accepts_input() {
            return false;
        }
        tracing::trace!(op, gates = ?self.gates, "drag input blocked");
        true
    }

    /// Live extent of the drop target. A zero, negative or NaN size counts
    /// as unmounted.
    fn extent(&self) -> Option<Size<f32>> {
        self.target
            .as_ref()
            .and_then(|target| target.extent())
            .filter(|size| !size.is_degenerate())
    }

    fn begin_session(&mut self, pointer: Vec2, extent: Size<f32>, now_ms: u64) {
        let (edge, start) = entry_position(pointer, extent);

        self.state.spring = SpringFollower::launch(start, pointer);
        self.state.pointer.clear();
        self.state.visual.position = start;
        self.state.changes |= StateChanges::POSITION | StateChanges::TARGET;
        self.set_dragging(true);
        tracing::debug!(?edge, x = pointer.x, y = pointer.y, "drag session started");

        if self.marker.is_some() {
            let pulse = MarkerTransition::entry_pulse(
                now_ms,
                self.config.speed(),
                self.config.marker_opacity(),
            );
            self.apply_sample(&pulse, now_ms);
            self.start_transition(pulse);
            self.set_phase(DragPhase::Entering);
        } else {
            self.state.visual.scale = 1.0;
            self.state.visual.opacity = self.config.marker_opacity();
            self.state.changes |= StateChanges::VISUAL;
            self.set_phase(DragPhase::Tracking);
        }

        self.push_visual();
        self.start_loop();
    }

    /// End a closing release or exit so a new session can start cleanly.
    fn supersede_closing(&mut self) {
        tracing::debug!(phase = ?self.state.phase, "superseding closing transition");
        self.cancel_transition();
        self.set_dragging(false);
        self.set_phase(DragPhase::Idle);
    }

    fn start_loop(&mut self) {
        if self.state.is_animating {
            return;
        }
        self.state.is_animating = true;
        self.state.animation_handle = Some(self.scheduler.request_frame());
    }

    fn cancel_loop(&mut self) {
        if let Some(handle) = self.state.animation_handle.take() {
            self.scheduler.cancel_frame(handle);
        }
        self.state.is_animating = false;
    }

    fn start_transition(&mut self, transition: MarkerTransition) {
        self.cancel_transition();
        let handle = self.scheduler.request_frame();
        self.state.transition = Some(ActiveTransition { transition, handle });
    }

    fn cancel_transition(&mut self) {
        if let Some(active) = self.state.transition.take() {
            tracing::trace!(kind = ?active.transition.kind(), "transition cancelled");
            self.scheduler.cancel_frame(active.handle);
        }
    }

    fn step_spring(&mut self, now_ms: u64) {
        profile_function!();

        if !self.state.is_dragging {
            self.state.is_animating = false;
            tracing::trace!("spring loop stopped");
            return;
        }

        if let Some(pointer) = self
            .state
            .pointer
            .take_ready(now_ms, self.config.pointer_interval_ms())
        {
            self.state.spring.set_target(pointer);
            self.state.changes |= StateChanges::TARGET;
        }

        self.state.spring.step(&self.config.spring_params());
        self.state.visual.position = self.state.spring.position;
        self.state.changes |= StateChanges::POSITION;
        self.push_visual();

        self.state.animation_handle = Some(self.scheduler.request_frame());
    }

    fn step_transition(&mut self, now_ms: u64) {
        let Some(active) = self.state.transition.as_ref() else {
            return;
        };
        let kind = active.transition.kind();
        let sample = active.transition.sample(now_ms);

        self.state.visual.scale = sample.scale;
        self.state.visual.opacity = sample.opacity;
        self.state.changes |= StateChanges::VISUAL;
        self.push_visual();

        if sample.finished {
            self.state.transition = None;
            self.finish_transition(kind);
        } else {
            let handle = self.scheduler.request_frame();
            if let Some(active) = self.state.transition.as_mut() {
                active.handle = handle;
            }
        }
    }

    fn finish_transition(&mut self, kind: TransitionKind) {
        tracing::trace!(?kind, "transition finished");
        match kind {
            TransitionKind::EntryPulse => {
                if self.state.phase == DragPhase::Entering {
                    self.set_phase(DragPhase::Tracking);
                }
            }
            TransitionKind::Exit => self.set_phase(DragPhase::Idle),
            TransitionKind::Release => {
                self.set_dragging(false);
                self.set_phase(DragPhase::Idle);
                tracing::debug!("release finished");
            }
        }
    }

    fn apply_sample(&mut self, transition: &MarkerTransition, now_ms: u64) {
        let sample = transition.sample(now_ms);
        self.state.visual.scale = sample.scale;
        self.state.visual.opacity = sample.opacity;
        self.state.changes |= StateChanges::VISUAL;
    }

    fn set_dragging(&mut self, dragging: bool) {
        if self.state.is_dragging != dragging {
            self.state.is_dragging = dragging;
            self.state.changes |= StateChanges::DRAGGING;
        }
    }

    fn set_phase(&mut self, next: DragPhase) {
        let current = self.state.phase;
        if current == next {
            return;
        }
        debug_assert!(
            current.can_transition_to(next),
            "illegal drag phase step {current:?} -> {next:?}"
        );
        tracing::trace!(?current, ?next, "drag phase");
        self.state.phase = next;
        self.state.changes |= StateChanges::PHASE;
    }

    fn push_visual(&mut self) {
        if let Some(marker) = self.marker.as_mut() {
            marker.apply(&self.state.visual);
        }
    }
}

impl DragAnimator<ManualScheduler> {
    /// Fire every pending frame at `now_ms`. Returns how many fired.
    pub fn pump(&mut self, now_ms: u64) -> usize {
        let due = self.scheduler.take_pending();
        for handle in &due {
            self.on_frame(*handle, now_ms);
        }
        due.len()
    }

    /// Pump frames every `frame_ms` from `start_ms` until nothing is scheduled
    /// or `max_frames` have run. Returns the time of the last frame.
    pub fn pump_until_idle(&mut self, start_ms: u64, frame_ms: u64, max_frames: usize) -> u64 {
        let mut now = start_ms;
        for _ in 0..max_frames {
            if self.scheduler.pending_count() == 0 {
                break;
            }
            now += frame_ms;
            self.pump(now);
        }
        now
    }
}

impl<S: FrameScheduler> Drop for DragAnimator<S> {
    fn drop(&mut self) {
        self.teardown();
    }
}
