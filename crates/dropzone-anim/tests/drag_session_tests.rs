//! Drag session tests driven through the public handlers (no display required).
//!
//! Frames are fired by hand through `ManualScheduler`, one every 16 ms.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use dropzone_anim::{
    AnimationConfig, DragAnimator, DragPhase, DropGates, ManualScheduler, Marker, MarkerVisual,
    StateChanges, TransitionKind, Vec2,
};
use dropzone_anim::marker::RELEASE_BURST_SCALE;
use dropzone_core::geometry::Size;
use dropzone_core::math::approx_eq;

const FRAME_MS: u64 = 16;

fn rect() -> Size<f32> {
    Size::new(200.0, 100.0)
}

fn bare_animator() -> DragAnimator {
    DragAnimator::new(ManualScheduler::new()).with_drop_target(rect())
}

fn recording_marker() -> (Rc<RefCell<Vec<MarkerVisual>>>, impl Marker + 'static) {
    let log = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&log);
    (log, move |visual: &MarkerVisual| sink.borrow_mut().push(*visual))
}

fn animator_with_marker() -> (Rc<RefCell<Vec<MarkerVisual>>>, DragAnimator) {
    let (log, marker) = recording_marker();
    let anim = DragAnimator::new(ManualScheduler::new())
        .with_drop_target(rect())
        .with_marker(marker);
    (log, anim)
}

#[test]
fn test_enter_move_leave_ends_clean_without_marker() {
    let mut anim = bare_animator();

    anim.on_drag_enter(Vec2::new(10.0, 50.0), 0);
    for i in 1..=5u64 {
        anim.on_pointer_move(Vec2::new(10.0 + i as f32 * 10.0, 50.0), i * 4);
        anim.pump(i * FRAME_MS);
    }
    anim.on_drag_leave(false, 100);

    assert!(!anim.is_dragging());
    assert!(!anim.is_animating());
    assert_eq!(anim.state().animation_handle(), None);
    assert_eq!(anim.scheduler().pending_count(), 0);
    assert_eq!(anim.phase(), DragPhase::Idle);
}

#[test]
fn test_enter_move_leave_ends_clean_with_exit_fade() {
    let (log, mut anim) = animator_with_marker();

    anim.on_drag_enter(Vec2::new(10.0, 50.0), 0);
    anim.pump(FRAME_MS);
    anim.on_pointer_move(Vec2::new(40.0, 60.0), 20);
    anim.pump(2 * FRAME_MS);
    anim.on_drag_leave(false, 40);

    // Flags drop immediately; only the cosmetic exit frame remains.
    assert!(!anim.is_dragging());
    assert!(!anim.is_animating());
    assert_eq!(anim.state().animation_handle(), None);
    assert_eq!(anim.phase(), DragPhase::Exiting);
    assert_eq!(anim.state().transition_kind(), Some(TransitionKind::Exit));
    assert_eq!(anim.scheduler().pending_count(), 1);

    anim.pump_until_idle(40, FRAME_MS, 200);

    assert_eq!(anim.scheduler().pending_count(), 0);
    assert_eq!(anim.phase(), DragPhase::Idle);
    assert!(!anim.visual().is_visible());
    assert_eq!(log.borrow().last().map(|v| v.opacity), Some(0.0));
}

#[test]
fn test_enter_move_drop_releases_and_ends() {
    let (log, mut anim) = animator_with_marker();

    anim.on_drag_enter(Vec2::new(10.0, 50.0), 0);
    for i in 1..=10u64 {
        anim.pump(i * FRAME_MS);
    }
    anim.on_pointer_move(Vec2::new(90.0, 30.0), 170);

    assert!(anim.on_drop(Vec2::new(90.0, 30.0), 180));

    // Final position snaps; the spring loop is gone; release is running.
    assert_eq!(anim.marker_position(), Vec2::new(90.0, 30.0));
    assert_eq!(anim.target_position(), Vec2::new(90.0, 30.0));
    assert!(!anim.is_animating());
    assert_eq!(anim.state().animation_handle(), None);
    assert!(anim.is_dragging());
    assert_eq!(anim.phase(), DragPhase::Releasing);

    anim.pump_until_idle(180, FRAME_MS, 500);

    assert!(!anim.is_dragging());
    assert_eq!(anim.phase(), DragPhase::Idle);
    assert_eq!(anim.visual().opacity, 0.0);
    assert_eq!(anim.visual().scale, RELEASE_BURST_SCALE);
    assert_eq!(anim.scheduler().pending_count(), 0);

    // Scale never shrinks and opacity never grows once the drop happened.
    let log = log.borrow();
    let release: Vec<_> = log
        .iter()
        .skip_while(|v| v.position != Vec2::new(90.0, 30.0))
        .collect();
    assert!(release.len() > 2);
    for pair in release.windows(2) {
        assert!(pair[1].scale >= pair[0].scale - 1e-4);
        assert!(pair[1].opacity <= pair[0].opacity + 1e-4);
    }
}

#[test]
fn test_drop_reports_gate_result() {
    let mut anim = bare_animator().with_gates(DropGates::OPEN.drop_enabled(false));
    assert!(!anim.on_drop(Vec2::new(10.0, 10.0), 0));

    let mut anim = bare_animator();
    anim.on_drag_enter(Vec2::new(10.0, 10.0), 0);
    assert!(anim.on_drop(Vec2::new(10.0, 10.0), 20));
}

#[test]
fn test_entry_from_left_edge() {
    let mut anim = bare_animator();
    anim.on_drag_enter(Vec2::new(10.0, 50.0), 0);
    assert_eq!(anim.marker_position(), Vec2::new(-120.0, 50.0));
}

#[test]
fn test_entry_tie_prefers_top() {
    let mut anim = bare_animator();
    anim.on_drag_enter(Vec2::new(100.0, 50.0), 0);
    assert_eq!(anim.marker_position(), Vec2::new(100.0, -120.0));
}

#[test]
fn test_drag_over_is_rate_limited() {
    let mut anim = bare_animator();
    anim.on_drag_enter(Vec2::new(10.0, 50.0), 0);

    anim.on_drag_enter(Vec2::new(30.0, 50.0), 100);
    anim.on_drag_enter(Vec2::new(60.0, 50.0), 105);

    assert_eq!(anim.target_position(), Vec2::new(30.0, 50.0));
    assert_eq!(anim.state().last_event_ms(), 100);

    anim.on_drag_enter(Vec2::new(60.0, 50.0), 116);
    assert_eq!(anim.target_position(), Vec2::new(60.0, 50.0));
}

#[test]
fn test_session_start_bypasses_rate_limit() {
    let mut anim = bare_animator();
    anim.on_drag_enter(Vec2::new(10.0, 50.0), 0);
    anim.on_drag_leave(false, 3);
    anim.on_drag_enter(Vec2::new(190.0, 50.0), 5);

    assert!(anim.is_dragging());
    assert_eq!(anim.marker_position(), Vec2::new(320.0, 50.0));
}

#[test]
fn test_spring_converges_monotonically_toward_still_pointer() {
    for speed in [0.1, 0.5, 1.0, 2.0] {
        let mut anim = bare_animator().with_config(AnimationConfig::new(speed, 0.5));
        anim.on_drag_enter(Vec2::new(10.0, 50.0), 0);

        let mut prev = (anim.target_position() - anim.marker_position()).length();
        assert!(prev > 0.0);

        for frame in 1..=3000u64 {
            anim.pump(frame * FRAME_MS);
            let current = (anim.target_position() - anim.marker_position()).length();
            assert!(
                current <= prev + 1e-4,
                "speed {speed}: grew at frame {frame} ({prev} -> {current})"
            );
            prev = current;
        }
        assert!(
            approx_eq(anim.marker_position(), anim.target_position(), 1e-2),
            "speed {speed}: residual {prev}"
        );
        assert!(anim.is_animating());
    }
}

#[test]
fn test_repeated_enter_does_not_restart_loop_or_pulse() {
    let (log, mut anim) = animator_with_marker();

    anim.on_drag_enter(Vec2::new(10.0, 50.0), 0);
    let requested = anim.scheduler().requested_count();
    let handle = anim.state().animation_handle();
    let pulse_start = anim.state().transition().map(|t| t.transition.start_ms());
    let pushes = log.borrow().len();

    anim.on_drag_enter(Vec2::new(20.0, 55.0), 20);

    assert_eq!(anim.scheduler().requested_count(), requested);
    assert_eq!(anim.state().animation_handle(), handle);
    assert_eq!(anim.state().transition().map(|t| t.transition.start_ms()), pulse_start);
    assert_eq!(log.borrow().len(), pushes);
    assert_eq!(anim.target_position(), Vec2::new(20.0, 55.0));
    assert_eq!(anim.marker_position(), Vec2::new(-120.0, 50.0));
}

#[test]
fn test_disabled_gate_freezes_state() {
    for gates in [
        DropGates::OPEN.disabled(true),
        DropGates::OPEN.readonly(true),
        DropGates::OPEN.drop_enabled(false),
        DropGates::OPEN.editing(true),
    ] {
        let (log, anim) = animator_with_marker();
        let mut anim = anim.with_gates(gates);
        let before = anim.state().clone();

        anim.on_drag_enter(Vec2::new(10.0, 50.0), 0);
        anim.on_pointer_move(Vec2::new(20.0, 50.0), 5);
        anim.on_drag_leave(false, 10);
        assert!(!anim.on_drop(Vec2::new(20.0, 50.0), 20));

        assert_eq!(anim.state(), &before);
        assert_eq!(anim.scheduler().requested_count(), 0);
        assert!(log.borrow().is_empty());
    }
}

#[test]
fn test_pointer_moves_coalesce_to_latest() {
    let mut anim = bare_animator().with_config(AnimationConfig::new(1.0, 0.5));
    anim.on_drag_enter(Vec2::new(10.0, 50.0), 0);

    anim.on_pointer_move(Vec2::new(20.0, 50.0), 10);
    anim.on_pointer_move(Vec2::new(30.0, 50.0), 12);
    anim.on_pointer_move(Vec2::new(40.0, 60.0), 14);

    anim.pump(20);
    assert_eq!(anim.target_position(), Vec2::new(10.0, 50.0));
    assert!(anim.state().pending_pointer().is_some());

    anim.pump(30);
    assert_eq!(anim.target_position(), Vec2::new(40.0, 60.0));
    assert!(anim.state().pending_pointer().is_none());
}

#[test]
fn test_pointer_move_ignored_outside_session() {
    let mut anim = bare_animator();
    let before = anim.state().clone();
    anim.on_pointer_move(Vec2::new(20.0, 50.0), 10);
    assert_eq!(anim.state(), &before);
}

#[test]
fn test_leave_into_descendant_is_ignored() {
    let mut anim = bare_animator();
    anim.on_drag_enter(Vec2::new(10.0, 50.0), 0);
    anim.on_drag_leave(true, 10);
    assert!(anim.is_dragging());
    assert!(anim.is_animating());
}

#[test]
fn test_enter_supersedes_pending_exit() {
    let (_log, mut anim) = animator_with_marker();

    anim.on_drag_enter(Vec2::new(10.0, 50.0), 0);
    anim.on_drag_leave(false, 20);
    let exit_handle = anim.state().transition().map(|t| t.handle);
    assert!(exit_handle.is_some());

    anim.on_drag_enter(Vec2::new(190.0, 50.0), 30);

    assert!(anim.is_dragging());
    assert!(anim.is_animating());
    assert_eq!(anim.phase(), DragPhase::Entering);
    assert_eq!(anim.state().transition_kind(), Some(TransitionKind::EntryPulse));
    let exit_handle = exit_handle.unwrap();
    assert!(!anim.scheduler().is_pending(exit_handle));

    // A late callback for the superseded exit must not touch the new session.
    let before = anim.state().clone();
    anim.on_frame(exit_handle, 40);
    assert_eq!(anim.state(), &before);
}

#[test]
fn test_enter_supersedes_release() {
    let (_log, mut anim) = animator_with_marker();

    anim.on_drag_enter(Vec2::new(10.0, 50.0), 0);
    assert!(anim.on_drop(Vec2::new(50.0, 50.0), 20));
    anim.pump(36);
    assert_eq!(anim.phase(), DragPhase::Releasing);

    anim.on_drag_enter(Vec2::new(100.0, 5.0), 40);

    assert!(anim.is_dragging());
    assert_eq!(anim.phase(), DragPhase::Entering);
    assert_eq!(anim.marker_position(), Vec2::new(100.0, -120.0));

    // The old release never completes into the new session.
    anim.pump_until_idle(40, FRAME_MS, 200);
    assert!(anim.is_dragging());
    assert_eq!(anim.phase(), DragPhase::Tracking);
}

#[test]
fn test_entry_pulse_settles_into_tracking() {
    let (log, mut anim) = animator_with_marker();
    anim.on_drag_enter(Vec2::new(10.0, 50.0), 0);
    assert_eq!(anim.phase(), DragPhase::Entering);
    assert_eq!(anim.visual().opacity, 0.0);

    // Default speed 0.5: the pulse lasts 300 ms.
    for i in 1..=20u64 {
        anim.pump(i * FRAME_MS);
    }

    assert_eq!(anim.phase(), DragPhase::Tracking);
    assert_eq!(anim.visual().opacity, 0.5);
    assert_eq!(anim.visual().scale, 1.0);
    assert!(anim.is_animating());
    assert!(log.borrow().iter().any(|v| v.position.x > -120.0));
}

#[test]
fn test_teardown_cancels_everything() {
    let (_log, mut anim) = animator_with_marker();
    anim.on_drag_enter(Vec2::new(10.0, 50.0), 0);
    anim.pump(FRAME_MS);
    assert_eq!(anim.scheduler().pending_count(), 2);

    anim.teardown();

    assert!(!anim.is_dragging());
    assert!(!anim.is_animating());
    assert_eq!(anim.state().animation_handle(), None);
    assert!(anim.state().transition().is_none());
    assert_eq!(anim.scheduler().pending_count(), 0);
    assert_eq!(anim.phase(), DragPhase::Idle);
}

#[test]
fn test_unmounted_target_blocks_input() {
    let extent: Rc<Cell<Option<Size<f32>>>> = Rc::new(Cell::new(None));
    let mut anim = DragAnimator::new(ManualScheduler::new()).with_drop_target(Rc::clone(&extent));

    anim.on_drag_enter(Vec2::new(10.0, 50.0), 0);
    assert!(!anim.is_dragging());

    extent.set(Some(rect()));
    anim.on_drag_enter(Vec2::new(10.0, 50.0), 10);
    assert!(anim.is_dragging());
}

#[test]
fn test_drop_after_unmount_ends_session() {
    let extent: Rc<Cell<Option<Size<f32>>>> = Rc::new(Cell::new(Some(rect())));
    let mut anim = DragAnimator::new(ManualScheduler::new()).with_drop_target(Rc::clone(&extent));

    anim.on_drag_enter(Vec2::new(10.0, 50.0), 0);
    anim.pump(FRAME_MS);
    assert!(anim.is_animating());

    extent.set(None);
    assert!(!anim.on_drop(Vec2::new(40.0, 50.0), 2 * FRAME_MS));
    assert!(!anim.is_dragging());
    assert!(!anim.is_animating());
    assert_eq!(anim.phase(), DragPhase::Idle);
    assert!(anim.state().animation_handle().is_none());
    assert_eq!(anim.scheduler().pending_count(), 0);

    let requested = anim.scheduler().requested_count();
    anim.pump_until_idle(2 * FRAME_MS, FRAME_MS, 100);
    assert_eq!(anim.scheduler().requested_count(), requested);
}

#[test]
fn test_drop_after_unmount_while_idle_changes_nothing() {
    let extent: Rc<Cell<Option<Size<f32>>>> = Rc::new(Cell::new(None));
    let mut anim = DragAnimator::new(ManualScheduler::new()).with_drop_target(Rc::clone(&extent));
    let before = anim.state().clone();

    assert!(!anim.on_drop(Vec2::new(40.0, 50.0), 0));
    assert_eq!(anim.state(), &before);
}

#[test]
fn test_degenerate_target_counts_as_unmounted() {
    for size in [Size::new(0.0_f32, 100.0), Size::new(200.0, f32::NAN)] {
        let mut anim = DragAnimator::new(ManualScheduler::new()).with_drop_target(size);
        anim.on_drag_enter(Vec2::new(10.0, 50.0), 0);
        assert!(!anim.is_dragging(), "{size:?} accepted a drag");
        assert_eq!(anim.scheduler().pending_count(), 0);
    }
}

#[test]
fn test_change_flags_track_session() {
    let mut anim = bare_animator();
    anim.on_drag_enter(Vec2::new(10.0, 50.0), 0);
    assert!(anim.take_changes().needs_restyle());

    anim.pump(FRAME_MS);
    let changes = anim.take_changes();
    assert!(changes.contains(StateChanges::POSITION));
    assert!(!changes.contains(StateChanges::DRAGGING));

    anim.on_drag_leave(false, 40);
    assert!(anim.take_changes().contains(StateChanges::DRAGGING));
}
