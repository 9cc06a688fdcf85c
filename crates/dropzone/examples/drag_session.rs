//! Headless walkthrough of one drag session followed by file intake.
//!
//! This example shows how to:
//! - Bind a drop target, a marker and a manual frame scheduler
//! - Feed drag and pointer events and pump frames like a refresh loop
//! - Validate the dropped files against an accepted-type preset
//!
//! Run with: cargo run -p dropzone --example drag_session

use dropzone::prelude::*;

fn main() {
    dropzone::logging::init();

    // Drop zone laid out at (24, 80) on the page; events arrive in page space.
    let zone = Rect::new(24.0_f32, 80.0, 400.0, 240.0);
    let local = |x: f32, y: f32| -> Vec2 { zone.to_local(Pos::new(x, y)).into() };

    let config = AnimationConfig::default().with_speed(1.0);
    let mut animator = DragAnimator::new(ManualScheduler::new())
        .with_drop_target(zone)
        .with_config(config)
        .with_marker(|visual: &MarkerVisual| {
            tracing::trace!(
                "marker at ({:.1}, {:.1}) scale {:.2} opacity {:.2}",
                visual.position.x,
                visual.position.y,
                visual.scale,
                visual.opacity
            );
        });

    // Pointer comes in near the right edge and sweeps left.
    let mut now = 0;
    animator.on_drag_enter(local(404.0, 200.0), now);
    tracing::info!(
        "entered, marker starts at {:?} in phase {:?}",
        animator.marker_position(),
        animator.phase()
    );

    for step in 0..30u64 {
        now += 8;
        let x = 404.0 - step as f32 * 8.0;
        animator.on_pointer_move(local(x, 200.0), now);
        if step % 2 == 1 {
            animator.pump(now);
        }
    }
    tracing::info!(
        "tracking, marker at {:?} chasing {:?}",
        animator.marker_position(),
        animator.target_position()
    );

    let accepted = animator.on_drop(local(174.0, 200.0), now);
    tracing::info!("drop accepted: {}", accepted);
    let end = animator.pump_until_idle(now, 16, 200);
    tracing::info!(
        "release finished at {} ms, phase {:?}, visible {}",
        end,
        animator.phase(),
        animator.visual().is_visible()
    );

    let mut files = FileList::new(FileListConfig::default().with_validation(
        ValidationOptions::default().with_accepted(TypePreset::Image.accepted_types()),
    ));
    let report = files.add_files(vec![
        FileDescriptor::new("holiday.jpg", "image/jpeg", 2 * 1024 * 1024),
        FileDescriptor::new("notes.txt", "text/plain", 512),
        FileDescriptor::new("poster.png", "image/png", 12 * 1024 * 1024),
    ]);

    for details in &report.accepted {
        tracing::info!("accepted {} ({} MB, .{})", details.name, details.size_mb, details.extension);
    }
    for rejection in &report.rejected {
        tracing::warn!(
            "rejected {} [{}]: {}",
            rejection.name,
            rejection.error.constraint(),
            rejection.error
        );
    }
}
