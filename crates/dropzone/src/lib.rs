//! Dropzone - the engine behind a drag-and-drop upload widget
//!
//! This crate re-exports the pieces a host wires into its drop target:
//!
//! - **Animation** (`anim`): the marker that springs after the pointer,
//!   enters from the nearest edge and bursts on drop
//! - **File intake** (`files`): validation, accepted-type presets, the file
//!   list model and payload encoding
//! - **Core**: logging setup, profiling hooks, geometry and math types
//!
//! # Quick Start
//!
//! ```
//! use dropzone::prelude::*;
//!
//! let mut animator = DragAnimator::new(ManualScheduler::new())
//!     .with_drop_target(Size::new(320.0_f32, 180.0));
//!
//! animator.on_drag_enter(Vec2::new(300.0, 90.0), 0);
//! animator.pump(16);
//! animator.on_drop(Vec2::new(280.0, 90.0), 40);
//!
//! let mut files = FileList::new(FileListConfig::default());
//! let report = files.add_files(vec![FileDescriptor::new("cat.png", "image/png", 2048)]);
//! assert_eq!(report.accepted.len(), 1);
//! ```

pub use dropzone_core as core;
pub use dropzone_core::{logging, math};

#[cfg(feature = "anim")]
pub use dropzone_anim as anim;

#[cfg(feature = "files")]
pub use dropzone_files as files;

/// Prelude module for convenient imports
pub mod prelude {
    pub use dropzone_core::geometry::{Pos, Rect, Size};
    pub use dropzone_core::math::Vec2;

    #[cfg(feature = "anim")]
    pub use dropzone_anim::{
        AnimationConfig, DragAnimator, DragPhase, DropGates, DropTarget, FrameHandle,
        FrameScheduler, ManualScheduler, Marker, MarkerVisual, StateChanges,
    };

    #[cfg(feature = "files")]
    pub use dropzone_files::{
        AcceptedTypes, AddReport, ExportOptions, FileDescriptor, FileDetails, FileList,
        FileListConfig, TypePreset, UploadMode, ValidationError, ValidationOptions,
    };
}
