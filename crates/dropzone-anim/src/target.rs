//! The drop target the marker animates within.

use dropzone_core::geometry::{Rect, Size};
use std::cell::Cell;
use std::rc::Rc;

/// Rectangular drop region, queried on demand.
///
/// `None` means the host has no live element right now (not mounted, or
/// already torn down); the animator treats that, and an empty or NaN size,
/// as a blocked gate.
pub trait DropTarget {
    fn extent(&self) -> Option<Size<f32>>;
}

impl DropTarget for Size<f32> {
    fn extent(&self) -> Option<Size<f32>> {
        Some(*self)
    }
}

impl DropTarget for Rect<f32> {
    fn extent(&self) -> Option<Size<f32>> {
        Some(self.size())
    }
}

/// A target whose element the host mounts, resizes and unmounts over time.
impl DropTarget for Rc<Cell<Option<Size<f32>>>> {
    fn extent(&self) -> Option<Size<f32>> {
        self.get()
    }
}
