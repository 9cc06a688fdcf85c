//! Frame scheduling seam between the animator and the host's refresh loop.

use std::fmt;

/// Identifies one scheduled frame callback.
///
/// Handles are never reused by a scheduler, so a late callback carrying a
/// cancelled handle can always be told apart from the live one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FrameHandle(u64);

impl FrameHandle {
    pub const fn from_raw(id: u64) -> Self {
        Self(id)
    }

    pub const fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for FrameHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "frame#{}", self.0)
    }
}

/// The host's display-refresh scheduler.
///
/// When a requested frame fires, the host calls
/// [`DragAnimator::on_frame`](crate::animator::DragAnimator::on_frame) with the
/// handle it returned here.
pub trait FrameScheduler {
    /// Schedule a callback for the next display refresh.
    fn request_frame(&mut self) -> FrameHandle;

    /// Cancel a scheduled callback. Unknown handles are ignored.
    fn cancel_frame(&mut self, handle: FrameHandle);
}

impl<S: FrameScheduler + ?Sized> FrameScheduler for Box<S> {
    fn request_frame(&mut self) -> FrameHandle {
        (**self).request_frame()
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        (**self).cancel_frame(handle)
    }
}

/// A scheduler the host drives by hand: frames pile up until taken.
///
/// Used by headless hosts and tests.
#[derive(Debug, Default)]
pub struct ManualScheduler {
    next_id: u64,
    pending: Vec<FrameHandle>,
    requested: u64,
    cancelled: u64,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drain every frame requested so far, in request order.
    pub fn take_pending(&mut self) -> Vec<FrameHandle> {
        std::mem::take(&mut self.pending)
    }

    pub fn is_pending(&self, handle: FrameHandle) -> bool {
        self.pending.contains(&handle)
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Total frames ever requested.
    pub fn requested_count(&self) -> u64 {
        self.requested
    }

    /// Total frames cancelled while still pending.
    pub fn cancelled_count(&self) -> u64 {
        self.cancelled
    }
}

impl FrameScheduler for ManualScheduler {
    fn request_frame(&mut self) -> FrameHandle {
        self.next_id += 1;
        self.requested += 1;
        let handle = FrameHandle(self.next_id);
        self.pending.push(handle);
        handle
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        let before = self.pending.len();
        self.pending.retain(|pending| *pending != handle);
        if self.pending.len() != before {
            self.cancelled += 1;
        }
    }
}
