//! Trailing-edge coalescing for dense pointer-move streams.
//!
//! Moves land in a single-slot buffer. The buffered position is applied once
//! the stream has been quiet for the minimum interval; any newer move replaces
//! it and restarts the window, so only the latest position ever takes effect.

use glam::Vec2;

/// Shortest coalescing window, in milliseconds.
pub const MIN_POINTER_INTERVAL_MS: u64 = 5;

/// Reference window at speed multiplier 1.0, in milliseconds.
pub const BASE_POINTER_INTERVAL_MS: f32 = 16.0;

/// Coalescing window for a speed multiplier; faster speeds allow shorter windows.
pub fn pointer_interval_ms(speed: f32) -> u64 {
    let interval = (BASE_POINTER_INTERVAL_MS / speed).round();
    if interval.is_finite() {
        (interval as u64).max(MIN_POINTER_INTERVAL_MS)
    } else {
        MIN_POINTER_INTERVAL_MS
    }
}

/// A pointer position waiting to be applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PendingPointer {
    pub position: Vec2,
    pub received_ms: u64,
}

/// Single-slot "last received, pending apply" buffer.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerCoalescer {
    pending: Option<PendingPointer>,
}

impl PointerCoalescer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Buffer a move, discarding whatever was pending.
    pub fn push(&mut self, position: Vec2, now_ms: u64) {
        if self.pending.is_some() {
            tracing::trace!("coalescing pointer move");
        }
        self.pending = Some(PendingPointer {
            position,
            received_ms: now_ms,
        });
    }

    /// Take the buffered position if the stream has been quiet for `interval_ms`.
    pub fn take_ready(&mut self, now_ms: u64, interval_ms: u64) -> Option<Vec2> {
        let pending = self.pending?;
        if now_ms.saturating_sub(pending.received_ms) >= interval_ms {
            self.pending = None;
            Some(pending.position)
        } else {
            None
        }
    }

    pub fn pending(&self) -> Option<&PendingPointer> {
        self.pending.as_ref()
    }

    pub fn clear(&mut self) {
        self.pending = None;
    }
}
