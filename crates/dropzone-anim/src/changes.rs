//! Change flags describing what observable drag state moved since the last poll.

use bitflags::bitflags;

bitflags! {
    /// Accumulated changes to [`DragAnimationState`](crate::state::DragAnimationState).
    ///
    /// The animator ORs flags in as it mutates state; the host drains them with
    /// [`DragAnimator::take_changes`](crate::animator::DragAnimator::take_changes)
    /// and re-renders only what changed.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct StateChanges: u8 {
        /// No changes
        const NONE     = 0b0000_0000;

        /// `is_dragging` flipped
        const DRAGGING = 0b0000_0001;

        /// Marker position moved
        const POSITION = 0b0000_0010;

        /// Pointer target moved
        const TARGET   = 0b0000_0100;

        /// Marker scale or opacity changed
        const VISUAL   = 0b0000_1000;

        /// Phase of the drag state machine changed
        const PHASE    = 0b0001_0000;
    }
}

impl Default for StateChanges {
    fn default() -> Self {
        Self::NONE
    }
}

impl StateChanges {
    /// Returns true if the marker needs repainting.
    #[inline]
    pub fn needs_repaint(&self) -> bool {
        self.intersects(Self::POSITION | Self::VISUAL)
    }

    /// Returns true if the host's drag-active styling must be refreshed.
    #[inline]
    pub fn needs_restyle(&self) -> bool {
        self.intersects(Self::DRAGGING | Self::PHASE)
    }
}
