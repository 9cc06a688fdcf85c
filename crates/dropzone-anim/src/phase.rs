//! The drag session state machine.

/// Where the drag session is in its lifecycle.
///
/// Transitions only move forward through a session:
///
/// ```text
/// Idle -> Entering -> Tracking -> Releasing -> Idle
///            |           |
///            +-----------+------> Exiting ---> Idle
/// ```
///
/// `Idle -> Tracking` is taken when there is no marker to pulse in, and
/// `Idle -> Releasing` when a drop arrives with no session running. Any phase
/// may fall back to `Idle` on teardown or when a newer session supersedes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DragPhase {
    #[default]
    Idle,
    /// Session started, entry pulse still playing.
    Entering,
    /// Spring loop chasing the pointer.
    Tracking,
    /// Drop burst playing.
    Releasing,
    /// Pointer left; exit fade playing.
    Exiting,
}

impl DragPhase {
    /// Whether moving from `self` to `next` is a legal step.
    pub fn can_transition_to(self, next: DragPhase) -> bool {
        use DragPhase::*;

        matches!(
            (self, next),
            (_, Idle)
                | (Idle, Entering)
                | (Idle, Tracking)
                | (Idle, Releasing)
                | (Entering, Tracking)
                | (Entering, Releasing)
                | (Entering, Exiting)
                | (Tracking, Releasing)
                | (Tracking, Exiting)
        )
    }

    /// Phases in which the spring loop follows the pointer.
    pub fn is_following(self) -> bool {
        matches!(self, DragPhase::Entering | DragPhase::Tracking)
    }

    /// Phases owned by a closing transition that a new session supersedes.
    pub fn is_closing(self) -> bool {
        matches!(self, DragPhase::Releasing | DragPhase::Exiting)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forward_transitions_are_legal() {
        assert!(DragPhase::Idle.can_transition_to(DragPhase::Entering));
        assert!(DragPhase::Entering.can_transition_to(DragPhase::Tracking));
        assert!(DragPhase::Tracking.can_transition_to(DragPhase::Releasing));
        assert!(DragPhase::Tracking.can_transition_to(DragPhase::Exiting));
        assert!(DragPhase::Releasing.can_transition_to(DragPhase::Idle));
    }

    #[test]
    fn test_backward_transitions_are_illegal() {
        assert!(!DragPhase::Tracking.can_transition_to(DragPhase::Entering));
        assert!(!DragPhase::Releasing.can_transition_to(DragPhase::Tracking));
        assert!(!DragPhase::Exiting.can_transition_to(DragPhase::Entering));
        assert!(!DragPhase::Releasing.can_transition_to(DragPhase::Exiting));
    }

    #[test]
    fn test_closing_and_following() {
        assert!(DragPhase::Entering.is_following());
        assert!(!DragPhase::Releasing.is_following());
        assert!(DragPhase::Exiting.is_closing());
        assert!(!DragPhase::Idle.is_closing());
    }
}
