//! Per-form submission lifecycle
//!
//! ```text
//! Idle -> Submitting -> Redirecting        (terminal, the page unloads)
//!                    -> Idle               (error shown, nothing to do, or
//!                                           the page stays put)
//! ```

/// Lifecycle state of one bound form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionState {
    /// Ready for a submission
    #[default]
    Idle,
    /// A request is in flight
    Submitting,
    /// Navigation to the redirect target has been requested
    Redirecting,
}

impl SubmissionState {
    /// Convert to u8 for atomic storage.
    pub fn to_u8(self) -> u8 {
        match self {
            SubmissionState::Idle => 0,
            SubmissionState::Submitting => 1,
            SubmissionState::Redirecting => 2,
        }
    }

    /// Convert from u8 (atomic storage).
    pub fn from_u8(v: u8) -> Self {
        match v {
            1 => SubmissionState::Submitting,
            2 => SubmissionState::Redirecting,
            _ => SubmissionState::Idle,
        }
    }

    /// Whether the lifecycle allows moving from `self` to `next`.
    pub fn can_transition_to(self, next: SubmissionState) -> bool {
        use SubmissionState::*;
        matches!(
            (self, next),
            (Idle, Submitting) | (Submitting, Idle) | (Submitting, Redirecting)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn u8_round_trip_covers_every_state() {
        for state in [
            SubmissionState::Idle,
            SubmissionState::Submitting,
            SubmissionState::Redirecting,
        ] {
            assert_eq!(SubmissionState::from_u8(state.to_u8()), state);
        }
        assert_eq!(SubmissionState::from_u8(200), SubmissionState::Idle);
    }

    #[test]
    fn redirecting_is_terminal() {
        assert!(!SubmissionState::Redirecting.can_transition_to(SubmissionState::Idle));
        assert!(!SubmissionState::Redirecting.can_transition_to(SubmissionState::Submitting));
    }

    #[test]
    fn idle_cannot_skip_submitting() {
        assert!(!SubmissionState::Idle.can_transition_to(SubmissionState::Redirecting));
        assert!(SubmissionState::Idle.can_transition_to(SubmissionState::Submitting));
        assert!(SubmissionState::Submitting.can_transition_to(SubmissionState::Idle));
    }
}
