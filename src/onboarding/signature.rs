//! Agreement e-signature lifecycle.

use serde::{Deserialize, Serialize};

/// Signature status of the partnership agreement.
///
/// Progresses one-directionally: `not_sent` → `pending` → `completed`.
/// No transition skips a state or moves backward within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignatureStatus {
    /// The agreement has not been sent out yet.
    NotSent,
    /// Sent for e-signature; awaiting the external signer.
    Pending,
    /// Signed by all parties. Terminal for the session.
    Completed,
}

impl SignatureStatus {
    /// Check if a transition from `self` to `target` is valid.
    pub fn can_transition_to(&self, target: SignatureStatus) -> bool {
        use SignatureStatus::*;
        matches!((self, target), (NotSent, Pending) | (Pending, Completed))
    }

    /// Whether this status is terminal.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed)
    }
}

impl Default for SignatureStatus {
    fn default() -> Self {
        Self::NotSent
    }
}

impl std::fmt::Display for SignatureStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::NotSent => "not_sent",
            Self::Pending => "pending",
            Self::Completed => "completed",
        };
        write!(f, "{s}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_transitions() {
        use SignatureStatus::*;
        assert!(NotSent.can_transition_to(Pending));
        assert!(Pending.can_transition_to(Completed));
    }

    #[test]
    fn invalid_transitions() {
        use SignatureStatus::*;
        // Skip a state
        assert!(!NotSent.can_transition_to(Completed));
        // Go backward
        assert!(!Pending.can_transition_to(NotSent));
        assert!(!Completed.can_transition_to(Pending));
        assert!(!Completed.can_transition_to(NotSent));
        // Self-transition
        assert!(!Pending.can_transition_to(Pending));
    }

    #[test]
    fn terminal() {
        assert!(SignatureStatus::Completed.is_terminal());
        assert!(!SignatureStatus::NotSent.is_terminal());
        assert!(!SignatureStatus::Pending.is_terminal());
    }

    #[test]
    fn display_matches_serde() {
        for status in [
            SignatureStatus::NotSent,
            SignatureStatus::Pending,
            SignatureStatus::Completed,
        ] {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{status}\""));
        }
    }
}
