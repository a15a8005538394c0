//! Notification events emitted by the onboarding flow.
//!
//! These are broadcast from the session manager and forwarded to connected
//! WebSocket clients; how they are displayed (toasts, banners) is up to the
//! frontend.

use serde::{Deserialize, Serialize};

/// A notification for the presentation layer: a kind tag plus a
/// human-readable message, nothing more.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum OnboardingEvent {
    /// The partnership agreement went out for e-signature.
    AgreementSent { message: String },
    /// All parties have signed.
    AgreementSigned { message: String },
    /// The intermediary is fully onboarded.
    OnboardingCompleted { message: String },
}

impl OnboardingEvent {
    pub fn agreement_sent() -> Self {
        Self::AgreementSent {
            message: "Partnership agreement sent for e-signature".to_string(),
        }
    }

    pub fn agreement_signed() -> Self {
        Self::AgreementSigned {
            message: "Partnership agreement signed successfully!".to_string(),
        }
    }

    pub fn onboarding_completed() -> Self {
        Self::OnboardingCompleted {
            message: "Intermediary onboarded successfully!".to_string(),
        }
    }

    /// The kind tag (matches the serde tag).
    pub fn kind(&self) -> &'static str {
        match self {
            Self::AgreementSent { .. } => "agreement_sent",
            Self::AgreementSigned { .. } => "agreement_signed",
            Self::OnboardingCompleted { .. } => "onboarding_completed",
        }
    }

    /// The human-readable message from any variant.
    pub fn message(&self) -> &str {
        match self {
            Self::AgreementSent { message }
            | Self::AgreementSigned { message }
            | Self::OnboardingCompleted { message } => message,
        }
    }

    /// Whether this event ends the onboarding flow.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::OnboardingCompleted { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serde_tags() {
        let sent = OnboardingEvent::agreement_sent();
        let json = serde_json::to_string(&sent).unwrap();
        assert!(json.contains("\"type\":\"agreement_sent\""));
        assert!(json.contains("sent for e-signature"));

        let parsed: OnboardingEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, sent);
    }

    #[test]
    fn kind_matches_serde_tag() {
        for event in [
            OnboardingEvent::agreement_sent(),
            OnboardingEvent::agreement_signed(),
            OnboardingEvent::onboarding_completed(),
        ] {
            let json = serde_json::to_value(&event).unwrap();
            assert_eq!(json["type"], event.kind());
        }
    }

    #[test]
    fn terminal_event() {
        assert!(OnboardingEvent::onboarding_completed().is_terminal());
        assert!(!OnboardingEvent::agreement_sent().is_terminal());
        assert!(!OnboardingEvent::agreement_signed().is_terminal());
    }
}
