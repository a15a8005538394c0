//! Error types for Partner Desk.

use crate::onboarding::field::Field;
use crate::onboarding::signature::SignatureStatus;

/// Top-level error type for the service.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Onboarding error: {0}")]
    Onboarding(#[from] OnboardingError),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

/// Configuration-related errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

/// Errors from the onboarding session controller and signature lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum OnboardingError {
    /// A signature-lifecycle action was attempted from the wrong state.
    /// The UI is expected to disable the trigger; the state machine still
    /// guards it.
    #[error("Cannot {action} while the agreement is {status}")]
    InvalidTransition {
        action: &'static str,
        status: SignatureStatus,
    },

    /// Step index outside 1..=5. The controller never produces one of these
    /// itself; only an out-of-range index from a caller can.
    #[error("Invalid wizard step index {index} (expected 1..=5)")]
    InvalidStep { index: u8 },

    /// `submit` was called before the terminal conditions hold. The session
    /// snaps to the agreement step as a side effect.
    #[error("Onboarding is not ready to submit: agreement signature is {status}")]
    NotReady { status: SignatureStatus },

    /// The profile was frozen by a successful submit and can no longer change.
    #[error("Profile is frozen; onboarding is already complete")]
    Frozen,
}

/// A single failed field check.
///
/// `advance()` collects these for every invalid field of the current step in
/// one pass, so the caller can render all of them at once.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, thiserror::Error)]
#[error("{field}: {message}")]
pub struct ValidationError {
    pub field: Field,
    pub kind: ValidationErrorKind,
    /// Human-readable reason, suitable for inline display next to the field.
    pub message: String,
}

impl ValidationError {
    pub fn new(field: Field, kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            field,
            kind,
            message: message.into(),
        }
    }
}

/// Why a field failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationErrorKind {
    Required,
    TooShort,
    NotANumber,
    OutOfRange,
    InvalidFormat,
}

/// Result type alias for the service.
pub type Result<T> = std::result::Result<T, Error>;
