//! Onboarding session state — step index, field values, signature status.
//!
//! This is the synchronous core of the wizard: every operation here is a
//! plain state mutation with no I/O, so the whole state machine is testable
//! without a runtime. The async pieces (the deferred signature confirmation
//! and the event stream) live in [`super::manager`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{OnboardingError, ValidationError};

use super::field::{Field, FieldValues};
use super::model::AgreementPreviewData;
use super::signature::SignatureStatus;
use super::steps::WizardStep;
use super::validate;

/// One in-memory onboarding attempt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OnboardingSession {
    pub id: Uuid,
    step: WizardStep,
    values: FieldValues,
    signature: SignatureStatus,
    frozen: bool,
    started_at: DateTime<Utc>,
    completed_at: Option<DateTime<Utc>>,
}

impl OnboardingSession {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            step: WizardStep::BasicInfo,
            values: FieldValues::default(),
            signature: SignatureStatus::NotSent,
            frozen: false,
            started_at: Utc::now(),
            completed_at: None,
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn values(&self) -> &FieldValues {
        &self.values
    }

    pub fn signature(&self) -> SignatureStatus {
        self.signature
    }

    /// Whether a successful submit has made the profile immutable.
    pub fn is_frozen(&self) -> bool {
        self.frozen
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    /// Store a raw field value verbatim. No validation happens until the
    /// step is advanced. Rejected once the profile is frozen.
    pub fn set_field(
        &mut self,
        field: Field,
        value: impl Into<String>,
    ) -> Result<(), OnboardingError> {
        if self.frozen {
            return Err(OnboardingError::Frozen);
        }
        self.values.set(field, value);
        Ok(())
    }

    /// Validate the current step and move to the next one.
    ///
    /// Every required field of the current step is checked in its declared
    /// order, and *all* failures are returned together so the caller can
    /// render each one inline. On success the step index increments; calling
    /// at the agreement step is a no-op (its gate is the signature
    /// lifecycle, not field validation).
    pub fn advance(&mut self) -> Result<WizardStep, Vec<ValidationError>> {
        let errors = validate::validate_step(self.step, &self.values);
        if !errors.is_empty() {
            return Err(errors);
        }
        if let Some(next) = self.step.next() {
            self.step = next;
        }
        Ok(self.step)
    }

    /// Move back one step. Not an error at the first step; the session just
    /// stays there.
    pub fn retreat(&mut self) -> WizardStep {
        if let Some(prev) = self.step.prev() {
            self.step = prev;
        }
        self.step
    }

    /// Expose the agreement's input fields for rendering.
    ///
    /// No state change. Only callable while the agreement has not been sent.
    pub fn generate_agreement(&self) -> Result<AgreementPreviewData, OnboardingError> {
        if self.signature != SignatureStatus::NotSent {
            return Err(OnboardingError::InvalidTransition {
                action: "generate the agreement",
                status: self.signature,
            });
        }
        Ok(AgreementPreviewData::from_values(&self.values))
    }

    /// Mark the agreement as sent for e-signature (`not_sent` → `pending`).
    ///
    /// The caller is responsible for scheduling the deferred confirmation;
    /// this only performs the guarded state transition.
    pub fn send_for_signature(&mut self) -> Result<(), OnboardingError> {
        if !self.signature.can_transition_to(SignatureStatus::Pending) {
            return Err(OnboardingError::InvalidTransition {
                action: "send for signature",
                status: self.signature,
            });
        }
        self.signature = SignatureStatus::Pending;
        Ok(())
    }

    /// Record the external signer's confirmation (`pending` → `completed`).
    ///
    /// Returns whether a transition happened. Idempotent to re-entry: firing
    /// from any state other than `pending` is a no-op, so a duplicate or
    /// stale confirmation can never move the lifecycle.
    pub fn complete_signature(&mut self) -> bool {
        if !self.signature.can_transition_to(SignatureStatus::Completed) {
            return false;
        }
        self.signature = SignatureStatus::Completed;
        true
    }

    /// Finalize onboarding.
    ///
    /// Succeeds only at the agreement step with a completed signature, and
    /// only once; success freezes the profile permanently. Calling early
    /// fails with `NotReady` and snaps the session to the agreement step,
    /// mirroring the dashboard's jump-to-agreement behavior.
    pub fn submit(&mut self) -> Result<(), OnboardingError> {
        if self.frozen {
            return Err(OnboardingError::Frozen);
        }
        if self.step != WizardStep::Agreement || self.signature != SignatureStatus::Completed {
            self.step = WizardStep::Agreement;
            return Err(OnboardingError::NotReady {
                status: self.signature,
            });
        }
        self.frozen = true;
        self.completed_at = Some(Utc::now());
        Ok(())
    }
}

impl Default for OnboardingSession {
    fn default() -> Self {
        Self::new()
    }
}
