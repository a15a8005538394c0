//! OnboardingManager — coordinates the session state machine, the deferred
//! signature confirmation, and the notification event stream.

use std::sync::Arc;

use chrono::Utc;
use tokio::sync::{Mutex, RwLock, broadcast};
use tokio::task::JoinHandle;

use crate::config::OnboardingConfig;
use crate::error::{Error, OnboardingError, ValidationError};

use super::agreement::render_agreement;
use super::events::OnboardingEvent;
use super::field::Field;
use super::model::{AgreementPreviewData, IntermediaryProfile};
use super::session::OnboardingSession;
use super::signature::SignatureStatus;
use super::steps::WizardStep;

/// Snapshot of the session for the status endpoint.
#[derive(Debug, Clone, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OnboardingStatus {
    pub step: u8,
    pub title: String,
    pub description: String,
    pub is_first_step: bool,
    pub is_last_step: bool,
    pub signature: SignatureStatus,
    pub completed: bool,
}

/// A generated agreement: the preview snapshot plus the rendered document.
#[derive(Debug, Clone, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedAgreement {
    pub agreement: AgreementPreviewData,
    pub document: String,
}

/// Owns the single in-memory onboarding session and everything async around
/// it: the broadcast event channel and the simulated-signer timer.
pub struct OnboardingManager {
    config: OnboardingConfig,
    session: Arc<RwLock<OnboardingSession>>,
    events: broadcast::Sender<OnboardingEvent>,
    /// Handle of the scheduled confirmation, kept so `abandon` can cancel it.
    signature_task: Mutex<Option<JoinHandle<()>>>,
}

impl OnboardingManager {
    pub fn new(config: OnboardingConfig) -> Self {
        let (events, _) = broadcast::channel(config.event_capacity);
        Self {
            config,
            session: Arc::new(RwLock::new(OnboardingSession::new())),
            events,
            signature_task: Mutex::new(None),
        }
    }

    /// Subscribe to the notification event stream.
    pub fn subscribe(&self) -> broadcast::Receiver<OnboardingEvent> {
        self.events.subscribe()
    }

    /// Current session snapshot for the status endpoint.
    pub async fn status(&self) -> OnboardingStatus {
        let session = self.session.read().await;
        let step = session.step();
        OnboardingStatus {
            step: step.index(),
            title: step.title().to_string(),
            description: step.description().to_string(),
            is_first_step: step.is_first(),
            is_last_step: step.is_last(),
            signature: session.signature(),
            completed: session.is_frozen(),
        }
    }

    /// Store a raw field value.
    pub async fn set_field(
        &self,
        field: Field,
        value: impl Into<String>,
    ) -> Result<(), OnboardingError> {
        self.session.write().await.set_field(field, value)
    }

    /// Validate the current step and advance.
    pub async fn advance(&self) -> Result<WizardStep, Vec<ValidationError>> {
        let mut session = self.session.write().await;
        let step = session.advance()?;
        tracing::debug!(step = step.index(), "advanced to {step}");
        Ok(step)
    }

    /// Move back one step.
    pub async fn retreat(&self) -> WizardStep {
        self.session.write().await.retreat()
    }

    /// Generate the agreement preview and rendered document.
    pub async fn generate_agreement(&self) -> Result<GeneratedAgreement, OnboardingError> {
        let session = self.session.read().await;
        let agreement = session.generate_agreement()?;
        let document = render_agreement(&agreement, Utc::now().date_naive());
        Ok(GeneratedAgreement {
            agreement,
            document,
        })
    }

    /// Send the agreement for e-signature.
    ///
    /// Transitions `not_sent` → `pending`, emits `agreement_sent`, and
    /// schedules a single deferred confirmation. The timer holds only a weak
    /// reference to the session and re-checks the lifecycle state when it
    /// fires, so a torn-down session or a duplicate fire is a no-op.
    pub async fn send_for_signature(&self) -> Result<(), OnboardingError> {
        self.session.write().await.send_for_signature()?;
        self.emit(OnboardingEvent::agreement_sent());
        tracing::info!(
            delay_secs = self.config.signature_delay.as_secs(),
            "agreement sent for e-signature"
        );

        let weak = Arc::downgrade(&self.session);
        let events = self.events.clone();
        let delay = self.config.signature_delay;
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let Some(session) = weak.upgrade() else {
                tracing::debug!("signature confirmation fired after session teardown");
                return;
            };
            let signed = session.write().await.complete_signature();
            if signed {
                tracing::info!("agreement signed by all parties");
                let _ = events.send(OnboardingEvent::agreement_signed());
            }
        });
        *self.signature_task.lock().await = Some(handle);
        Ok(())
    }

    /// Finalize onboarding and return the typed profile.
    ///
    /// Fails with `NotReady` (snapping the session to the agreement step)
    /// until the signature lifecycle is completed; succeeds exactly once.
    pub async fn submit(&self) -> Result<IntermediaryProfile, Error> {
        let profile = {
            let mut session = self.session.write().await;
            session.submit()?;
            IntermediaryProfile::try_from(session.values())?
        };
        self.emit(OnboardingEvent::onboarding_completed());
        tracing::info!(company = %profile.company_name, "intermediary onboarded");
        Ok(profile)
    }

    /// Tear the session down, cancelling any scheduled confirmation so the
    /// late callback cannot act on an abandoned session.
    pub async fn abandon(&self) {
        if let Some(handle) = self.signature_task.lock().await.take() {
            handle.abort();
            tracing::debug!("cancelled pending signature confirmation");
        }
    }

    fn emit(&self, event: OnboardingEvent) {
        // Send fails only when nobody is subscribed, which is fine.
        let _ = self.events.send(event);
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use tokio::sync::broadcast::error::TryRecvError;

    use super::*;

    fn manager_with_delay(delay: Duration) -> OnboardingManager {
        OnboardingManager::new(OnboardingConfig {
            signature_delay: delay,
            ..OnboardingConfig::default()
        })
    }

    async fn fill_step(manager: &OnboardingManager, pairs: &[(Field, &str)]) {
        for (field, value) in pairs {
            manager.set_field(*field, *value).await.unwrap();
        }
    }

    async fn drive_to_agreement(manager: &OnboardingManager) {
        fill_step(
            manager,
            &[
                (Field::Name, "Exemplar Financial Services"),
                (Field::CompanyName, "Exemplar Financial Services Pvt Ltd"),
                (Field::ContactPerson, "Rahul Sharma"),
                (Field::Email, "rahul@exemplarfinancial.com"),
                (Field::Phone, "9876543210"),
            ],
        )
        .await;
        assert_eq!(manager.advance().await.unwrap(), WizardStep::Business);

        fill_step(
            manager,
            &[
                (Field::Address, "504, Business Tower, Financial District"),
                (Field::City, "Mumbai"),
                (Field::State, "Maharashtra"),
                (Field::Pincode, "400001"),
                (Field::PanNumber, "ABCDE1234F"),
                (Field::EstablishedYear, "2015"),
            ],
        )
        .await;
        assert_eq!(manager.advance().await.unwrap(), WizardStep::Banking);

        fill_step(
            manager,
            &[
                (Field::AccountNumber, "12345678901"),
                (Field::IfscCode, "SBIN0001234"),
                (Field::BankName, "State Bank of India"),
                (Field::BranchName, "Financial District Branch"),
            ],
        )
        .await;
        assert_eq!(manager.advance().await.unwrap(), WizardStep::DocumentsTargets);
        assert_eq!(manager.advance().await.unwrap(), WizardStep::Agreement);
    }

    #[tokio::test(start_paused = true)]
    async fn signature_completes_after_the_configured_delay() {
        // Scenario C
        let manager = manager_with_delay(Duration::from_secs(5));
        drive_to_agreement(&manager).await;
        let mut events = manager.subscribe();

        manager.generate_agreement().await.unwrap();
        manager.send_for_signature().await.unwrap();
        assert_eq!(manager.status().await.signature, SignatureStatus::Pending);
        assert_eq!(events.try_recv().unwrap(), OnboardingEvent::agreement_sent());

        // Nothing happens before the delay elapses.
        tokio::time::sleep(Duration::from_secs(4)).await;
        assert_eq!(manager.status().await.signature, SignatureStatus::Pending);

        tokio::time::sleep(Duration::from_secs(2)).await;
        assert_eq!(manager.status().await.signature, SignatureStatus::Completed);
        assert_eq!(
            events.try_recv().unwrap(),
            OnboardingEvent::agreement_signed()
        );
        // Signed fires exactly once.
        assert_eq!(events.try_recv().unwrap_err(), TryRecvError::Empty);
    }

    #[tokio::test(start_paused = true)]
    async fn resending_is_rejected_without_disturbing_the_lifecycle() {
        let manager = manager_with_delay(Duration::from_secs(5));
        drive_to_agreement(&manager).await;

        manager.send_for_signature().await.unwrap();
        assert!(matches!(
            manager.send_for_signature().await,
            Err(OnboardingError::InvalidTransition { .. })
        ));
        assert_eq!(manager.status().await.signature, SignatureStatus::Pending);

        tokio::time::sleep(Duration::from_secs(6)).await;
        assert_eq!(manager.status().await.signature, SignatureStatus::Completed);
        assert!(matches!(
            manager.send_for_signature().await,
            Err(OnboardingError::InvalidTransition { .. })
        ));
    }

    #[tokio::test(start_paused = true)]
    async fn submit_gates_on_the_signature_lifecycle() {
        let manager = manager_with_delay(Duration::from_secs(5));
        drive_to_agreement(&manager).await;

        // Scenario D: not sent yet.
        assert!(matches!(
            manager.submit().await,
            Err(Error::Onboarding(OnboardingError::NotReady {
                status: SignatureStatus::NotSent
            }))
        ));
        assert_eq!(manager.status().await.step, 5);

        manager.send_for_signature().await.unwrap();
        assert!(matches!(
            manager.submit().await,
            Err(Error::Onboarding(OnboardingError::NotReady {
                status: SignatureStatus::Pending
            }))
        ));
        assert!(!manager.status().await.completed);

        tokio::time::sleep(Duration::from_secs(6)).await;
        let mut events = manager.subscribe();
        let profile = manager.submit().await.unwrap();
        assert_eq!(profile.established_year, 2015);
        assert_eq!(profile.target_leads, 100);
        assert!(manager.status().await.completed);
        assert_eq!(
            events.try_recv().unwrap(),
            OnboardingEvent::onboarding_completed()
        );

        // Frozen afterwards.
        assert!(matches!(
            manager.set_field(Field::Name, "x").await,
            Err(OnboardingError::Frozen)
        ));
        assert!(matches!(
            manager.submit().await,
            Err(Error::Onboarding(OnboardingError::Frozen))
        ));
    }

    #[tokio::test(start_paused = true)]
    async fn premature_submit_snaps_back_to_the_agreement_step() {
        let manager = manager_with_delay(Duration::from_secs(5));
        // Still on step 1 with an untouched form.
        assert!(manager.submit().await.is_err());
        assert_eq!(manager.status().await.step, 5);
    }

    #[tokio::test(start_paused = true)]
    async fn abandon_suppresses_the_late_confirmation() {
        let manager = manager_with_delay(Duration::from_secs(5));
        drive_to_agreement(&manager).await;
        let mut events = manager.subscribe();

        manager.send_for_signature().await.unwrap();
        assert_eq!(events.try_recv().unwrap(), OnboardingEvent::agreement_sent());
        manager.abandon().await;

        tokio::time::sleep(Duration::from_secs(10)).await;
        assert_eq!(manager.status().await.signature, SignatureStatus::Pending);
        assert_eq!(events.try_recv().unwrap_err(), TryRecvError::Empty);
    }

    #[tokio::test(start_paused = true)]
    async fn generate_agreement_renders_the_document() {
        let manager = manager_with_delay(Duration::from_secs(5));
        drive_to_agreement(&manager).await;

        let generated = manager.generate_agreement().await.unwrap();
        assert_eq!(
            generated.agreement.company_name,
            "Exemplar Financial Services Pvt Ltd"
        );
        assert!(generated.document.contains("PARTNERSHIP AGREEMENT"));
        assert!(generated
            .document
            .contains("Email: rahul@exemplarfinancial.com"));
    }

    #[tokio::test(start_paused = true)]
    async fn advance_surfaces_all_field_errors() {
        let manager = manager_with_delay(Duration::from_secs(5));
        let errors = manager.advance().await.unwrap_err();
        // Untouched step 1: everything except the defaulted type is missing.
        let fields: Vec<Field> = errors.iter().map(|e| e.field).collect();
        assert_eq!(
            fields,
            vec![
                Field::Name,
                Field::CompanyName,
                Field::ContactPerson,
                Field::Email,
                Field::Phone,
            ]
        );
        assert_eq!(manager.status().await.step, 1);
    }
}
