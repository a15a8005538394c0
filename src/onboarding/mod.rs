//! Intermediary onboarding — the five-step wizard and agreement lifecycle.
//!
//! The wizard collects an intermediary's details across five ordered steps,
//! gating each advance on per-field validation. The final step swaps field
//! validation for the agreement e-signature lifecycle: the agreement is
//! generated, sent for signature, and — once the (simulated) external signer
//! confirms — the session can be submitted, freezing the profile.

pub mod agreement;
pub mod events;
pub mod field;
pub mod manager;
pub mod model;
pub mod routes;
pub mod session;
pub mod signature;
pub mod steps;
pub mod validate;

pub use events::OnboardingEvent;
pub use field::{Field, FieldValues};
pub use manager::{GeneratedAgreement, OnboardingManager, OnboardingStatus};
pub use model::{AgreementPreviewData, IntermediaryProfile};
pub use routes::{OnboardingRouteState, onboarding_routes};
pub use session::OnboardingSession;
pub use signature::SignatureStatus;
pub use steps::WizardStep;
