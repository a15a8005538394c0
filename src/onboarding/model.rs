//! Typed onboarding records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{ValidationError, ValidationErrorKind};

use super::field::{Field, FieldValues};

/// The fully-typed intermediary record, extracted from the raw form values
/// once onboarding completes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntermediaryProfile {
    pub name: String,
    pub company_name: String,
    #[serde(rename = "type")]
    pub intermediary_type: String,
    pub contact_person: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub pincode: String,
    pub pan_number: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gst_number: Option<String>,
    pub account_number: String,
    pub ifsc_code: String,
    pub bank_name: String,
    pub branch_name: String,
    pub established_year: i32,
    pub target_leads: u32,
    pub target_disbursement_amount: i64,
    pub onboarded_at: DateTime<Utc>,
}

impl TryFrom<&FieldValues> for IntermediaryProfile {
    type Error = ValidationError;

    /// Parse the raw values into a typed profile.
    ///
    /// The wizard validates each step before it can be passed, so by the
    /// time this runs the numeric fields parse cleanly; the fallible
    /// signature exists for callers that bypass the step gating.
    fn try_from(values: &FieldValues) -> Result<Self, ValidationError> {
        let established_year: i32 = parse_number(Field::EstablishedYear, &values.established_year)?;
        let target_leads: u32 = parse_number(Field::TargetLeads, &values.target_leads)?;
        let target_disbursement_amount: i64 = parse_number(
            Field::TargetDisbursementAmount,
            &values.target_disbursement_amount,
        )?;

        let gst_number = match values.gst_number.trim() {
            "" => None,
            gst => Some(gst.to_string()),
        };

        Ok(Self {
            name: values.name.clone(),
            company_name: values.company_name.clone(),
            intermediary_type: values.intermediary_type.clone(),
            contact_person: values.contact_person.clone(),
            email: values.email.clone(),
            phone: values.phone.clone(),
            address: values.address.clone(),
            city: values.city.clone(),
            state: values.state.clone(),
            pincode: values.pincode.clone(),
            pan_number: values.pan_number.clone(),
            gst_number,
            account_number: values.account_number.clone(),
            ifsc_code: values.ifsc_code.clone(),
            bank_name: values.bank_name.clone(),
            branch_name: values.branch_name.clone(),
            established_year,
            target_leads,
            target_disbursement_amount,
            onboarded_at: Utc::now(),
        })
    }
}

fn parse_number<T: std::str::FromStr>(field: Field, raw: &str) -> Result<T, ValidationError> {
    raw.trim().parse().map_err(|_| {
        ValidationError::new(
            field,
            ValidationErrorKind::NotANumber,
            format!("'{raw}' is not a valid number."),
        )
    })
}

/// Read-only view of the agreement's input fields, snapshotted when the
/// agreement is generated. Never mutated by the document renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgreementPreviewData {
    pub name: String,
    pub company_name: String,
    pub email: String,
}

impl AgreementPreviewData {
    /// Snapshot the agreement fields from the current form values.
    pub fn from_values(values: &FieldValues) -> Self {
        Self {
            name: values.name.clone(),
            company_name: values.company_name.clone(),
            email: values.email.clone(),
        }
    }
}
