//! Wizard field identifiers and the raw form-value record.

use serde::{Deserialize, Serialize};

/// The closed set of fields collected across the onboarding wizard.
///
/// Wire names are camelCase so JSON payloads line up with the dashboard
/// frontend's form field names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Name,
    CompanyName,
    Type,
    ContactPerson,
    Email,
    Phone,
    Address,
    City,
    State,
    Pincode,
    PanNumber,
    GstNumber,
    AccountNumber,
    IfscCode,
    BankName,
    BranchName,
    EstablishedYear,
    TargetLeads,
    TargetDisbursementAmount,
}

impl Field {
    /// All fields, in form order.
    pub const ALL: [Field; 19] = [
        Field::Name,
        Field::CompanyName,
        Field::Type,
        Field::ContactPerson,
        Field::Email,
        Field::Phone,
        Field::Address,
        Field::City,
        Field::State,
        Field::Pincode,
        Field::PanNumber,
        Field::GstNumber,
        Field::AccountNumber,
        Field::IfscCode,
        Field::BankName,
        Field::BranchName,
        Field::EstablishedYear,
        Field::TargetLeads,
        Field::TargetDisbursementAmount,
    ];

    /// Wire name (camelCase, matching the serde rename).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::CompanyName => "companyName",
            Self::Type => "type",
            Self::ContactPerson => "contactPerson",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Address => "address",
            Self::City => "city",
            Self::State => "state",
            Self::Pincode => "pincode",
            Self::PanNumber => "panNumber",
            Self::GstNumber => "gstNumber",
            Self::AccountNumber => "accountNumber",
            Self::IfscCode => "ifscCode",
            Self::BankName => "bankName",
            Self::BranchName => "branchName",
            Self::EstablishedYear => "establishedYear",
            Self::TargetLeads => "targetLeads",
            Self::TargetDisbursementAmount => "targetDisbursementAmount",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Field {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}

/// A field name that is not part of the wizard's field set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown wizard field: {0}")]
pub struct UnknownField(pub String);

/// Raw text values for every wizard field, exactly as typed.
///
/// Numeric fields (`establishedYear`, `targetLeads`,
/// `targetDisbursementAmount`) stay text here; they are parsed by validation
/// and again when the typed profile is extracted after submit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldValues {
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
    pub gst_number: String,
    pub account_number: String,
    pub ifsc_code: String,
    pub bank_name: String,
    pub branch_name: String,
    pub established_year: String,
    pub target_leads: String,
    pub target_disbursement_amount: String,
}

impl Default for FieldValues {
    fn default() -> Self {
        Self {
            name: String::new(),
            company_name: String::new(),
            intermediary_type: "DSA".to_string(),
            contact_person: String::new(),
            email: String::new(),
            phone: String::new(),
            address: String::new(),
            city: String::new(),
            state: String::new(),
            pincode: String::new(),
            pan_number: String::new(),
            gst_number: String::new(),
            account_number: String::new(),
            ifsc_code: String::new(),
            bank_name: String::new(),
            branch_name: String::new(),
            established_year: String::new(),
            target_leads: "100".to_string(),
            target_disbursement_amount: "6000000".to_string(),
        }
    }
}

impl FieldValues {
    /// Current raw value of a field.
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::CompanyName => &self.company_name,
            Field::Type => &self.intermediary_type,
            Field::ContactPerson => &self.contact_person,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::Address => &self.address,
            Field::City => &self.city,
            Field::State => &self.state,
            Field::Pincode => &self.pincode,
            Field::PanNumber => &self.pan_number,
            Field::GstNumber => &self.gst_number,
            Field::AccountNumber => &self.account_number,
            Field::IfscCode => &self.ifsc_code,
            Field::BankName => &self.bank_name,
            Field::BranchName => &self.branch_name,
            Field::EstablishedYear => &self.established_year,
            Field::TargetLeads => &self.target_leads,
            Field::TargetDisbursementAmount => &self.target_disbursement_amount,
        }
    }

    /// Store a raw value verbatim. No validation happens here.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Name => self.name = value,
            Field::CompanyName => self.company_name = value,
            Field::Type => self.intermediary_type = value,
            Field::ContactPerson => self.contact_person = value,
            Field::Email => self.email = value,
            Field::Phone => self.phone = value,
            Field::Address => self.address = value,
            Field::City => self.city = value,
            Field::State => self.state = value,
            Field::Pincode => self.pincode = value,
            Field::PanNumber => self.pan_number = value,
            Field::GstNumber => self.gst_number = value,
            Field::AccountNumber => self.account_number = value,
            Field::IfscCode => self.ifsc_code = value,
            Field::BankName => self.bank_name = value,
            Field::BranchName => self.branch_name = value,
            Field::EstablishedYear => self.established_year = value,
            Field::TargetLeads => self.target_leads = value,
            Field::TargetDisbursementAmount => self.target_disbursement_amount = value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_display_matches_serde() {
        for field in Field::ALL {
            let json = serde_json::to_string(&field).unwrap();
            assert_eq!(
                json,
                format!("\"{field}\""),
                "Display and serde should match for {field:?}"
            );
        }
    }

    #[test]
    fn field_from_str_roundtrip() {
        for field in Field::ALL {
            let parsed: Field = field.as_str().parse().unwrap();
            assert_eq!(parsed, field);
        }
        assert!("notAField".parse::<Field>().is_err());
    }

    #[test]
    fn defaults_match_the_blank_form() {
        let values = FieldValues::default();
        assert_eq!(values.get(Field::Type), "DSA");
        assert_eq!(values.get(Field::TargetLeads), "100");
        assert_eq!(values.get(Field::TargetDisbursementAmount), "6000000");
        assert_eq!(values.get(Field::Name), "");
        assert_eq!(values.get(Field::GstNumber), "");
    }

    #[test]
    fn set_stores_verbatim() {
        let mut values = FieldValues::default();
        values.set(Field::EstablishedYear, "not a year");
        assert_eq!(values.get(Field::EstablishedYear), "not a year");
        values.set(Field::Email, "  spaced@example.com  ");
        assert_eq!(values.get(Field::Email), "  spaced@example.com  ");
    }

    #[test]
    fn serde_uses_form_field_names() {
        let values = FieldValues::default();
        let json = serde_json::to_value(&values).unwrap();
        assert_eq!(json["type"], "DSA");
        assert_eq!(json["targetDisbursementAmount"], "6000000");
        assert!(json.get("intermediary_type").is_none());
    }
}
