//! Field validation schema — pure pass/fail rules for each wizard field.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{ValidationError, ValidationErrorKind};

use super::field::{Field, FieldValues};
use super::steps::WizardStep;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email regex compiles"));

/// Validate a single field's raw value.
///
/// Pure: no state is read or written. Numeric fields are parsed from text
/// before any range check applies, so a garbled number reports `NotANumber`
/// rather than `OutOfRange`.
pub fn validate(field: Field, raw: &str) -> Result<(), ValidationError> {
    let value = raw.trim();

    // gstNumber is the only optional field; an empty value always passes.
    if value.is_empty() {
        if field == Field::GstNumber {
            return Ok(());
        }
        return Err(required(field));
    }

    match field {
        Field::Name => min_len(field, value, 2, "Name must be at least 2 characters."),
        Field::CompanyName => min_len(
            field,
            value,
            2,
            "Company name must be at least 2 characters.",
        ),
        // Any non-empty category (DSA / Broker / Agent / ...) is accepted.
        Field::Type => Ok(()),
        Field::ContactPerson => min_len(field, value, 2, "Contact person name is required."),
        Field::Email => {
            if EMAIL_RE.is_match(value) {
                Ok(())
            } else {
                Err(ValidationError::new(
                    field,
                    ValidationErrorKind::InvalidFormat,
                    "Please enter a valid email address.",
                ))
            }
        }
        Field::Phone => validate_phone(value),
        Field::Address => min_len(field, value, 5, "Address is required."),
        Field::City => min_len(field, value, 2, "City is required."),
        Field::State => min_len(field, value, 2, "State is required."),
        Field::Pincode => min_len(field, value, 6, "Valid pincode is required."),
        Field::PanNumber => validate_pan(value),
        Field::GstNumber => Ok(()),
        Field::AccountNumber => min_len(field, value, 10, "Valid account number is required."),
        Field::IfscCode => min_len(field, value, 11, "Valid IFSC code is required."),
        Field::BankName => min_len(field, value, 2, "Bank name is required."),
        Field::BranchName => min_len(field, value, 2, "Branch name is required."),
        Field::EstablishedYear => validate_year(value),
        Field::TargetLeads => validate_target(
            field,
            value,
            "Please enter a valid number.",
            "Target leads cannot be negative.",
        ),
        Field::TargetDisbursementAmount => validate_target(
            field,
            value,
            "Please enter a valid amount.",
            "Target disbursement amount cannot be negative.",
        ),
    }
}

/// Validate every required field of a step, in the step's declared order.
///
/// Returns all failures in one pass so the caller can display every error
/// simultaneously. An empty vec means the step is clear to advance.
pub fn validate_step(step: WizardStep, values: &FieldValues) -> Vec<ValidationError> {
    step.required_fields()
        .iter()
        .filter_map(|&field| validate(field, values.get(field)).err())
        .collect()
}

fn required(field: Field) -> ValidationError {
    ValidationError::new(
        field,
        ValidationErrorKind::Required,
        "This field is required.",
    )
}

fn min_len(field: Field, value: &str, min: usize, message: &str) -> Result<(), ValidationError> {
    if value.chars().count() < min {
        Err(ValidationError::new(
            field,
            ValidationErrorKind::TooShort,
            message,
        ))
    } else {
        Ok(())
    }
}

fn validate_phone(value: &str) -> Result<(), ValidationError> {
    // Accept formatting characters, but the digits are what count.
    let stripped: String = value
        .chars()
        .filter(|c| !matches!(c, ' ' | '-' | '+' | '(' | ')'))
        .collect();
    if !stripped.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::new(
            Field::Phone,
            ValidationErrorKind::InvalidFormat,
            "Phone number may only contain digits.",
        ));
    }
    if stripped.len() < 10 {
        return Err(ValidationError::new(
            Field::Phone,
            ValidationErrorKind::TooShort,
            "Phone number must be at least 10 digits.",
        ));
    }
    Ok(())
}

fn validate_pan(value: &str) -> Result<(), ValidationError> {
    if !value.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(ValidationError::new(
            Field::PanNumber,
            ValidationErrorKind::InvalidFormat,
            "PAN number must be alphanumeric.",
        ));
    }
    min_len(Field::PanNumber, value, 10, "Valid PAN number is required.")
}

fn validate_year(value: &str) -> Result<(), ValidationError> {
    let year: i32 = value.parse().map_err(|_| {
        ValidationError::new(
            Field::EstablishedYear,
            ValidationErrorKind::NotANumber,
            "Please enter a valid year.",
        )
    })?;
    if year <= 1900 {
        return Err(ValidationError::new(
            Field::EstablishedYear,
            ValidationErrorKind::OutOfRange,
            "Established year must be after 1900.",
        ));
    }
    Ok(())
}

fn validate_target(
    field: Field,
    value: &str,
    parse_message: &str,
    range_message: &str,
) -> Result<(), ValidationError> {
    let parsed: i64 = value
        .parse()
        .map_err(|_| ValidationError::new(field, ValidationErrorKind::NotANumber, parse_message))?;
    if parsed < 0 {
        return Err(ValidationError::new(
            field,
            ValidationErrorKind::OutOfRange,
            range_message,
        ));
    }
    Ok(())
}
