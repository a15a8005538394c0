//! Wizard step definitions — the five ordered stages and their field sets.

use serde::{Deserialize, Serialize};

use crate::error::OnboardingError;

use super::field::Field;

/// One stage of the onboarding wizard.
///
/// The sequence is totally ordered BasicInfo(1) → Business(2) → Banking(3) →
/// DocumentsTargets(4) → Agreement(5). Agreement has no form fields; its
/// advance-gate is the signature lifecycle, not validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    BasicInfo,
    Business,
    Banking,
    DocumentsTargets,
    Agreement,
}

impl WizardStep {
    /// 1-based position in the wizard.
    pub fn index(&self) -> u8 {
        match self {
            Self::BasicInfo => 1,
            Self::Business => 2,
            Self::Banking => 3,
            Self::DocumentsTargets => 4,
            Self::Agreement => 5,
        }
    }

    /// Look a step up by its 1-based index.
    ///
    /// An index outside 1..=5 is a caller bug, reported as `InvalidStep`.
    pub fn from_index(index: u8) -> Result<Self, OnboardingError> {
        match index {
            1 => Ok(Self::BasicInfo),
            2 => Ok(Self::Business),
            3 => Ok(Self::Banking),
            4 => Ok(Self::DocumentsTargets),
            5 => Ok(Self::Agreement),
            _ => Err(OnboardingError::InvalidStep { index }),
        }
    }

    /// Fields that must pass validation before this step can be advanced.
    pub fn required_fields(&self) -> &'static [Field] {
        match self {
            Self::BasicInfo => &[
                Field::Name,
                Field::CompanyName,
                Field::Type,
                Field::ContactPerson,
                Field::Email,
                Field::Phone,
            ],
            Self::Business => &[
                Field::Address,
                Field::City,
                Field::State,
                Field::Pincode,
                Field::PanNumber,
                Field::GstNumber,
                Field::EstablishedYear,
            ],
            Self::Banking => &[
                Field::AccountNumber,
                Field::IfscCode,
                Field::BankName,
                Field::BranchName,
            ],
            Self::DocumentsTargets => &[Field::TargetLeads, Field::TargetDisbursementAmount],
            Self::Agreement => &[],
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::BasicInfo => "Basic Information",
            Self::Business => "Business Details",
            Self::Banking => "Banking Information",
            Self::DocumentsTargets => "Document Upload & Targets",
            Self::Agreement => "Partnership Agreement",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::BasicInfo => "Enter the basic details of the intermediary",
            Self::Business => "Enter business and registration details",
            Self::Banking => "Enter banking information for commission transfers",
            Self::DocumentsTargets => "Upload required documents and set performance targets",
            Self::Agreement => "Review and sign the partnership agreement",
        }
    }

    pub fn is_first(&self) -> bool {
        matches!(self, Self::BasicInfo)
    }

    pub fn is_last(&self) -> bool {
        matches!(self, Self::Agreement)
    }

    /// The following step, if any.
    pub fn next(&self) -> Option<WizardStep> {
        match self {
            Self::BasicInfo => Some(Self::Business),
            Self::Business => Some(Self::Banking),
            Self::Banking => Some(Self::DocumentsTargets),
            Self::DocumentsTargets => Some(Self::Agreement),
            Self::Agreement => None,
        }
    }

    /// The preceding step, if any.
    pub fn prev(&self) -> Option<WizardStep> {
        match self {
            Self::BasicInfo => None,
            Self::Business => Some(Self::BasicInfo),
            Self::Banking => Some(Self::Business),
            Self::DocumentsTargets => Some(Self::Banking),
            Self::Agreement => Some(Self::DocumentsTargets),
        }
    }
}

impl std::fmt::Display for WizardStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.title(), self.index())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [WizardStep; 5] = [
        WizardStep::BasicInfo,
        WizardStep::Business,
        WizardStep::Banking,
        WizardStep::DocumentsTargets,
        WizardStep::Agreement,
    ];

    #[test]
    fn index_roundtrip() {
        for step in ALL {
            assert_eq!(WizardStep::from_index(step.index()).unwrap(), step);
        }
        assert!(matches!(
            WizardStep::from_index(0),
            Err(OnboardingError::InvalidStep { index: 0 })
        ));
        assert!(matches!(
            WizardStep::from_index(6),
            Err(OnboardingError::InvalidStep { index: 6 })
        ));
    }

    #[test]
    fn boundaries() {
        assert!(WizardStep::BasicInfo.is_first());
        assert!(!WizardStep::BasicInfo.is_last());
        assert!(WizardStep::Agreement.is_last());
        assert!(!WizardStep::Agreement.is_first());
    }

    #[test]
    fn next_walks_forward_in_order() {
        let mut current = WizardStep::BasicInfo;
        let mut seen = vec![current];
        while let Some(next) = current.next() {
            assert_eq!(next.index(), current.index() + 1);
            seen.push(next);
            current = next;
        }
        assert_eq!(seen, ALL);
    }

    #[test]
    fn prev_mirrors_next() {
        for step in ALL {
            if let Some(next) = step.next() {
                assert_eq!(next.prev(), Some(step));
            }
        }
        assert_eq!(WizardStep::BasicInfo.prev(), None);
    }

    #[test]
    fn every_field_is_required_by_exactly_one_step() {
        for field in Field::ALL {
            let owners = ALL
                .iter()
                .filter(|s| s.required_fields().contains(&field))
                .count();
            assert_eq!(owners, 1, "{field} should belong to exactly one step");
        }
    }

    #[test]
    fn agreement_step_requires_no_fields() {
        assert!(WizardStep::Agreement.required_fields().is_empty());
    }
}
