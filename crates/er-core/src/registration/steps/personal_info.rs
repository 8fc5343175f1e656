//! Personal details step and identity-record auto-fill.

use serde::Serialize;

use crate::ports::IdentityProfile;
use crate::registration::draft::{DraftPatch, RegistrationDraft};
use crate::registration::error::ValidationError;
use crate::registration::validation;

/// Personal details step.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PersonalInfoStep {
    prefill_requested: bool,
}

impl PersonalInfoStep {
    /// Checks name, date of birth, mobile and email, in that order.
    pub fn validate(&self, draft: &RegistrationDraft) -> Result<(), ValidationError> {
        validation::validate_full_name(&draft.full_name)?;
        validation::validate_date_of_birth(&draft.date_of_birth)?;
        validation::validate_mobile_number(&draft.mobile_number)?;
        validation::validate_email(&draft.email_address)?;
        Ok(())
    }

    pub fn prefill_requested(&self) -> bool {
        self.prefill_requested
    }

    /// True at most once per step entry, and only while the name is still empty.
    pub fn wants_prefill(&self, draft: &RegistrationDraft) -> bool {
        !self.prefill_requested
            && !draft.identity_number.is_empty()
            && draft.full_name.is_empty()
    }

    pub fn mark_prefill_requested(&mut self) {
        self.prefill_requested = true;
    }

    /// Fields from `profile` that may be written without overwriting user input.
    pub fn prefill_patch(draft: &RegistrationDraft, profile: &IdentityProfile) -> DraftPatch {
        let mut patch = DraftPatch::default();
        if draft.full_name.is_empty() && !profile.full_name.is_empty() {
            patch.full_name = Some(profile.full_name.clone());
        }
        if draft.date_of_birth.is_empty() && !profile.date_of_birth.is_empty() {
            patch.date_of_birth = Some(profile.date_of_birth.clone());
        }
        patch
    }
}
