//! Identity step: one-time code request and verification.

use serde::Serialize;

use crate::registration::draft::RegistrationDraft;
use crate::registration::error::ValidationError;
use crate::registration::validation;

/// Identity verification step: request a one-time code, then confirm it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IdentityStep {
    otp_sent: bool,
    otp_verified: bool,
}

impl IdentityStep {
    pub fn otp_sent(&self) -> bool {
        self.otp_sent
    }

    pub fn otp_verified(&self) -> bool {
        self.otp_verified
    }

    /// Validates the stored identity number and returns it normalized.
    ///
    /// Used for both the first request and every resend; neither touches
    /// `otp_verified`.
    pub fn begin_code_request(&self, draft: &RegistrationDraft) -> Result<String, ValidationError> {
        validation::validate_identity_number(&draft.identity_number)
    }

    pub fn code_sent(&mut self) {
        self.otp_sent = true;
    }

    /// Returns `(identity_number, code)` to hand to the verification provider.
    pub fn begin_code_verification(
        &self,
        draft: &RegistrationDraft,
    ) -> Result<(String, String), ValidationError> {
        validation::validate_verification_code(&draft.otp_code)?;
        if !self.otp_sent {
            return Err(ValidationError::CodeNotRequested);
        }
        let identity_number = validation::validate_identity_number(&draft.identity_number)?;
        Ok((identity_number, draft.otp_code.clone()))
    }

    pub fn code_verified(&mut self) {
        self.otp_verified = true;
    }

    /// A different identity number invalidates any code sent or verified for the old one.
    pub fn identity_number_changed(&mut self) {
        self.otp_sent = false;
        self.otp_verified = false;
    }

    pub fn check_advance(&self) -> Result<(), ValidationError> {
        if self.otp_sent && self.otp_verified {
            Ok(())
        } else {
            Err(ValidationError::IdentityNotVerified)
        }
    }
}
