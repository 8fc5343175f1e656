//! Review & Submit step and the confirmation it produces.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::registration::catalog;
use crate::registration::draft::{PaymentStatus, RegistrationDraft, SubmissionRecord};
use crate::registration::error::ValidationError;
use crate::registration::id::RegistrationId;

/// Summary shown once the registration has been accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Confirmation {
    pub registration_id: RegistrationId,
    pub submitted_at: DateTime<Utc>,
    pub full_name: String,
    pub exam: String,
    pub center: String,
    pub email_address: String,
    pub mobile_number: String,
}

impl Confirmation {
    pub fn new(
        registration_id: RegistrationId,
        draft: &RegistrationDraft,
        submitted_at: DateTime<Utc>,
    ) -> Self {
        let exam = catalog::find_exam(&draft.exam_type)
            .map(|exam| exam.label.to_string())
            .unwrap_or_else(|| draft.exam_type.clone());
        let center = catalog::find_center(&draft.exam_center)
            .map(|center| center.label.to_string())
            .unwrap_or_else(|| draft.exam_center.clone());

        Self {
            registration_id,
            submitted_at,
            full_name: draft.full_name.clone(),
            exam,
            center,
            email_address: draft.email_address.clone(),
            mobile_number: draft.mobile_number.clone(),
        }
    }

    /// Human-readable confirmation lines.
    pub fn summary_lines(&self) -> Vec<String> {
        vec![
            format!("Registration ID: {}", self.registration_id),
            format!("Name: {}", self.full_name),
            format!("Exam: {}", self.exam),
            format!("Center: {}", self.center),
            format!("Date: {}", self.submitted_at.format("%Y-%m-%d")),
            format!("Confirmation email sent to {}", self.email_address),
            format!("SMS confirmation sent to {}", self.mobile_number),
        ]
    }
}

/// Review and submit step. Terminal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReviewStep {
    acknowledged: bool,
    confirmation: Option<Confirmation>,
}

impl ReviewStep {
    pub fn acknowledged(&self) -> bool {
        self.acknowledged
    }

    pub fn set_acknowledged(&mut self, acknowledged: bool) {
        self.acknowledged = acknowledged;
    }

    pub fn submitted(&self) -> bool {
        self.confirmation.is_some()
    }

    pub fn confirmation(&self) -> Option<&Confirmation> {
        self.confirmation.as_ref()
    }

    /// Flattens the draft for the submission provider.
    pub fn begin_submission(
        &self,
        draft: &RegistrationDraft,
        submitted_at: DateTime<Utc>,
    ) -> Result<SubmissionRecord, ValidationError> {
        if self.submitted() {
            return Err(ValidationError::AlreadySubmitted);
        }
        if !self.acknowledged {
            return Err(ValidationError::AcknowledgementRequired);
        }
        if draft.payment_status != PaymentStatus::Completed {
            return Err(ValidationError::PaymentNotCompleted);
        }
        Ok(draft.to_submission_record(submitted_at))
    }

    pub fn complete(&mut self, confirmation: Confirmation) {
        self.confirmation = Some(confirmation);
    }

    pub fn check_advance(&self) -> Result<(), ValidationError> {
        Err(ValidationError::FinalStep)
    }
}
