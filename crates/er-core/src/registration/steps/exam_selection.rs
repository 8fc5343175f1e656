//! Exam type and exam center selection.

use serde::Serialize;

use crate::registration::catalog;
use crate::registration::draft::{DraftPatch, PaymentStatus, RegistrationDraft};
use crate::registration::error::ValidationError;

/// Exam type and exam center selection. No transient state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExamSelectionStep {}

impl ExamSelectionStep {
    /// Selecting an exam always rewrites the fee from the catalog.
    pub fn select_exam_type(&self, id: &str) -> Result<DraftPatch, ValidationError> {
        let exam = catalog::find_exam(id).ok_or_else(|| ValidationError::UnknownExamType {
            id: id.to_string(),
        })?;
        Ok(DraftPatch::default()
            .exam_type(exam.id)
            .fee_amount(exam.fee))
    }

    pub fn select_center(&self, id: &str) -> Result<DraftPatch, ValidationError> {
        let center = catalog::find_center(id).ok_or_else(|| ValidationError::UnknownExamCenter {
            id: id.to_string(),
        })?;
        Ok(DraftPatch::default().exam_center(center.id))
    }

    /// Selections are frozen once the fee for them has been charged.
    pub fn check_unpaid(&self, draft: &RegistrationDraft) -> Result<(), ValidationError> {
        if draft.payment_status == PaymentStatus::Completed {
            return Err(ValidationError::AlreadyPaid);
        }
        Ok(())
    }

    pub fn check_advance(&self, draft: &RegistrationDraft) -> Result<(), ValidationError> {
        if draft.exam_type.is_empty() || draft.exam_center.is_empty() {
            return Err(ValidationError::ExamSelectionIncomplete);
        }
        if catalog::find_exam(&draft.exam_type).is_none() {
            return Err(ValidationError::UnknownExamType {
                id: draft.exam_type.clone(),
            });
        }
        if catalog::find_center(&draft.exam_center).is_none() {
            return Err(ValidationError::UnknownExamCenter {
                id: draft.exam_center.clone(),
            });
        }
        Ok(())
    }
}
