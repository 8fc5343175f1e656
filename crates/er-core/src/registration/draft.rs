//! Registration draft: the single mutable record shared across wizard steps.
//!
//! 报名草稿：各步骤共享的唯一可变记录。

use std::collections::BTreeMap;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use super::error::ValidationError;
use super::state_machine::WizardStep;

/// Flat key/value record handed to the submission provider.
pub type SubmissionRecord = BTreeMap<String, String>;

/// Payment lifecycle of the draft.
///
/// 支付状态。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    #[default]
    Pending,
    Completed,
    Failed,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Pending => "pending",
            PaymentStatus::Completed => "completed",
            PaymentStatus::Failed => "failed",
        }
    }
}

impl std::fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The registration record being filled in by the applicant.
///
/// Owned exclusively by the wizard controller; step handlers only see it by
/// reference and describe their changes as a [`DraftPatch`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationDraft {
    pub identity_number: String,
    pub otp_code: String,
    pub full_name: String,
    pub date_of_birth: String,
    pub mobile_number: String,
    pub email_address: String,
    pub exam_type: String,
    pub exam_center: String,
    pub payment_status: PaymentStatus,
    pub fee_amount: u64,
}

impl RegistrationDraft {
    /// Shallow-merge `patch` into the draft. Fields absent from the patch are kept.
    pub fn merge(&mut self, patch: DraftPatch) {
        let DraftPatch {
            identity_number,
            otp_code,
            full_name,
            date_of_birth,
            mobile_number,
            email_address,
            exam_type,
            exam_center,
            payment_status,
            fee_amount,
        } = patch;

        if let Some(v) = identity_number {
            self.identity_number = v;
        }
        if let Some(v) = otp_code {
            self.otp_code = v;
        }
        if let Some(v) = full_name {
            self.full_name = v;
        }
        if let Some(v) = date_of_birth {
            self.date_of_birth = v;
        }
        if let Some(v) = mobile_number {
            self.mobile_number = v;
        }
        if let Some(v) = email_address {
            self.email_address = v;
        }
        if let Some(v) = exam_type {
            self.exam_type = v;
        }
        if let Some(v) = exam_center {
            self.exam_center = v;
        }
        if let Some(v) = payment_status {
            self.payment_status = v;
        }
        if let Some(v) = fee_amount {
            self.fee_amount = v;
        }
    }

    /// Flatten the draft into the submission schema.
    ///
    /// Keys are consumed verbatim by the submission provider.
    pub fn to_submission_record(&self, submitted_at: DateTime<Utc>) -> SubmissionRecord {
        let mut record = SubmissionRecord::new();
        record.insert("entry.name".into(), self.full_name.clone());
        record.insert("entry.aadhaar".into(), self.identity_number.clone());
        record.insert("entry.dob".into(), self.date_of_birth.clone());
        record.insert("entry.mobile".into(), self.mobile_number.clone());
        record.insert("entry.email".into(), self.email_address.clone());
        record.insert("entry.exam".into(), self.exam_type.clone());
        record.insert("entry.center".into(), self.exam_center.clone());
        record.insert("entry.payment".into(), self.payment_status.to_string());
        record.insert(
            "entry.timestamp".into(),
            submitted_at.to_rfc3339_opts(SecondsFormat::Millis, true),
        );
        record
    }
}

/// Partial update to a [`RegistrationDraft`]; `None` means "leave unchanged".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DraftPatch {
    pub identity_number: Option<String>,
    pub otp_code: Option<String>,
    pub full_name: Option<String>,
    pub date_of_birth: Option<String>,
    pub mobile_number: Option<String>,
    pub email_address: Option<String>,
    pub exam_type: Option<String>,
    pub exam_center: Option<String>,
    pub payment_status: Option<PaymentStatus>,
    pub fee_amount: Option<u64>,
}

impl DraftPatch {
    pub fn is_empty(&self) -> bool {
        *self == DraftPatch::default()
    }

    /// Fails on the first field the applicant may not type in on `step`.
    ///
    /// Identity fields belong to the identity step and personal fields to the
    /// personal details step. Exam selection, fee and payment status are only
    /// ever written by the catalog and the payment provider.
    pub fn check_editable_on(&self, step: WizardStep) -> Result<(), ValidationError> {
        let fields: [(&'static str, bool, Option<WizardStep>); 10] = [
            ("identity_number", self.identity_number.is_some(), Some(WizardStep::Identity)),
            ("otp_code", self.otp_code.is_some(), Some(WizardStep::Identity)),
            ("full_name", self.full_name.is_some(), Some(WizardStep::PersonalInfo)),
            ("date_of_birth", self.date_of_birth.is_some(), Some(WizardStep::PersonalInfo)),
            ("mobile_number", self.mobile_number.is_some(), Some(WizardStep::PersonalInfo)),
            ("email_address", self.email_address.is_some(), Some(WizardStep::PersonalInfo)),
            ("exam_type", self.exam_type.is_some(), None),
            ("exam_center", self.exam_center.is_some(), None),
            ("payment_status", self.payment_status.is_some(), None),
            ("fee_amount", self.fee_amount.is_some(), None),
        ];

        match fields
            .into_iter()
            .find(|(_, present, owner)| *present && *owner != Some(step))
        {
            Some((field, _, _)) => Err(ValidationError::FieldNotEditable { field, step }),
            None => Ok(()),
        }
    }

    pub fn identity_number(mut self, value: impl Into<String>) -> Self {
        self.identity_number = Some(value.into());
        self
    }

    pub fn otp_code(mut self, value: impl Into<String>) -> Self {
        self.otp_code = Some(value.into());
        self
    }

    pub fn full_name(mut self, value: impl Into<String>) -> Self {
        self.full_name = Some(value.into());
        self
    }

    pub fn date_of_birth(mut self, value: impl Into<String>) -> Self {
        self.date_of_birth = Some(value.into());
        self
    }

    pub fn mobile_number(mut self, value: impl Into<String>) -> Self {
        self.mobile_number = Some(value.into());
        self
    }

    pub fn email_address(mut self, value: impl Into<String>) -> Self {
        self.email_address = Some(value.into());
        self
    }

    pub fn exam_type(mut self, value: impl Into<String>) -> Self {
        self.exam_type = Some(value.into());
        self
    }

    pub fn exam_center(mut self, value: impl Into<String>) -> Self {
        self.exam_center = Some(value.into());
        self
    }

    pub fn payment_status(mut self, value: PaymentStatus) -> Self {
        self.payment_status = Some(value);
        self
    }

    pub fn fee_amount(mut self, value: u64) -> Self {
        self.fee_amount = Some(value);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn merge_preserves_unspecified_fields() {
        let mut draft = RegistrationDraft {
            full_name: "Asha Rao".into(),
            mobile_number: "9876543210".into(),
            ..Default::default()
        };

        draft.merge(DraftPatch::default().email_address("asha@example.com"));

        assert_eq!(draft.full_name, "Asha Rao");
        assert_eq!(draft.mobile_number, "9876543210");
        assert_eq!(draft.email_address, "asha@example.com");
        assert_eq!(draft.payment_status, PaymentStatus::Pending);
    }

    #[test]
    fn merge_of_disjoint_patches_is_order_independent() {
        let a = DraftPatch::default()
            .full_name("A B")
            .date_of_birth("2000-01-01");
        let b = DraftPatch::default()
            .exam_type("gate")
            .fee_amount(1800)
            .payment_status(PaymentStatus::Completed);

        let mut ab = RegistrationDraft::default();
        ab.merge(a.clone());
        ab.merge(b.clone());

        let mut ba = RegistrationDraft::default();
        ba.merge(b);
        ba.merge(a);

        assert_eq!(ab, ba);
    }

    #[test]
    fn empty_patch_is_a_no_op() {
        let mut draft = RegistrationDraft {
            otp_code: "654321".into(),
            ..Default::default()
        };
        let before = draft.clone();
        assert!(DraftPatch::default().is_empty());

        draft.merge(DraftPatch::default());

        assert_eq!(draft, before);
    }

    #[test]
    fn submission_record_uses_entry_schema() {
        let draft = RegistrationDraft {
            identity_number: "123456789012".into(),
            full_name: "A B".into(),
            date_of_birth: "2000-01-01".into(),
            mobile_number: "9876543210".into(),
            email_address: "a@b.com".into(),
            exam_type: "gate".into(),
            exam_center: "delhi-01".into(),
            payment_status: PaymentStatus::Completed,
            fee_amount: 1800,
            ..Default::default()
        };
        let at = Utc.with_ymd_and_hms(2024, 3, 1, 10, 30, 0).unwrap();

        let record = draft.to_submission_record(at);

        assert_eq!(record.len(), 9);
        assert_eq!(record["entry.name"], "A B");
        assert_eq!(record["entry.aadhaar"], "123456789012");
        assert_eq!(record["entry.payment"], "completed");
        assert_eq!(record["entry.timestamp"], "2024-03-01T10:30:00.000Z");
        assert!(!record.contains_key("entry.otp"));
    }

    #[test]
    fn applicant_edits_are_limited_to_the_owning_step() {
        let personal = DraftPatch::default().full_name("A B").email_address("a@b.com");
        assert_eq!(personal.check_editable_on(WizardStep::PersonalInfo), Ok(()));
        assert_eq!(
            personal.check_editable_on(WizardStep::Review),
            Err(ValidationError::FieldNotEditable {
                field: "full_name",
                step: WizardStep::Review,
            })
        );

        let identity = DraftPatch::default().identity_number("123456789012");
        assert_eq!(identity.check_editable_on(WizardStep::Identity), Ok(()));
        assert!(identity.check_editable_on(WizardStep::Payment).is_err());
        assert_eq!(DraftPatch::default().check_editable_on(WizardStep::Review), Ok(()));
    }

    #[test]
    fn catalog_and_payment_fields_are_never_applicant_editable() {
        let patches = [
            ("exam_type", DraftPatch::default().exam_type("cat")),
            ("exam_center", DraftPatch::default().exam_center("pune-01")),
            ("payment_status", DraftPatch::default().payment_status(PaymentStatus::Completed)),
            ("fee_amount", DraftPatch::default().fee_amount(1)),
        ];
        for (field, patch) in patches {
            for step in WizardStep::ORDER {
                assert_eq!(
                    patch.check_editable_on(step),
                    Err(ValidationError::FieldNotEditable { field, step })
                );
            }
        }
    }
}
