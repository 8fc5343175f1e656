//! Payment step: method, staged details and the charge request.

use serde::Serialize;

use crate::ports::ChargeRequest;
use crate::registration::draft::{DraftPatch, PaymentStatus, RegistrationDraft};
use crate::registration::error::ValidationError;
use crate::registration::fees::FeeBreakdown;
use crate::registration::payment::{CardDetails, PaymentDetails, PaymentMethod};

/// Payment step: method selection, staged details, and the charge itself.
///
/// Staged details live here, not in the draft, and are dropped with the step.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PaymentStep {
    method: Option<PaymentMethod>,
    card: CardDetails,
    upi_id: String,
    bank: String,
}

impl PaymentStep {
    pub fn method(&self) -> Option<PaymentMethod> {
        self.method
    }

    pub fn select_method(&mut self, method: PaymentMethod) {
        self.method = Some(method);
    }

    pub fn stage_card(&mut self, card: CardDetails) {
        self.card = card;
    }

    pub fn stage_upi_id(&mut self, upi_id: impl Into<String>) {
        self.upi_id = upi_id.into();
    }

    pub fn stage_bank(&mut self, bank: impl Into<String>) {
        self.bank = bank.into();
    }

    pub fn fees(draft: &RegistrationDraft) -> FeeBreakdown {
        FeeBreakdown::compute(draft.fee_amount)
    }

    /// Builds the charge for the current selection, or names what is missing.
    pub fn begin_charge(&self, draft: &RegistrationDraft) -> Result<ChargeRequest, ValidationError> {
        if draft.payment_status == PaymentStatus::Completed {
            return Err(ValidationError::AlreadyPaid);
        }
        let method = self.method.ok_or(ValidationError::PaymentMethodRequired)?;
        let details = match method {
            PaymentMethod::Card => {
                self.card.validate()?;
                PaymentDetails::Card(self.card.clone())
            }
            PaymentMethod::Upi => PaymentDetails::Upi {
                upi_id: non_empty(&self.upi_id),
            },
            PaymentMethod::Netbanking => PaymentDetails::Netbanking {
                bank: non_empty(&self.bank),
            },
            PaymentMethod::Wallet => PaymentDetails::Wallet,
        };

        Ok(ChargeRequest {
            amount: Self::fees(draft).total,
            method,
            details,
        })
    }

    /// Status written when a new attempt is dispatched.
    pub fn attempt_patch() -> DraftPatch {
        DraftPatch::default().payment_status(PaymentStatus::Pending)
    }

    /// Status written once the provider has answered.
    pub fn settlement_patch(succeeded: bool) -> DraftPatch {
        let status = if succeeded {
            PaymentStatus::Completed
        } else {
            PaymentStatus::Failed
        };
        DraftPatch::default().payment_status(status)
    }

    pub fn check_advance(&self, draft: &RegistrationDraft) -> Result<(), ValidationError> {
        if draft.payment_status == PaymentStatus::Completed {
            Ok(())
        } else {
            Err(ValidationError::PaymentRequired)
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft_with_fee(fee: u64) -> RegistrationDraft {
        RegistrationDraft {
            exam_type: "gate".into(),
            fee_amount: fee,
            ..Default::default()
        }
    }

    fn complete_card() -> CardDetails {
        CardDetails {
            cardholder_name: "A B".into(),
            number: "4111 1111 1111 1111".into(),
            expiry: "09/28".into(),
            cvv: "321".into(),
        }
    }

    #[test]
    fn charge_requires_a_method() {
        let step = PaymentStep::default();
        assert_eq!(
            step.begin_charge(&draft_with_fee(1800)),
            Err(ValidationError::PaymentMethodRequired)
        );
    }

    #[test]
    fn card_charge_requires_complete_details() {
        let mut step = PaymentStep::default();
        step.select_method(PaymentMethod::Card);
        assert_eq!(
            step.begin_charge(&draft_with_fee(1800)),
            Err(ValidationError::CardholderNameRequired)
        );

        step.stage_card(CardDetails {
            expiry: String::new(),
            ..complete_card()
        });
        assert_eq!(
            step.begin_charge(&draft_with_fee(1800)),
            Err(ValidationError::ExpiryRequired)
        );

        step.stage_card(complete_card());
        let request = step.begin_charge(&draft_with_fee(1800)).unwrap();
        assert_eq!(request.amount, 2166);
        assert_eq!(request.method, PaymentMethod::Card);
        assert!(matches!(request.details, PaymentDetails::Card(_)));
    }

    #[test]
    fn non_card_methods_need_no_card() {
        let mut step = PaymentStep::default();
        step.select_method(PaymentMethod::Upi);
        step.stage_upi_id("  asha@upi ");
        let request = step.begin_charge(&draft_with_fee(850)).unwrap();
        assert_eq!(request.amount, 1023);
        assert_eq!(
            request.details,
            PaymentDetails::Upi {
                upi_id: Some("asha@upi".into())
            }
        );

        step.select_method(PaymentMethod::Wallet);
        assert_eq!(
            step.begin_charge(&draft_with_fee(850)).unwrap().details,
            PaymentDetails::Wallet
        );
    }

    #[test]
    fn completed_payment_cannot_be_charged_again() {
        let mut step = PaymentStep::default();
        step.select_method(PaymentMethod::Wallet);
        let mut draft = draft_with_fee(200);
        draft.merge(PaymentStep::settlement_patch(true));

        assert_eq!(step.begin_charge(&draft), Err(ValidationError::AlreadyPaid));
        assert!(step.check_advance(&draft).is_ok());
    }

    #[test]
    fn failed_payment_blocks_advance_and_allows_retry() {
        let mut step = PaymentStep::default();
        step.select_method(PaymentMethod::Netbanking);
        let mut draft = draft_with_fee(200);
        draft.merge(PaymentStep::settlement_patch(false));

        assert_eq!(draft.payment_status, PaymentStatus::Failed);
        assert_eq!(
            step.check_advance(&draft),
            Err(ValidationError::PaymentRequired)
        );
        assert!(step.begin_charge(&draft).is_ok());
    }
}
