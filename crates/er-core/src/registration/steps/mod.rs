//! Step handlers.
//!
//! Each handler owns the transient state of one wizard step and validates its
//! slice of the draft. Handlers are pure: they never call providers themselves,
//! they return what to ask a provider and how to apply the answer.
//!
//! 步骤处理器：纯逻辑，不包含副作用。

mod exam_selection;
mod identity;
mod payment;
mod personal_info;
mod review;

pub use exam_selection::ExamSelectionStep;
pub use identity::IdentityStep;
pub use payment::PaymentStep;
pub use personal_info::PersonalInfoStep;
pub use review::{Confirmation, ReviewStep};

use serde::Serialize;

use super::draft::RegistrationDraft;
use super::error::ValidationError;
use super::state_machine::WizardStep;

/// The handler bound to the current step, with its transient state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "step", rename_all = "snake_case")]
pub enum ActiveStep {
    Identity(IdentityStep),
    PersonalInfo(PersonalInfoStep),
    ExamSelection(ExamSelectionStep),
    Payment(PaymentStep),
    Review(ReviewStep),
}

macro_rules! step_accessor {
    ($name:ident, $variant:ident, $ty:ty) => {
        pub fn $name(&mut self) -> Result<&mut $ty, ValidationError> {
            let actual = self.step();
            match self {
                ActiveStep::$variant(handler) => Ok(handler),
                _ => Err(ValidationError::WrongStep {
                    expected: WizardStep::$variant,
                    actual,
                }),
            }
        }
    };
}

impl ActiveStep {
    /// Fresh handler for `step`; transient state always starts empty.
    pub fn enter(step: WizardStep) -> Self {
        match step {
            WizardStep::Identity => ActiveStep::Identity(IdentityStep::default()),
            WizardStep::PersonalInfo => ActiveStep::PersonalInfo(PersonalInfoStep::default()),
            WizardStep::ExamSelection => ActiveStep::ExamSelection(ExamSelectionStep::default()),
            WizardStep::Payment => ActiveStep::Payment(PaymentStep::default()),
            WizardStep::Review => ActiveStep::Review(ReviewStep::default()),
        }
    }

    pub fn step(&self) -> WizardStep {
        match self {
            ActiveStep::Identity(_) => WizardStep::Identity,
            ActiveStep::PersonalInfo(_) => WizardStep::PersonalInfo,
            ActiveStep::ExamSelection(_) => WizardStep::ExamSelection,
            ActiveStep::Payment(_) => WizardStep::Payment,
            ActiveStep::Review(_) => WizardStep::Review,
        }
    }

    /// Ok when the step's rules hold and the wizard may move forward.
    pub fn check_advance(&self, draft: &RegistrationDraft) -> Result<(), ValidationError> {
        match self {
            ActiveStep::Identity(handler) => handler.check_advance(),
            ActiveStep::PersonalInfo(handler) => handler.validate(draft),
            ActiveStep::ExamSelection(handler) => handler.check_advance(draft),
            ActiveStep::Payment(handler) => handler.check_advance(draft),
            ActiveStep::Review(handler) => handler.check_advance(),
        }
    }

    pub fn can_advance(&self, draft: &RegistrationDraft) -> bool {
        self.check_advance(draft).is_ok()
    }

    step_accessor!(identity_mut, Identity, IdentityStep);
    step_accessor!(personal_info_mut, PersonalInfo, PersonalInfoStep);
    step_accessor!(exam_selection_mut, ExamSelection, ExamSelectionStep);
    step_accessor!(payment_mut, Payment, PaymentStep);
    step_accessor!(review_mut, Review, ReviewStep);
}

impl Default for ActiveStep {
    fn default() -> Self {
        ActiveStep::enter(WizardStep::FIRST)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enter_binds_each_step_to_its_handler() {
        for step in WizardStep::ORDER {
            assert_eq!(ActiveStep::enter(step).step(), step);
        }
    }

    #[test]
    fn accessor_for_another_step_reports_wrong_step() {
        let mut active = ActiveStep::enter(WizardStep::Identity);
        assert!(active.identity_mut().is_ok());
        assert_eq!(
            active.payment_mut().unwrap_err(),
            ValidationError::WrongStep {
                expected: WizardStep::Payment,
                actual: WizardStep::Identity,
            }
        );
    }

    #[test]
    fn review_never_allows_advancing() {
        let active = ActiveStep::enter(WizardStep::Review);
        assert_eq!(
            active.check_advance(&RegistrationDraft::default()),
            Err(ValidationError::FinalStep)
        );
    }

    #[test]
    fn active_step_serializes_with_step_tag() {
        let json = serde_json::to_value(ActiveStep::enter(WizardStep::ExamSelection)).unwrap();
        assert_eq!(json["step"], "exam_selection");
    }
}
