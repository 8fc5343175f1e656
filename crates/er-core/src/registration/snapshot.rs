//! Read model of the wizard, as exposed to the presentation layer.

use serde::Serialize;

use super::draft::RegistrationDraft;
use super::fees::FeeBreakdown;
use super::state_machine::{WizardState, WizardStep};
use super::steps::ActiveStep;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WizardSnapshot {
    pub step: WizardStep,
    pub step_number: u8,
    pub total_steps: u8,
    pub draft: RegistrationDraft,
    pub active: ActiveStep,
    pub fees: Option<FeeBreakdown>,
    pub can_advance: bool,
    pub submitted: bool,
    pub busy: bool,
}

impl WizardSnapshot {
    pub fn capture(
        state: &WizardState,
        draft: &RegistrationDraft,
        active: &ActiveStep,
        busy: bool,
    ) -> Self {
        let fees = (!draft.exam_type.is_empty()).then(|| FeeBreakdown::compute(draft.fee_amount));
        Self {
            step: state.current_step(),
            step_number: state.current_step_index(),
            total_steps: WizardStep::ORDER.len() as u8,
            draft: draft.clone(),
            active: active.clone(),
            fees,
            can_advance: active.can_advance(draft),
            submitted: state.is_submitted(),
            busy,
        }
    }
}
