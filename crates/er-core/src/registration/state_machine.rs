//! Registration wizard state machine.
//!
//! Defines a pure state transition function for the registration wizard:
//! a linear chain of five steps with forward and backward moves only. Once the
//! registration is submitted the wizard is locked on Review.

use serde::{Deserialize, Serialize};

/// One step of the registration wizard.
///
/// 报名向导的步骤。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    /// Identity number and one-time code verification.
    ///
    /// 身份证号与验证码校验。
    Identity,
    /// Name, date of birth and contact details.
    ///
    /// 个人信息。
    PersonalInfo,
    /// Exam type and exam center selection.
    ///
    /// 考试与考点选择。
    ExamSelection,
    /// Fee payment.
    ///
    /// 缴费。
    Payment,
    /// Final review and submission. Terminal.
    ///
    /// 确认并提交（终态）。
    Review,
}

impl WizardStep {
    /// Fixed step order.
    pub const ORDER: [WizardStep; 5] = [
        WizardStep::Identity,
        WizardStep::PersonalInfo,
        WizardStep::ExamSelection,
        WizardStep::Payment,
        WizardStep::Review,
    ];

    pub const FIRST: WizardStep = WizardStep::Identity;
    pub const LAST: WizardStep = WizardStep::Review;

    /// 1-based position in [`WizardStep::ORDER`].
    pub fn number(self) -> u8 {
        match self {
            WizardStep::Identity => 1,
            WizardStep::PersonalInfo => 2,
            WizardStep::ExamSelection => 3,
            WizardStep::Payment => 4,
            WizardStep::Review => 5,
        }
    }

    pub fn from_number(number: u8) -> Option<Self> {
        let index = usize::from(number).checked_sub(1)?;
        Self::ORDER.get(index).copied()
    }

    pub fn next(self) -> Option<Self> {
        Self::from_number(self.number() + 1)
    }

    pub fn previous(self) -> Option<Self> {
        Self::from_number(self.number() - 1)
    }

    pub fn title(self) -> &'static str {
        match self {
            WizardStep::Identity => "Identity Verification",
            WizardStep::PersonalInfo => "Personal Details",
            WizardStep::ExamSelection => "Exam Details",
            WizardStep::Payment => "Payment",
            WizardStep::Review => "Review & Submit",
        }
    }
}

impl std::fmt::Display for WizardStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.title())
    }
}

/// Wizard position.
///
/// 向导状态：当前步骤，以及是否已提交。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WizardState {
    current: WizardStep,
    submitted: bool,
}

impl WizardState {
    pub fn new() -> Self {
        Self {
            current: WizardStep::FIRST,
            submitted: false,
        }
    }

    pub fn current_step(&self) -> WizardStep {
        self.current
    }

    /// 1-based step index, always within `[1, 5]`.
    pub fn current_step_index(&self) -> u8 {
        self.current.number()
    }

    pub fn is_terminal(&self) -> bool {
        self.current == WizardStep::LAST
    }

    /// True once the registration has been accepted. No further moves are possible.
    pub fn is_submitted(&self) -> bool {
        self.submitted
    }
}

impl Default for WizardState {
    fn default() -> Self {
        Self::new()
    }
}

/// Events that drive the wizard.
///
/// 驱动向导的事件。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WizardEvent {
    /// Move to the next step.
    ///
    /// 前进一步。
    Advance,
    /// Move to the previous step.
    ///
    /// 后退一步。
    Retreat,
    /// The registration was accepted on the Review step.
    ///
    /// 报名已提交。
    Submitted,
}

/// Side-effects produced by state transitions.
///
/// 状态迁移产生的副作用。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WizardAction {
    /// Discard the previous step's transient state and start `step` fresh.
    ///
    /// 丢弃旧步骤的临时状态，进入新步骤。
    EnterStep { step: WizardStep },
    /// Ask the identity-data provider to pre-fill personal details.
    ///
    /// 请求身份数据预填个人信息。
    PrefillPersonalDetails,
}

/// Pure wizard state machine.
///
/// 纯状态机：不包含副作用。
pub struct WizardStateMachine;

impl WizardStateMachine {
    pub fn transition(state: WizardState, event: WizardEvent) -> (WizardState, Vec<WizardAction>) {
        if state.submitted {
            return (state, Vec::new());
        }

        let target = match event {
            WizardEvent::Advance => state.current.next(),
            WizardEvent::Retreat => state.current.previous(),
            WizardEvent::Submitted => {
                let submitted = state.current == WizardStep::LAST;
                return (WizardState { submitted, ..state }, Vec::new());
            }
        };

        let Some(step) = target else {
            return (state, Vec::new());
        };

        let mut actions = vec![WizardAction::EnterStep { step }];
        if step == WizardStep::PersonalInfo {
            actions.push(WizardAction::PrefillPersonalDetails);
        }

        #[cfg(feature = "tracing")]
        tracing::trace!(from = ?state.current, to = ?step, ?event, "wizard transition");

        (
            WizardState {
                current: step,
                submitted: false,
            },
            actions,
        )
    }
}
