//! Registration error taxonomy.
//!
//! 报名错误类型：输入校验失败与外部服务失败。

use serde::Serialize;
use thiserror::Error;

use super::state_machine::WizardStep;

/// User input failed a stated rule. Always recoverable locally.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "code", rename_all = "snake_case")]
pub enum ValidationError {
    #[error("Please enter a valid 12-digit identity number")]
    InvalidIdentityNumber,
    #[error("Please request a verification code first")]
    CodeNotRequested,
    #[error("Please enter the 6-digit verification code")]
    InvalidVerificationCode,
    #[error("Please enter your full name as per identity records")]
    NameTooShort,
    #[error("Please select your date of birth")]
    DateOfBirthRequired,
    #[error("Please enter a valid 10-digit mobile number")]
    InvalidMobileNumber,
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Unknown exam type: {id}")]
    UnknownExamType { id: String },
    #[error("Unknown exam center: {id}")]
    UnknownExamCenter { id: String },
    #[error("Please select both exam type and exam center")]
    ExamSelectionIncomplete,
    #[error("Please select a payment method")]
    PaymentMethodRequired,
    #[error("Please enter the cardholder name")]
    CardholderNameRequired,
    #[error("Please enter the card number")]
    CardNumberRequired,
    #[error("Card number must have 13 to 19 digits")]
    CardNumberInvalid,
    #[error("Please enter the card expiry date")]
    ExpiryRequired,
    #[error("Expiry date must be in MM/YY format")]
    ExpiryInvalid,
    #[error("Please enter the CVV")]
    CvvRequired,
    #[error("CVV must be 3 digits")]
    CvvInvalid,
    #[error("Registration fee has already been paid")]
    AlreadyPaid,
    #[error("Please complete the payment before submitting")]
    PaymentNotCompleted,
    #[error("Please accept the terms and conditions")]
    AcknowledgementRequired,
    #[error("This registration has already been submitted")]
    AlreadySubmitted,
    #[error("This action belongs to the {expected} step, but the wizard is on {actual}")]
    WrongStep {
        expected: WizardStep,
        actual: WizardStep,
    },
    #[error("Please complete identity verification to proceed")]
    IdentityNotVerified,
    #[error("Please complete the payment to proceed")]
    PaymentRequired,
    #[error("Registration is complete; there is no further step")]
    FinalStep,
    #[error("{field} cannot be edited on the {step} step")]
    FieldNotEditable {
        field: &'static str,
        step: WizardStep,
    },
}

impl ValidationError {
    /// Short headline used by the notification layer.
    pub fn title(&self) -> &'static str {
        match self {
            ValidationError::InvalidIdentityNumber => "Invalid Identity Number",
            ValidationError::CodeNotRequested => "Code Not Requested",
            ValidationError::InvalidVerificationCode => "Invalid Code",
            ValidationError::NameTooShort => "Invalid Name",
            ValidationError::DateOfBirthRequired => "Date of Birth Required",
            ValidationError::InvalidMobileNumber => "Invalid Mobile Number",
            ValidationError::InvalidEmail => "Invalid Email",
            ValidationError::UnknownExamType { .. } => "Invalid Exam Type",
            ValidationError::UnknownExamCenter { .. } => "Invalid Exam Center",
            ValidationError::ExamSelectionIncomplete => "Selection Required",
            ValidationError::PaymentMethodRequired => "Payment Method Required",
            ValidationError::CardholderNameRequired
            | ValidationError::CardNumberRequired
            | ValidationError::CardNumberInvalid
            | ValidationError::ExpiryRequired
            | ValidationError::ExpiryInvalid
            | ValidationError::CvvRequired
            | ValidationError::CvvInvalid => "Card Details Required",
            ValidationError::AlreadyPaid => "Payment Already Completed",
            ValidationError::PaymentNotCompleted | ValidationError::PaymentRequired => {
                "Payment Required"
            }
            ValidationError::AcknowledgementRequired => "Acknowledgement Required",
            ValidationError::AlreadySubmitted => "Already Submitted",
            ValidationError::WrongStep { .. } => "Action Unavailable",
            ValidationError::IdentityNotVerified => "Verification Required",
            ValidationError::FinalStep => "Registration Complete",
            ValidationError::FieldNotEditable { .. } => "Field Not Editable",
        }
    }
}

/// Failure reported by an external provider. Never retried by the core.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProviderError {
    #[error("request rejected: {reason}")]
    Rejected { reason: String },
    #[error("service unavailable: {0}")]
    Unavailable(String),
    #[error("no response within {after_ms} ms")]
    TimedOut { after_ms: u64 },
}

/// Which external boundary produced a [`ProviderError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProviderKind {
    Verification,
    IdentityProfile,
    Payment,
    Submission,
}

impl ProviderKind {
    pub fn failure_title(&self) -> &'static str {
        match self {
            ProviderKind::Verification => "Verification Failed",
            ProviderKind::IdentityProfile => "Auto-fill Failed",
            ProviderKind::Payment => "Payment Failed",
            ProviderKind::Submission => "Submission Failed",
        }
    }
}

impl std::fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ProviderKind::Verification => "verification",
            ProviderKind::IdentityProfile => "identity profile",
            ProviderKind::Payment => "payment",
            ProviderKind::Submission => "submission",
        };
        f.write_str(name)
    }
}

/// Any failure surfaced by a wizard operation.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RegistrationError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("{provider} provider failed: {source}")]
    Provider {
        provider: ProviderKind,
        #[source]
        source: ProviderError,
    },
}

impl RegistrationError {
    pub fn provider(provider: ProviderKind, source: ProviderError) -> Self {
        RegistrationError::Provider { provider, source }
    }

    pub fn title(&self) -> &'static str {
        match self {
            RegistrationError::Validation(err) => err.title(),
            RegistrationError::Provider { provider, .. } => provider.failure_title(),
        }
    }

    /// Message shown to the applicant.
    pub fn user_message(&self) -> String {
        match self {
            RegistrationError::Validation(err) => err.to_string(),
            RegistrationError::Provider { source, .. } => {
                format!("{source}. Please try again.")
            }
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, RegistrationError::Validation(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_converts_into_registration_error() {
        let err: RegistrationError = ValidationError::InvalidEmail.into();
        assert!(err.is_validation());
        assert_eq!(err.title(), "Invalid Email");
        assert_eq!(err.user_message(), "Please enter a valid email address");
    }

    #[test]
    fn provider_error_message_invites_retry() {
        let err = RegistrationError::provider(
            ProviderKind::Payment,
            ProviderError::Rejected {
                reason: "card declined".into(),
            },
        );
        assert!(!err.is_validation());
        assert_eq!(err.title(), "Payment Failed");
        assert_eq!(
            err.user_message(),
            "request rejected: card declined. Please try again."
        );
        assert_eq!(
            err.to_string(),
            "payment provider failed: request rejected: card declined"
        );
    }

    #[test]
    fn wrong_step_names_both_steps() {
        let err = ValidationError::WrongStep {
            expected: WizardStep::Payment,
            actual: WizardStep::Identity,
        };
        assert_eq!(
            err.to_string(),
            "This action belongs to the Payment step, but the wizard is on Identity Verification"
        );
    }
}
