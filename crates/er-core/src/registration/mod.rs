//! Registration domain module.
//!
//! This module defines the registration draft, the catalogs, and the wizard
//! state machine with its five step handlers.

pub mod catalog;
pub mod draft;
pub mod error;
pub mod fees;
pub mod id;
pub mod payment;
pub mod snapshot;
pub mod state_machine;
pub mod steps;
pub mod validation;

pub use catalog::{ExamCenter, ExamOffering, EXAM_CENTERS, EXAM_OFFERINGS};
pub use draft::{DraftPatch, PaymentStatus, RegistrationDraft, SubmissionRecord};
pub use error::{ProviderError, ProviderKind, RegistrationError, ValidationError};
pub use fees::FeeBreakdown;
pub use id::RegistrationId;
pub use payment::{CardDetails, PaymentDetails, PaymentMethod};
pub use snapshot::WizardSnapshot;
pub use state_machine::{WizardAction, WizardEvent, WizardState, WizardStateMachine, WizardStep};
pub use steps::{
    ActiveStep, Confirmation, ExamSelectionStep, IdentityStep, PaymentStep, PersonalInfoStep,
    ReviewStep,
};
