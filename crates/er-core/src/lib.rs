//! # er-core
//!
//! Core domain models and business logic for exam registration.
//!
//! This crate contains pure business logic without any infrastructure dependencies:
//! the registration draft, the fixed catalogs, fee computation, the step handlers
//! and the wizard state machine. Side effects are expressed through [`ports`].

pub mod config;
pub mod ports;
pub mod registration;

// Re-export commonly used types at the crate root
pub use config::AppConfig;
pub use registration::{
    ActiveStep, DraftPatch, FeeBreakdown, PaymentMethod, PaymentStatus, ProviderError,
    ProviderKind, RegistrationDraft, RegistrationError, RegistrationId, ValidationError,
    WizardEvent, WizardSnapshot, WizardState, WizardStateMachine, WizardStep,
};
