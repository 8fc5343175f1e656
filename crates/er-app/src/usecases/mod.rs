pub mod registration;

pub use registration::{RegistrationIdGenerator, WizardController, WizardOptions};
