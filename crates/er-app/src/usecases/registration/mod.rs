//! Registration use cases.
//!
//! This module exposes the wizard controller.

mod context;
mod id_generator;
pub mod controller;

pub use context::{BusyGuard, RegistrationContext, RegistrationSession};
pub use controller::{WizardController, WizardOptions};
pub use id_generator::RegistrationIdGenerator;
