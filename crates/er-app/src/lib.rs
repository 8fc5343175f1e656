//! Exam Registration Application Orchestration Layer
//!
//! This crate contains the wizard controller and the use cases that drive
//! the registration flow against the ports declared in `er-core`.

pub mod deps;
pub mod usecases;

pub use deps::WizardDeps;
pub use usecases::registration::{WizardController, WizardOptions};
