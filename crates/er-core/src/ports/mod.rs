//! Port interfaces for the application layer
//!
//! Ports define the contract between the wizard controller and the external
//! collaborators it depends on: the notification surface, the identity,
//! payment and submission providers, and the clock. Infrastructure supplies
//! the implementations.

mod clock;
pub mod identity;
pub mod notification;
pub mod payment;
pub mod submission;
pub mod wizard_event_port;

pub use clock::*;
pub use identity::{IdentityProfile, IdentityVerificationPort};
pub use notification::{NotificationKind, NotificationPort};
pub use payment::{ChargeReceipt, ChargeRequest, PaymentPort};
pub use submission::SubmissionPort;
pub use wizard_event_port::WizardEventPort;
