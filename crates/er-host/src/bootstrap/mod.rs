pub mod applicant;
pub mod config;
pub mod run;
pub mod tracing;
pub mod wiring;

pub use applicant::{load_applicant, ApplicantScript, PaymentScript};
pub use config::load_config;
pub use run::run_registration;
pub use wiring::{build_controller, wizard_options};
