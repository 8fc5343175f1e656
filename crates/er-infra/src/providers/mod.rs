//! Simulated external providers.
//!
//! Each provider waits a configured latency on the tokio timer before it
//! answers, standing in for the network round trip of the hosted services.

mod identity;
mod latency;
mod payment;
mod submission;

pub use identity::SimulatedIdentityProvider;
pub use latency::ProviderLatency;
pub use payment::SimulatedPaymentGateway;
pub use submission::SimulatedSubmissionService;
