pub mod notification;
pub mod providers;
pub mod time;

pub use notification::TracingNotifier;
pub use providers::{
    ProviderLatency, SimulatedIdentityProvider, SimulatedPaymentGateway,
    SimulatedSubmissionService,
};
pub use time::SystemClock;
