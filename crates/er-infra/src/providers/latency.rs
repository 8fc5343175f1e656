use std::time::Duration;

use er_core::AppConfig;

/// Simulated round-trip time of each provider call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProviderLatency {
    pub verification: Duration,
    pub confirmation: Duration,
    pub profile: Duration,
    pub payment: Duration,
    pub submission: Duration,
}

impl ProviderLatency {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            verification: Duration::from_millis(config.verification_delay_ms),
            confirmation: Duration::from_millis(config.confirmation_delay_ms),
            profile: Duration::from_millis(config.profile_delay_ms),
            payment: Duration::from_millis(config.payment_delay_ms),
            submission: Duration::from_millis(config.submission_delay_ms),
        }
    }
}

pub(crate) async fn wait(delay: Duration) {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
}
