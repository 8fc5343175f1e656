use std::time::Duration;

use async_trait::async_trait;
use er_core::ports::{IdentityProfile, IdentityVerificationPort};
use er_core::registration::ProviderError;
use tracing::debug;

use super::latency::wait;

/// Identity authority stand-in. Every well-formed request succeeds.
pub struct SimulatedIdentityProvider {
    request_delay: Duration,
    confirm_delay: Duration,
    profile_delay: Duration,
    profile: Option<IdentityProfile>,
}

impl SimulatedIdentityProvider {
    pub fn new(
        request_delay: Duration,
        confirm_delay: Duration,
        profile_delay: Duration,
        profile: Option<IdentityProfile>,
    ) -> Self {
        Self {
            request_delay,
            confirm_delay,
            profile_delay,
            profile,
        }
    }
}

fn masked(identity_number: &str) -> String {
    let hidden = identity_number.chars().count().saturating_sub(4);
    let tail: String = identity_number.chars().skip(hidden).collect();
    format!("XXXX-XXXX-{tail}")
}

#[async_trait]
impl IdentityVerificationPort for SimulatedIdentityProvider {
    async fn request_verification_code(&self, identity_number: &str) -> Result<(), ProviderError> {
        wait(self.request_delay).await;
        debug!(identity = %masked(identity_number), "verification code issued");
        Ok(())
    }

    async fn verify_code(&self, identity_number: &str, _code: &str) -> Result<(), ProviderError> {
        wait(self.confirm_delay).await;
        debug!(identity = %masked(identity_number), "verification code accepted");
        Ok(())
    }

    async fn fetch_identity_profile(
        &self,
        identity_number: &str,
    ) -> Result<Option<IdentityProfile>, ProviderError> {
        wait(self.profile_delay).await;
        debug!(
            identity = %masked(identity_number),
            found = self.profile.is_some(),
            "identity profile lookup"
        );
        Ok(self.profile.clone())
    }
}
