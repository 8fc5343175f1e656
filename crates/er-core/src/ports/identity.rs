use serde::{Deserialize, Serialize};

use crate::registration::ProviderError;

/// Personal details held by the identity authority.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityProfile {
    pub full_name: String,
    pub date_of_birth: String,
}

/// Identity verification provider.
///
/// 身份核验服务。
#[async_trait::async_trait]
pub trait IdentityVerificationPort: Send + Sync {
    /// Send a one-time code to the contact registered for `identity_number`.
    async fn request_verification_code(&self, identity_number: &str)
        -> Result<(), ProviderError>;

    /// Confirm the one-time code for `identity_number`.
    async fn verify_code(&self, identity_number: &str, code: &str) -> Result<(), ProviderError>;

    /// Look up the identity record, if the authority shares it.
    async fn fetch_identity_profile(
        &self,
        identity_number: &str,
    ) -> Result<Option<IdentityProfile>, ProviderError>;
}
