use crate::registration::{ProviderError, SubmissionRecord};

/// Receives the finished registration as a flat key/value record.
#[async_trait::async_trait]
pub trait SubmissionPort: Send + Sync {
    async fn submit(&self, record: &SubmissionRecord) -> Result<(), ProviderError>;
}
