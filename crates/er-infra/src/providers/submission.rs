use std::time::Duration;

use async_trait::async_trait;
use er_core::ports::SubmissionPort;
use er_core::registration::{ProviderError, SubmissionRecord};
use tokio::sync::Mutex;
use tracing::info;

use super::latency::wait;

/// Registration intake stand-in. Keeps accepted records in memory.
pub struct SimulatedSubmissionService {
    delay: Duration,
    accepted: Mutex<Vec<SubmissionRecord>>,
}

impl SimulatedSubmissionService {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            accepted: Mutex::new(Vec::new()),
        }
    }

    pub async fn accepted(&self) -> Vec<SubmissionRecord> {
        self.accepted.lock().await.clone()
    }
}

#[async_trait]
impl SubmissionPort for SimulatedSubmissionService {
    async fn submit(&self, record: &SubmissionRecord) -> Result<(), ProviderError> {
        wait(self.delay).await;
        let mut accepted = self.accepted.lock().await;
        accepted.push(record.clone());
        info!(
            fields = record.len(),
            exam = record.get("entry.exam").map(String::as_str).unwrap_or(""),
            total_accepted = accepted.len(),
            "registration accepted"
        );
        Ok(())
    }
}
