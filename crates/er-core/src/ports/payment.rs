use serde::{Deserialize, Serialize};

use crate::registration::{PaymentDetails, PaymentMethod, ProviderError};

/// A single charge to run against the payment provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChargeRequest {
    /// Total in whole currency units, processing fee and GST included.
    pub amount: u64,
    pub method: PaymentMethod,
    pub details: PaymentDetails,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChargeReceipt {
    pub transaction_id: String,
}

/// Payment gateway.
#[async_trait::async_trait]
pub trait PaymentPort: Send + Sync {
    async fn charge(&self, request: &ChargeRequest) -> Result<ChargeReceipt, ProviderError>;
}
