use std::time::Duration;

use async_trait::async_trait;
use er_core::ports::{ChargeReceipt, ChargeRequest, PaymentPort};
use er_core::registration::{PaymentDetails, ProviderError};
use tracing::info;
use uuid::Uuid;

use super::latency::wait;

/// Payment gateway stand-in.
pub struct SimulatedPaymentGateway {
    delay: Duration,
    decline: bool,
}

impl SimulatedPaymentGateway {
    pub fn new(delay: Duration, decline: bool) -> Self {
        Self { delay, decline }
    }
}

#[async_trait]
impl PaymentPort for SimulatedPaymentGateway {
    async fn charge(&self, request: &ChargeRequest) -> Result<ChargeReceipt, ProviderError> {
        wait(self.delay).await;

        let card = match &request.details {
            PaymentDetails::Card(card) => card.last_four(),
            _ => None,
        };
        if self.decline {
            info!(amount = request.amount, method = %request.method, "charge declined");
            return Err(ProviderError::Rejected {
                reason: "payment declined by issuer".to_string(),
            });
        }

        let transaction_id = format!("txn_{}", Uuid::new_v4().simple());
        info!(
            amount = request.amount,
            method = %request.method,
            card_last_four = card.as_deref().unwrap_or("-"),
            %transaction_id,
            "charge captured"
        );
        Ok(ChargeReceipt { transaction_id })
    }
}
