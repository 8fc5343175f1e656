//! Payment methods and the details staged for each of them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::ValidationError;
use super::validation;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    Card,
    Upi,
    Netbanking,
    Wallet,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 4] = [
        PaymentMethod::Card,
        PaymentMethod::Upi,
        PaymentMethod::Netbanking,
        PaymentMethod::Wallet,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Card => "card",
            PaymentMethod::Upi => "upi",
            PaymentMethod::Netbanking => "netbanking",
            PaymentMethod::Wallet => "wallet",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::Card => "Credit/Debit Card",
            PaymentMethod::Upi => "UPI Payment",
            PaymentMethod::Netbanking => "Net Banking",
            PaymentMethod::Wallet => "Digital Wallet",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentMethod {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PaymentMethod::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or(ValidationError::PaymentMethodRequired)
    }
}

/// Card fields staged on the payment step. Never persisted.
///
/// 卡信息：仅暂存在支付步骤内，不写入草稿。
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardDetails {
    pub cardholder_name: String,
    #[serde(skip_serializing)]
    pub number: String,
    pub expiry: String,
    #[serde(skip_serializing)]
    pub cvv: String,
}

impl CardDetails {
    /// Checks fields in display order and reports the first one that fails.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validation::validate_cardholder_name(&self.cardholder_name)?;
        validation::validate_card_number(&self.number)?;
        validation::validate_expiry(&self.expiry)?;
        validation::validate_cvv(&self.cvv)?;
        Ok(())
    }

    /// Last four digits of the card number, if it has at least four.
    pub fn last_four(&self) -> Option<String> {
        let digits = validation::normalize_card_number(&self.number);
        if digits.len() < 4 {
            return None;
        }
        Some(digits[digits.len() - 4..].to_string())
    }
}

impl fmt::Debug for CardDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CardDetails")
            .field("cardholder_name", &self.cardholder_name)
            .field("number", &"[REDACTED]")
            .field("expiry", &self.expiry)
            .field("cvv", &"[REDACTED]")
            .finish()
    }
}

/// Method-specific details handed to the payment provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "method", rename_all = "lowercase")]
pub enum PaymentDetails {
    Card(CardDetails),
    Upi { upi_id: Option<String> },
    Netbanking { bank: Option<String> },
    Wallet,
}

impl PaymentDetails {
    pub fn method(&self) -> PaymentMethod {
        match self {
            PaymentDetails::Card(_) => PaymentMethod::Card,
            PaymentDetails::Upi { .. } => PaymentMethod::Upi,
            PaymentDetails::Netbanking { .. } => PaymentMethod::Netbanking,
            PaymentDetails::Wallet => PaymentMethod::Wallet,
        }
    }
}
