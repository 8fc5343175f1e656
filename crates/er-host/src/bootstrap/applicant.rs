//! Applicant script: the answers a user would type into the wizard, as TOML.

use std::path::Path;

use anyhow::Context;
use serde::Deserialize;

use er_core::registration::{CardDetails, PaymentMethod};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ApplicantScript {
    pub identity_number: String,
    pub otp_code: String,
    /// Empty fields are left for auto-fill.
    pub full_name: String,
    pub date_of_birth: String,
    pub mobile_number: String,
    pub email_address: String,
    pub exam_type: String,
    pub exam_center: String,
    #[serde(default = "default_acknowledge")]
    pub acknowledge: bool,
    pub payment: PaymentScript,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PaymentScript {
    pub method: String,
    pub upi_id: String,
    pub bank: String,
    pub card: CardDetails,
}

impl PaymentScript {
    pub fn method(&self) -> Result<PaymentMethod, er_core::ValidationError> {
        self.method.parse()
    }
}

fn default_acknowledge() -> bool {
    true
}

pub fn load_applicant(path: &Path) -> anyhow::Result<ApplicantScript> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read applicant file: {}", path.display()))?;
    toml::from_str(&content).context("Failed to parse applicant file as TOML")
}
