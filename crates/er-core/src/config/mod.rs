//! # Pure Data Module - Data Transfer Objects Only
//!
//! ## Responsibilities
//!
//! - Define configuration data structures
//! - Provide TOML → DTO mapping
//!
//! ## Prohibited
//!
//! **No business logic, no validation.** Missing keys become empty/zero facts;
//! the bootstrap layer decides what an empty value means.
//!
//! 此模块只包含数据结构定义，禁止任何业务逻辑或验证。

use std::path::PathBuf;

/// Application configuration DTO (pure data, no logic)
/// 应用配置 DTO（纯数据，无逻辑）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Simulated latency of a code request, in milliseconds
    pub verification_delay_ms: u64,

    /// Simulated latency of a code confirmation, in milliseconds
    pub confirmation_delay_ms: u64,

    /// Simulated latency of an identity-record lookup, in milliseconds
    pub profile_delay_ms: u64,

    /// Simulated latency of a charge, in milliseconds
    pub payment_delay_ms: u64,

    /// Simulated latency of the final submission, in milliseconds
    pub submission_delay_ms: u64,

    /// Per-call provider timeout; 0 means "wait forever"
    pub provider_timeout_ms: u64,

    /// Make the simulated gateway decline every charge
    pub decline_payments: bool,

    /// Registration id prefix (may be empty - this is a fact, not an error)
    pub registration_id_prefix: String,

    /// Name returned by the simulated identity-record lookup
    pub profile_full_name: String,

    /// Date of birth returned by the simulated identity-record lookup
    pub profile_date_of_birth: String,

    /// Log file directory (empty = stdout only)
    pub log_directory: PathBuf,
}

impl AppConfig {
    /// Create AppConfig from TOML value
    /// 从 TOML 值创建 AppConfig
    ///
    /// **Prohibited**: This method must NOT contain any validation
    /// or default value logic. Empty strings are valid "facts".
    pub fn from_toml(toml_value: &toml::Value) -> anyhow::Result<Self> {
        let int = |section: &str, key: &str| -> u64 {
            toml_value
                .get(section)
                .and_then(|s| s.get(key))
                .and_then(|v| v.as_integer())
                .unwrap_or(0)
                .max(0) as u64
        };
        let string = |section: &str, key: &str| -> String {
            toml_value
                .get(section)
                .and_then(|s| s.get(key))
                .and_then(|v| v.as_str())
                .unwrap_or("")
                .to_string()
        };

        Ok(Self {
            verification_delay_ms: int("providers", "verification_delay_ms"),
            confirmation_delay_ms: int("providers", "confirmation_delay_ms"),
            profile_delay_ms: int("providers", "profile_delay_ms"),
            payment_delay_ms: int("providers", "payment_delay_ms"),
            submission_delay_ms: int("providers", "submission_delay_ms"),
            provider_timeout_ms: int("providers", "timeout_ms"),
            decline_payments: toml_value
                .get("providers")
                .and_then(|p| p.get("decline_payments"))
                .and_then(|v| v.as_bool())
                .unwrap_or(false),
            registration_id_prefix: string("registration", "id_prefix"),
            profile_full_name: string("profile", "full_name"),
            profile_date_of_birth: string("profile", "date_of_birth"),
            log_directory: PathBuf::from(string("logging", "directory")),
        })
    }

    /// Create empty AppConfig (all empty/default values)
    /// 创建空的 AppConfig（所有字段为空/默认值）
    pub fn empty() -> Self {
        Self {
            verification_delay_ms: 0,
            confirmation_delay_ms: 0,
            profile_delay_ms: 0,
            payment_delay_ms: 0,
            submission_delay_ms: 0,
            provider_timeout_ms: 0,
            decline_payments: false,
            registration_id_prefix: String::new(),
            profile_full_name: String::new(),
            profile_date_of_birth: String::new(),
            log_directory: PathBuf::new(),
        }
    }

    /// Values used when no configuration file is given.
    ///
    /// Latencies match what a user of the hosted form would observe.
    pub fn defaults() -> Self {
        Self {
            verification_delay_ms: 2000,
            confirmation_delay_ms: 1500,
            profile_delay_ms: 1000,
            payment_delay_ms: 3000,
            submission_delay_ms: 2000,
            provider_timeout_ms: 0,
            decline_payments: false,
            registration_id_prefix: "EDQ".to_string(),
            profile_full_name: "John Doe".to_string(),
            profile_date_of_birth: "1995-05-15".to_string(),
            log_directory: PathBuf::new(),
        }
    }
}
