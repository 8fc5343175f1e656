//! # Configuration Loader / 配置加载器
//!
//! ## Responsibilities / 职责
//!
//! - Read TOML configuration files / 读取 TOML 配置文件
//! - Parse TOML into AppConfig DTO / 将 TOML 解析为 AppConfig DTO
//! - Report I/O and parsing errors with context / 报告带上下文的 I/O 和解析错误
//!
//! ## Prohibited / 禁止事项
//!
//! **No validation logic, no default value logic.** Accept whatever is in the file.

use std::path::Path;

use anyhow::Context;
use er_core::config::AppConfig;

/// Load configuration from a TOML file
/// 从 TOML 文件加载配置
///
/// Missing sections result in empty values (facts, not errors).
///
/// # Errors / 错误
///
/// Returns error if the file cannot be read or is not valid TOML.
pub fn load_config(config_path: &Path) -> anyhow::Result<AppConfig> {
    let content = std::fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let toml_value: toml::Value =
        toml::from_str(&content).context("Failed to parse config as TOML")?;
    AppConfig::from_toml(&toml_value)
}
