//! # Wizard Dependencies / 向导依赖
//!
//! This module defines the dependency grouping for controller construction.
//!
//! **Note**: This is NOT a Builder pattern. No defaults, no hidden logic,
//! just parameter grouping.

use std::sync::Arc;

use er_core::ports::{
    ClockPort, IdentityVerificationPort, NotificationPort, PaymentPort, SubmissionPort,
    WizardEventPort,
};

/// Wizard dependency grouping (non-Builder, just parameter grouping)
/// 向导依赖分组（非 Builder，仅参数打包）
pub struct WizardDeps {
    // Providers / 外部服务
    pub identity: Arc<dyn IdentityVerificationPort>,
    pub payment: Arc<dyn PaymentPort>,
    pub submission: Arc<dyn SubmissionPort>,

    // System / 系统
    pub clock: Arc<dyn ClockPort>,

    // UI / 界面
    pub notifier: Arc<dyn NotificationPort>,
    pub events: Arc<dyn WizardEventPort>,
}
