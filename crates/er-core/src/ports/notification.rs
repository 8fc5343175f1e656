use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    Success,
    Error,
}

/// User-facing notification surface (toasts, banners, log lines).
///
/// Fire-and-forget: the wizard never waits for or inspects delivery.
pub trait NotificationPort: Send + Sync {
    fn notify(&self, kind: NotificationKind, title: &str, message: &str);
}
