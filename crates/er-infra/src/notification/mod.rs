//! Notification adapters.

use er_core::ports::{NotificationKind, NotificationPort};
use tracing::{info, warn};

/// Writes every notification as a structured tracing event.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl NotificationPort for TracingNotifier {
    fn notify(&self, kind: NotificationKind, title: &str, message: &str) {
        match kind {
            NotificationKind::Success => {
                info!(target: "examreg::notification", kind = "success", title, message, "notify");
            }
            NotificationKind::Error => {
                warn!(target: "examreg::notification", kind = "error", title, message, "notify");
            }
        }
    }
}
