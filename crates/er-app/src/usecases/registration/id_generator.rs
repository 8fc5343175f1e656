use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

use er_core::ports::ClockPort;
use er_core::registration::RegistrationId;

/// Issues `<prefix><unix-millis>` identifiers, strictly increasing per instance.
pub struct RegistrationIdGenerator {
    clock: Arc<dyn ClockPort>,
    prefix: String,
    last_issued_ms: AtomicI64,
}

impl RegistrationIdGenerator {
    pub fn new(clock: Arc<dyn ClockPort>, prefix: impl Into<String>) -> Self {
        Self {
            clock,
            prefix: prefix.into(),
            last_issued_ms: AtomicI64::new(i64::MIN),
        }
    }

    pub fn next_id(&self) -> RegistrationId {
        let now = self.clock.now_ms();
        let previous = self
            .last_issued_ms
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| {
                Some(now.max(last.saturating_add(1)))
            })
            .unwrap_or(now);
        let issued = now.max(previous.saturating_add(1));
        RegistrationId::from_parts(&self.prefix, issued)
    }
}
