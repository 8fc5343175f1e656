use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::Mutex;

use er_core::registration::{ActiveStep, RegistrationDraft, WizardSnapshot, WizardState};

/// Everything the wizard knows about the applicant in this session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationSession {
    pub state: WizardState,
    pub draft: RegistrationDraft,
    pub active: ActiveStep,
}

/// Shared registration context containing the session and dispatch lock.
///
/// ## Lock Ordering
/// When acquiring both locks, acquire `dispatch_lock` first, then `session`.
/// - `dispatch_lock`: held for the whole of a mutating operation, provider
///   calls included, so at most one provider call is ever in flight.
/// - `session`: held only for short synchronous reads and writes, never
///   across an `.await`.
#[derive(Default)]
pub struct RegistrationContext {
    session: Mutex<RegistrationSession>,
    dispatch_lock: Mutex<()>,
    busy: Arc<AtomicBool>,
}

impl RegistrationContext {
    pub fn new(session: RegistrationSession) -> Self {
        Self {
            session: Mutex::new(session),
            dispatch_lock: Mutex::new(()),
            busy: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Returns the context wrapped in Arc for shared ownership.
    pub fn arc(self) -> Arc<Self> {
        Arc::new(self)
    }

    /// Lightweight read; does NOT acquire `dispatch_lock`.
    pub async fn get_session(&self) -> RegistrationSession {
        self.session.lock().await.clone()
    }

    /// Acquires the dispatch lock for serializing mutating operations.
    pub async fn acquire_dispatch_lock(&self) -> tokio::sync::MutexGuard<'_, ()> {
        self.dispatch_lock.lock().await
    }

    /// Runs `f` against the session as one atomic update.
    pub async fn update<R>(&self, f: impl FnOnce(&mut RegistrationSession) -> R) -> R {
        let mut guard = self.session.lock().await;
        f(&mut guard)
    }

    pub async fn snapshot(&self) -> WizardSnapshot {
        let guard = self.session.lock().await;
        WizardSnapshot::capture(&guard.state, &guard.draft, &guard.active, self.is_busy())
    }

    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::SeqCst)
    }

    /// Marks the context busy until the returned guard is dropped.
    pub fn mark_busy(&self) -> BusyGuard {
        self.busy.store(true, Ordering::SeqCst);
        BusyGuard {
            flag: Arc::clone(&self.busy),
        }
    }
}

/// Clears the busy flag on drop, including when the owning future is cancelled.
pub struct BusyGuard {
    flag: Arc<AtomicBool>,
}

impl Drop for BusyGuard {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::SeqCst);
    }
}
