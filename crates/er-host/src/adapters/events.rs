use async_trait::async_trait;
use er_core::ports::WizardEventPort;
use er_core::registration::WizardSnapshot;
use tracing::debug;

/// Publishes wizard snapshots to the log; the CLI has no live view to refresh.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingWizardEventPort;

#[async_trait]
impl WizardEventPort for LoggingWizardEventPort {
    async fn emit_wizard_state_changed(&self, snapshot: WizardSnapshot) {
        debug!(
            step = %snapshot.step,
            step_number = snapshot.step_number,
            total_steps = snapshot.total_steps,
            can_advance = snapshot.can_advance,
            busy = snapshot.busy,
            payment_status = %snapshot.draft.payment_status,
            "wizard state changed"
        );
    }
}
