//! # Dependency Wiring / 依赖注入
//!
//! Assembles the simulated providers and host adapters into a
//! [`WizardController`]. This is the only place that knows concrete types.

use std::sync::Arc;
use std::time::Duration;

use er_app::{WizardController, WizardDeps, WizardOptions};
use er_core::ports::{IdentityProfile, WizardEventPort};
use er_core::AppConfig;
use er_infra::{
    ProviderLatency, SimulatedIdentityProvider, SimulatedPaymentGateway,
    SimulatedSubmissionService, SystemClock, TracingNotifier,
};

/// Controller options derived from configuration.
///
/// A zero timeout means no timeout.
pub fn wizard_options(config: &AppConfig) -> WizardOptions {
    WizardOptions {
        provider_timeout: (config.provider_timeout_ms > 0)
            .then(|| Duration::from_millis(config.provider_timeout_ms)),
        registration_id_prefix: config.registration_id_prefix.clone(),
    }
}

fn identity_profile(config: &AppConfig) -> Option<IdentityProfile> {
    if config.profile_full_name.is_empty() && config.profile_date_of_birth.is_empty() {
        return None;
    }
    Some(IdentityProfile {
        full_name: config.profile_full_name.clone(),
        date_of_birth: config.profile_date_of_birth.clone(),
    })
}

pub fn build_controller(
    config: &AppConfig,
    events: Arc<dyn WizardEventPort>,
) -> WizardController {
    let latency = ProviderLatency::from_config(config);

    let deps = WizardDeps {
        identity: Arc::new(SimulatedIdentityProvider::new(
            latency.verification,
            latency.confirmation,
            latency.profile,
            identity_profile(config),
        )),
        payment: Arc::new(SimulatedPaymentGateway::new(
            latency.payment,
            config.decline_payments,
        )),
        submission: Arc::new(SimulatedSubmissionService::new(latency.submission)),
        clock: Arc::new(SystemClock),
        notifier: Arc::new(TracingNotifier),
        events,
    };

    tracing::info!(
        decline_payments = config.decline_payments,
        timeout_ms = config.provider_timeout_ms,
        "wizard controller wired with simulated providers"
    );
    WizardController::new(deps, wizard_options(config))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_timeout_means_none() {
        let options = wizard_options(&AppConfig::defaults());
        assert_eq!(options.provider_timeout, None);
        assert_eq!(options.registration_id_prefix, "EDQ");

        let config = AppConfig {
            provider_timeout_ms: 2500,
            ..AppConfig::defaults()
        };
        assert_eq!(
            wizard_options(&config).provider_timeout,
            Some(Duration::from_millis(2500))
        );
    }

    #[test]
    fn empty_profile_disables_auto_fill() {
        assert_eq!(identity_profile(&AppConfig::empty()), None);
        assert_eq!(
            identity_profile(&AppConfig::defaults()),
            Some(IdentityProfile {
                full_name: "John Doe".to_string(),
                date_of_birth: "1995-05-15".to_string(),
            })
        );
    }
}
