//! Wizard controller.
//!
//! This module coordinates the wizard state machine, the step handlers and
//! the provider side effects.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info, info_span, warn, Instrument};

use er_core::ports::{
    ChargeReceipt, ClockPort, IdentityVerificationPort, NotificationKind, NotificationPort,
    PaymentPort, SubmissionPort, WizardEventPort,
};
use er_core::registration::validation::normalize_identity_number;
use er_core::registration::{
    ActiveStep, CardDetails, Confirmation, DraftPatch, PaymentMethod, PaymentStep,
    PersonalInfoStep, ProviderError, ProviderKind, RegistrationDraft, RegistrationError,
    ValidationError, WizardAction, WizardEvent, WizardSnapshot, WizardStateMachine, WizardStep,
};

use crate::deps::WizardDeps;
use crate::usecases::registration::context::{RegistrationContext, RegistrationSession};
use crate::usecases::registration::RegistrationIdGenerator;

/// Tunables for a controller instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WizardOptions {
    /// Upper bound for a single provider call. `None` waits indefinitely.
    pub provider_timeout: Option<Duration>,
    pub registration_id_prefix: String,
}

impl Default for WizardOptions {
    fn default() -> Self {
        Self {
            provider_timeout: None,
            registration_id_prefix: "EDQ".to_string(),
        }
    }
}

/// Orchestrator that drives the registration wizard and its side effects.
///
/// Mutating operations are serialized through the context's dispatch lock.
/// Every failure is reported to the notification port before it is returned.
pub struct WizardController {
    context: Arc<RegistrationContext>,
    ids: RegistrationIdGenerator,
    provider_timeout: Option<Duration>,

    identity: Arc<dyn IdentityVerificationPort>,
    payment: Arc<dyn PaymentPort>,
    submission: Arc<dyn SubmissionPort>,
    clock: Arc<dyn ClockPort>,
    notifier: Arc<dyn NotificationPort>,
    events: Arc<dyn WizardEventPort>,
}

impl WizardController {
    pub fn new(deps: WizardDeps, options: WizardOptions) -> Self {
        let WizardDeps {
            identity,
            payment,
            submission,
            clock,
            notifier,
            events,
        } = deps;

        Self {
            context: RegistrationContext::default().arc(),
            ids: RegistrationIdGenerator::new(Arc::clone(&clock), options.registration_id_prefix),
            provider_timeout: options.provider_timeout,
            identity,
            payment,
            submission,
            clock,
            notifier,
            events,
        }
    }

    // ---------------------------------------------------------------------
    // Reads (no dispatch lock)
    // ---------------------------------------------------------------------

    pub async fn current_step(&self) -> WizardStep {
        self.context.get_session().await.state.current_step()
    }

    /// The handler bound to the current step.
    pub async fn current_handler(&self) -> ActiveStep {
        self.context.get_session().await.active
    }

    pub async fn draft(&self) -> RegistrationDraft {
        self.context.get_session().await.draft
    }

    pub async fn snapshot(&self) -> WizardSnapshot {
        self.context.snapshot().await
    }

    pub async fn confirmation(&self) -> Option<Confirmation> {
        match self.context.get_session().await.active {
            ActiveStep::Review(review) => review.confirmation().cloned(),
            _ => None,
        }
    }

    pub fn is_busy(&self) -> bool {
        self.context.is_busy()
    }

    // ---------------------------------------------------------------------
    // Navigation
    // ---------------------------------------------------------------------

    /// Moves forward one step. Bounds-checked only; the caller gates readiness.
    pub async fn advance(&self) -> WizardStep {
        let _dispatch_guard = self.context.acquire_dispatch_lock().await;
        let step = self.dispatch(WizardEvent::Advance).await;
        self.emit().await;
        step
    }

    /// Moves back one step. Always allowed; a no-op on the first step.
    pub async fn retreat(&self) -> WizardStep {
        let _dispatch_guard = self.context.acquire_dispatch_lock().await;
        let step = self.dispatch(WizardEvent::Retreat).await;
        self.emit().await;
        step
    }

    /// Moves forward only if the active handler reports it is ready.
    pub async fn next(&self) -> Result<WizardStep, RegistrationError> {
        let _dispatch_guard = self.context.acquire_dispatch_lock().await;
        let result: Result<WizardStep, RegistrationError> = async {
            self.context
                .update(|session| session.active.check_advance(&session.draft))
                .await?;
            Ok(self.dispatch(WizardEvent::Advance).await)
        }
        .instrument(info_span!("usecase.wizard_controller.next"))
        .await;
        self.finish(result).await
    }

    // ---------------------------------------------------------------------
    // Draft
    // ---------------------------------------------------------------------

    /// Shallow-merges `patch` into the draft as one atomic update.
    ///
    /// Only fields the applicant types in on the current step are accepted.
    /// A patch touching any other field is rejected whole.
    pub async fn merge_draft(
        &self,
        patch: DraftPatch,
    ) -> Result<RegistrationDraft, RegistrationError> {
        let _dispatch_guard = self.context.acquire_dispatch_lock().await;
        let result = self
            .context
            .update(|session| -> Result<_, RegistrationError> {
                patch.check_editable_on(session.state.current_step())?;
                if let Some(identity_number) = &patch.identity_number {
                    stage_identity_number(session, identity_number);
                }
                session.draft.merge(patch);
                Ok(session.draft.clone())
            })
            .await;
        self.finish(result).await
    }

    // ---------------------------------------------------------------------
    // Identity
    // ---------------------------------------------------------------------

    pub async fn request_code(&self, identity_number: &str) -> Result<(), RegistrationError> {
        let _dispatch_guard = self.context.acquire_dispatch_lock().await;
        let result = self
            .send_code(Some(identity_number.to_string()))
            .instrument(info_span!("usecase.wizard_controller.request_code"))
            .await;
        self.finish(result).await
    }

    /// Sends a fresh code to the stored identity number. Leaves verification intact.
    pub async fn resend_code(&self) -> Result<(), RegistrationError> {
        let _dispatch_guard = self.context.acquire_dispatch_lock().await;
        let result = self
            .send_code(None)
            .instrument(info_span!("usecase.wizard_controller.resend_code"))
            .await;
        self.finish(result).await
    }

    pub async fn submit_code(&self, code: &str) -> Result<(), RegistrationError> {
        let _dispatch_guard = self.context.acquire_dispatch_lock().await;
        let code = code.trim().to_string();
        let result: Result<(), RegistrationError> = async {
            let (identity_number, code) = self
                .context
                .update(|session| -> Result<_, ValidationError> {
                    session.draft.merge(DraftPatch::default().otp_code(code));
                    session
                        .active
                        .identity_mut()?
                        .begin_code_verification(&session.draft)
                })
                .await?;

            self.call_provider(
                ProviderKind::Verification,
                self.identity.verify_code(&identity_number, &code),
            )
            .await?;

            self.context
                .update(|session| session.active.identity_mut().map(|step| step.code_verified()))
                .await?;
            info!("identity verified");
            self.notifier.notify(
                NotificationKind::Success,
                "Identity Verified Successfully",
                "Your identity has been verified",
            );
            Ok(())
        }
        .instrument(info_span!("usecase.wizard_controller.submit_code"))
        .await;
        self.finish(result).await
    }

    // ---------------------------------------------------------------------
    // Exam selection
    // ---------------------------------------------------------------------

    pub async fn select_exam_type(&self, id: &str) -> Result<(), RegistrationError> {
        let _dispatch_guard = self.context.acquire_dispatch_lock().await;
        let result = self
            .context
            .update(|session| -> Result<(), RegistrationError> {
                let step = session.active.exam_selection_mut()?;
                step.check_unpaid(&session.draft)?;
                let patch = step.select_exam_type(id)?;
                session.draft.merge(patch);
                Ok(())
            })
            .await;
        self.finish(result).await
    }

    pub async fn select_center(&self, id: &str) -> Result<(), RegistrationError> {
        let _dispatch_guard = self.context.acquire_dispatch_lock().await;
        let result = self
            .context
            .update(|session| -> Result<(), RegistrationError> {
                let step = session.active.exam_selection_mut()?;
                step.check_unpaid(&session.draft)?;
                let patch = step.select_center(id)?;
                session.draft.merge(patch);
                Ok(())
            })
            .await;
        self.finish(result).await
    }

    // ---------------------------------------------------------------------
    // Payment
    // ---------------------------------------------------------------------

    pub async fn select_payment_method(
        &self,
        method: PaymentMethod,
    ) -> Result<(), RegistrationError> {
        self.with_payment_step(|step| step.select_method(method)).await
    }

    pub async fn stage_card(&self, card: CardDetails) -> Result<(), RegistrationError> {
        self.with_payment_step(|step| step.stage_card(card)).await
    }

    pub async fn stage_upi_id(&self, upi_id: &str) -> Result<(), RegistrationError> {
        self.with_payment_step(|step| step.stage_upi_id(upi_id)).await
    }

    pub async fn stage_bank(&self, bank: &str) -> Result<(), RegistrationError> {
        self.with_payment_step(|step| step.stage_bank(bank)).await
    }

    /// Charges the computed total. Success advances to Review; failure leaves
    /// `payment_status = failed` until the applicant tries again.
    pub async fn submit_payment(&self) -> Result<ChargeReceipt, RegistrationError> {
        let _dispatch_guard = self.context.acquire_dispatch_lock().await;
        let result: Result<ChargeReceipt, RegistrationError> = async {
            let request = self
                .context
                .update(|session| -> Result<_, ValidationError> {
                    let request = session.active.payment_mut()?.begin_charge(&session.draft)?;
                    session.draft.merge(PaymentStep::attempt_patch());
                    Ok(request)
                })
                .await?;
            info!(amount = request.amount, method = %request.method, "payment dispatched");

            let outcome = self
                .call_provider(ProviderKind::Payment, self.payment.charge(&request))
                .await;
            self.context
                .update(|session| {
                    session
                        .draft
                        .merge(PaymentStep::settlement_patch(outcome.is_ok()))
                })
                .await;
            let receipt = outcome?;

            info!(transaction_id = %receipt.transaction_id, "payment completed");
            self.notifier.notify(
                NotificationKind::Success,
                "Payment Successful",
                &format!("Payment of \u{20b9}{} completed", request.amount),
            );
            self.dispatch(WizardEvent::Advance).await;
            Ok(receipt)
        }
        .instrument(info_span!("usecase.wizard_controller.submit_payment"))
        .await;
        self.finish(result).await
    }

    // ---------------------------------------------------------------------
    // Review
    // ---------------------------------------------------------------------

    pub async fn set_acknowledged(&self, acknowledged: bool) -> Result<(), RegistrationError> {
        let _dispatch_guard = self.context.acquire_dispatch_lock().await;
        let result = self
            .context
            .update(|session| -> Result<(), RegistrationError> {
                session.active.review_mut()?.set_acknowledged(acknowledged);
                Ok(())
            })
            .await;
        self.finish(result).await
    }

    /// Sends the finished registration. The wizard stays locked on Review afterwards.
    pub async fn submit_registration(&self) -> Result<Confirmation, RegistrationError> {
        let _dispatch_guard = self.context.acquire_dispatch_lock().await;
        let result: Result<Confirmation, RegistrationError> = async {
            let submitted_at = self.clock.now();
            let record = self
                .context
                .update(|session| -> Result<_, ValidationError> {
                    if session.state.is_submitted() {
                        return Err(ValidationError::AlreadySubmitted);
                    }
                    session
                        .active
                        .review_mut()?
                        .begin_submission(&session.draft, submitted_at)
                })
                .await?;

            self.call_provider(ProviderKind::Submission, self.submission.submit(&record))
                .await?;

            let registration_id = self.ids.next_id();
            let confirmation = self
                .context
                .update(|session| -> Result<_, ValidationError> {
                    let confirmation =
                        Confirmation::new(registration_id, &session.draft, submitted_at);
                    session.active.review_mut()?.complete(confirmation.clone());
                    Ok(confirmation)
                })
                .await?;
            self.dispatch(WizardEvent::Submitted).await;

            info!(registration_id = %confirmation.registration_id, "registration submitted");
            self.notifier.notify(
                NotificationKind::Success,
                "Registration Successful!",
                &format!("Your registration ID is {}", confirmation.registration_id),
            );
            Ok(confirmation)
        }
        .instrument(info_span!("usecase.wizard_controller.submit_registration"))
        .await;
        self.finish(result).await
    }

    // ---------------------------------------------------------------------
    // Internals
    // ---------------------------------------------------------------------

    async fn send_code(&self, identity_number: Option<String>) -> Result<(), RegistrationError> {
        let identity_number = self
            .context
            .update(|session| -> Result<_, ValidationError> {
                if let Some(identity_number) = identity_number {
                    stage_identity_number(session, &identity_number);
                    session
                        .draft
                        .merge(DraftPatch::default().identity_number(identity_number));
                }
                session
                    .active
                    .identity_mut()?
                    .begin_code_request(&session.draft)
            })
            .await?;

        self.call_provider(
            ProviderKind::Verification,
            self.identity.request_verification_code(&identity_number),
        )
        .await?;

        self.context
            .update(|session| session.active.identity_mut().map(|step| step.code_sent()))
            .await?;
        info!("verification code sent");
        self.notifier.notify(
            NotificationKind::Success,
            "Code Sent Successfully",
            "A verification code has been sent to the mobile number linked with your identity number",
        );
        Ok(())
    }

    async fn with_payment_step(
        &self,
        f: impl FnOnce(&mut PaymentStep),
    ) -> Result<(), RegistrationError> {
        let _dispatch_guard = self.context.acquire_dispatch_lock().await;
        let result = self
            .context
            .update(|session| -> Result<(), RegistrationError> {
                f(session.active.payment_mut()?);
                Ok(())
            })
            .await;
        self.finish(result).await
    }

    /// Applies one state machine event and executes its actions.
    ///
    /// Callers must hold the dispatch lock.
    async fn dispatch(&self, event: WizardEvent) -> WizardStep {
        let span = info_span!("usecase.wizard_controller.dispatch", event = ?event);
        async {
            let (from, to, actions) = self
                .context
                .update(|session| {
                    let from = session.state.current_step();
                    let (next, actions) = WizardStateMachine::transition(session.state, event);
                    session.state = next;
                    (from, next.current_step(), actions)
                })
                .await;
            info!(from = ?from, to = ?to, event = ?event, "wizard step transition");
            self.execute_actions(actions).await;
            to
        }
        .instrument(span)
        .await
    }

    async fn execute_actions(&self, actions: Vec<WizardAction>) {
        for action in actions {
            debug!(?action, "wizard executing action");
            match action {
                WizardAction::EnterStep { step } => {
                    self.context
                        .update(|session| session.active = ActiveStep::enter(step))
                        .await;
                }
                WizardAction::PrefillPersonalDetails => {
                    self.prefill_personal_details().await;
                }
            }
        }
    }

    /// Auto-fill is advisory: failures are logged, never surfaced as errors.
    async fn prefill_personal_details(&self) {
        let identity_number = self
            .context
            .update(|session| match session.active.personal_info_mut() {
                Ok(step) if step.wants_prefill(&session.draft) => {
                    step.mark_prefill_requested();
                    Some(normalize_identity_number(&session.draft.identity_number))
                }
                _ => None,
            })
            .await;
        let Some(identity_number) = identity_number else {
            return;
        };

        let profile = match self
            .call_provider(
                ProviderKind::IdentityProfile,
                self.identity.fetch_identity_profile(&identity_number),
            )
            .await
        {
            Ok(Some(profile)) => profile,
            Ok(None) => {
                debug!("no identity profile available for auto-fill");
                return;
            }
            Err(err) => {
                warn!(error = %err, "identity profile lookup failed; skipping auto-fill");
                return;
            }
        };

        let filled = self
            .context
            .update(|session| {
                if session.active.step() != WizardStep::PersonalInfo {
                    return false;
                }
                let patch = PersonalInfoStep::prefill_patch(&session.draft, &profile);
                if patch.is_empty() {
                    return false;
                }
                session.draft.merge(patch);
                true
            })
            .await;

        if filled {
            info!("personal details auto-filled from identity record");
            self.notifier.notify(
                NotificationKind::Success,
                "Details Auto-filled",
                "Name and date of birth have been filled from your identity records",
            );
        }
    }

    /// Awaits a provider call with the busy flag raised and the optional timeout applied.
    async fn call_provider<T>(
        &self,
        provider: ProviderKind,
        call: impl Future<Output = Result<T, ProviderError>>,
    ) -> Result<T, RegistrationError> {
        let _busy = self.context.mark_busy();
        self.emit().await;

        let outcome = match self.provider_timeout {
            Some(limit) => match tokio::time::timeout(limit, call).await {
                Ok(outcome) => outcome,
                Err(_) => Err(ProviderError::TimedOut {
                    after_ms: u64::try_from(limit.as_millis()).unwrap_or(u64::MAX),
                }),
            },
            None => call.await,
        };

        outcome.map_err(|source| {
            warn!(provider = %provider, error = %source, "provider call failed");
            RegistrationError::provider(provider, source)
        })
    }

    async fn emit(&self) {
        let snapshot = self.context.snapshot().await;
        self.events.emit_wizard_state_changed(snapshot).await;
    }

    /// Publishes the resulting state and reports any error to the applicant.
    async fn finish<T>(
        &self,
        result: Result<T, RegistrationError>,
    ) -> Result<T, RegistrationError> {
        self.emit().await;
        if let Err(err) = &result {
            if err.is_validation() {
                debug!(error = %err, "wizard operation rejected");
            }
            self.notifier
                .notify(NotificationKind::Error, err.title(), &err.user_message());
        }
        result
    }
}

/// Drops any code sent or verified for the old number when the applicant types a new one.
fn stage_identity_number(session: &mut RegistrationSession, identity_number: &str) {
    if normalize_identity_number(identity_number)
        == normalize_identity_number(&session.draft.identity_number)
    {
        return;
    }
    if let Ok(step) = session.active.identity_mut() {
        step.identity_number_changed();
    }
}
