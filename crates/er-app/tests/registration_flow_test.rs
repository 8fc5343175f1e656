//! End-to-end wizard flow against in-memory providers.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use er_app::{WizardController, WizardDeps, WizardOptions};
use er_core::ports::{
    ChargeReceipt, ChargeRequest, ClockPort, IdentityProfile, IdentityVerificationPort,
    NotificationKind, NotificationPort, PaymentPort, SubmissionPort, WizardEventPort,
};
use er_core::registration::{
    CardDetails, DraftPatch, PaymentDetails, PaymentMethod, PaymentStatus, ProviderError,
    SubmissionRecord, WizardSnapshot, WizardStep,
};

#[derive(Default)]
struct InMemoryIdentity {
    calls: Mutex<Vec<String>>,
}

#[async_trait]
impl IdentityVerificationPort for InMemoryIdentity {
    async fn request_verification_code(&self, identity_number: &str) -> Result<(), ProviderError> {
        self.calls
            .lock()
            .unwrap()
            .push(format!("request:{identity_number}"));
        Ok(())
    }

    async fn verify_code(&self, identity_number: &str, code: &str) -> Result<(), ProviderError> {
        self.calls
            .lock()
            .unwrap()
            .push(format!("verify:{identity_number}:{code}"));
        Ok(())
    }

    async fn fetch_identity_profile(
        &self,
        identity_number: &str,
    ) -> Result<Option<IdentityProfile>, ProviderError> {
        self.calls
            .lock()
            .unwrap()
            .push(format!("profile:{identity_number}"));
        Ok(None)
    }
}

#[derive(Default)]
struct InMemoryPayment {
    charges: Mutex<Vec<ChargeRequest>>,
}

#[async_trait]
impl PaymentPort for InMemoryPayment {
    async fn charge(&self, request: &ChargeRequest) -> Result<ChargeReceipt, ProviderError> {
        self.charges.lock().unwrap().push(request.clone());
        Ok(ChargeReceipt {
            transaction_id: "txn-0001".to_string(),
        })
    }
}

#[derive(Default)]
struct InMemorySubmission {
    records: Mutex<Vec<SubmissionRecord>>,
}

#[async_trait]
impl SubmissionPort for InMemorySubmission {
    async fn submit(&self, record: &SubmissionRecord) -> Result<(), ProviderError> {
        self.records.lock().unwrap().push(record.clone());
        Ok(())
    }
}

struct FixedClock;

impl ClockPort for FixedClock {
    fn now_ms(&self) -> i64 {
        1_709_283_600_000
    }
}

#[derive(Default)]
struct CollectingNotifier {
    errors: Mutex<Vec<String>>,
}

impl NotificationPort for CollectingNotifier {
    fn notify(&self, kind: NotificationKind, title: &str, _message: &str) {
        if kind == NotificationKind::Error {
            self.errors.lock().unwrap().push(title.to_string());
        }
    }
}

#[derive(Default)]
struct CollectingEvents {
    snapshots: Mutex<Vec<WizardSnapshot>>,
}

#[async_trait]
impl WizardEventPort for CollectingEvents {
    async fn emit_wizard_state_changed(&self, snapshot: WizardSnapshot) {
        self.snapshots.lock().unwrap().push(snapshot);
    }
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[tokio::test]
async fn applicant_registers_from_identity_to_confirmation() {
    init_tracing();

    let identity = Arc::new(InMemoryIdentity::default());
    let payment = Arc::new(InMemoryPayment::default());
    let submission = Arc::new(InMemorySubmission::default());
    let notifier = Arc::new(CollectingNotifier::default());
    let events = Arc::new(CollectingEvents::default());
    let controller = WizardController::new(
        WizardDeps {
            identity: identity.clone(),
            payment: payment.clone(),
            submission: submission.clone(),
            clock: Arc::new(FixedClock),
            notifier: notifier.clone(),
            events: events.clone(),
        },
        WizardOptions::default(),
    );

    // Step 1: identity
    controller.request_code("123456789012").await.unwrap();
    assert!(!controller.snapshot().await.can_advance);
    controller.submit_code("654321").await.unwrap();
    assert!(controller.snapshot().await.can_advance);
    assert_eq!(controller.next().await.unwrap(), WizardStep::PersonalInfo);

    // Step 2: personal details
    controller
        .merge_draft(
            DraftPatch::default()
                .full_name("A B")
                .date_of_birth("2000-01-01")
                .mobile_number("9876543210")
                .email_address("a@b.com"),
        )
        .await
        .unwrap();
    assert_eq!(controller.next().await.unwrap(), WizardStep::ExamSelection);

    // Step 3: exam and center
    controller.select_exam_type("gate").await.unwrap();
    controller.select_center("delhi-01").await.unwrap();
    assert_eq!(controller.draft().await.fee_amount, 1800);
    assert_eq!(controller.next().await.unwrap(), WizardStep::Payment);

    // Step 4: card payment
    let fees = controller.snapshot().await.fees.unwrap();
    assert_eq!(fees.processing_fee, 36);
    assert_eq!(fees.gst, 330);
    assert_eq!(fees.total, 2166);

    controller
        .select_payment_method(PaymentMethod::Card)
        .await
        .unwrap();
    controller
        .stage_card(CardDetails {
            cardholder_name: "A B".to_string(),
            number: "4111-1111-1111-1111".to_string(),
            expiry: "09/28".to_string(),
            cvv: "321".to_string(),
        })
        .await
        .unwrap();
    controller.submit_payment().await.unwrap();
    assert_eq!(
        controller.draft().await.payment_status,
        PaymentStatus::Completed
    );
    assert_eq!(controller.current_step().await, WizardStep::Review);

    // Step 5: review and submit
    controller.set_acknowledged(true).await.unwrap();
    let confirmation = controller.submit_registration().await.unwrap();
    assert!(!confirmation.registration_id.inner().is_empty());
    assert!(confirmation.registration_id.inner().starts_with("EDQ"));
    assert_eq!(confirmation.full_name, "A B");
    assert_eq!(controller.current_step().await, WizardStep::Review);

    // Providers saw exactly what the applicant entered.
    assert_eq!(
        *identity.calls.lock().unwrap(),
        vec![
            "request:123456789012".to_string(),
            "verify:123456789012:654321".to_string(),
            "profile:123456789012".to_string(),
        ]
    );

    let charges = payment.charges.lock().unwrap().clone();
    assert_eq!(charges.len(), 1);
    assert_eq!(charges[0].amount, 2166);
    assert!(matches!(&charges[0].details, PaymentDetails::Card(card) if card.last_four().as_deref() == Some("1111")));

    let records = submission.records.lock().unwrap().clone();
    assert_eq!(records.len(), 1);
    let record = &records[0];
    assert_eq!(record["entry.name"], "A B");
    assert_eq!(record["entry.aadhaar"], "123456789012");
    assert_eq!(record["entry.dob"], "2000-01-01");
    assert_eq!(record["entry.mobile"], "9876543210");
    assert_eq!(record["entry.email"], "a@b.com");
    assert_eq!(record["entry.exam"], "gate");
    assert_eq!(record["entry.center"], "delhi-01");
    assert_eq!(record["entry.payment"], "completed");
    assert_eq!(record["entry.timestamp"], "2024-03-01T09:00:00.000Z");

    assert!(notifier.errors.lock().unwrap().is_empty());
    let last = events.snapshots.lock().unwrap().last().cloned().unwrap();
    assert_eq!(last.step_number, 5);
    assert!(!last.busy);
}

#[tokio::test]
async fn validation_failures_preserve_partial_input() {
    init_tracing();

    let notifier = Arc::new(CollectingNotifier::default());
    let controller = WizardController::new(
        WizardDeps {
            identity: Arc::new(InMemoryIdentity::default()),
            payment: Arc::new(InMemoryPayment::default()),
            submission: Arc::new(InMemorySubmission::default()),
            clock: Arc::new(FixedClock),
            notifier: notifier.clone(),
            events: Arc::new(CollectingEvents::default()),
        },
        WizardOptions::default(),
    );
    controller.request_code("123456789012").await.unwrap();
    controller.submit_code("654321").await.unwrap();
    controller.next().await.unwrap();

    controller
        .merge_draft(
            DraftPatch::default()
                .full_name("A B")
                .date_of_birth("2000-01-01")
                .mobile_number("98765"),
        )
        .await
        .unwrap();
    assert!(controller.next().await.is_err());

    let draft = controller.draft().await;
    assert_eq!(controller.current_step().await, WizardStep::PersonalInfo);
    assert_eq!(draft.full_name, "A B");
    assert_eq!(draft.mobile_number, "98765");
    assert_eq!(
        *notifier.errors.lock().unwrap(),
        vec!["Invalid Mobile Number".to_string()]
    );
}
