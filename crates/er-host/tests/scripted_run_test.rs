use std::sync::Arc;

use er_core::registration::{PaymentStatus, WizardStep};
use er_core::AppConfig;
use er_host::adapters::LoggingWizardEventPort;
use er_host::bootstrap::{build_controller, run_registration, ApplicantScript};

fn applicant() -> ApplicantScript {
    toml::from_str(
        r#"
        identity_number = "123456789012"
        otp_code = "654321"
        mobile_number = "9876543210"
        email_address = "a@b.com"
        exam_type = "gate"
        exam_center = "delhi-01"

        [payment]
        method = "card"

        [payment.card]
        cardholder_name = "John Doe"
        number = "4111 1111 1111 1111"
        expiry = "09/28"
        cvv = "321"
        "#,
    )
    .unwrap()
}

#[tokio::test(start_paused = true)]
async fn scripted_applicant_completes_with_default_latencies() {
    let controller = build_controller(&AppConfig::defaults(), Arc::new(LoggingWizardEventPort));

    let confirmation = run_registration(&controller, &applicant()).await.unwrap();

    assert!(confirmation.registration_id.inner().starts_with("EDQ"));
    // Name and date of birth come from the simulated identity record.
    assert_eq!(confirmation.full_name, "John Doe");
    assert_eq!(controller.draft().await.date_of_birth, "1995-05-15");
    assert_eq!(confirmation.exam, "GATE 2024");
    assert_eq!(controller.current_step().await, WizardStep::Review);
}

#[tokio::test(start_paused = true)]
async fn declined_payment_stops_on_payment_step() {
    let config = AppConfig {
        decline_payments: true,
        ..AppConfig::defaults()
    };
    let controller = build_controller(&config, Arc::new(LoggingWizardEventPort));

    let err = run_registration(&controller, &applicant())
        .await
        .unwrap_err();

    assert!(err.to_string().contains("Payment: charge failed"));
    assert_eq!(controller.current_step().await, WizardStep::Payment);
    assert_eq!(
        controller.draft().await.payment_status,
        PaymentStatus::Failed
    );
}

#[tokio::test(start_paused = true)]
async fn missing_personal_details_stop_on_personal_step() {
    let config = AppConfig {
        profile_full_name: String::new(),
        profile_date_of_birth: String::new(),
        ..AppConfig::defaults()
    };
    let controller = build_controller(&config, Arc::new(LoggingWizardEventPort));

    let err = run_registration(&controller, &applicant())
        .await
        .unwrap_err();

    assert!(err.to_string().contains("Personal Details: cannot continue"));
    assert_eq!(controller.current_step().await, WizardStep::PersonalInfo);
}
