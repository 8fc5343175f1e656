//! Scripted run: drives one applicant through all five steps.

use anyhow::Context;
use tracing::{info, info_span, Instrument};

use er_app::WizardController;
use er_core::registration::{Confirmation, DraftPatch, PaymentMethod, WizardStep};

use super::applicant::ApplicantScript;

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

/// Runs the whole wizard for `applicant` and returns the confirmation.
///
/// Stops at the first step that refuses to advance; the error names the step.
pub async fn run_registration(
    controller: &WizardController,
    applicant: &ApplicantScript,
) -> anyhow::Result<Confirmation> {
    async {
        // Identity
        controller
            .request_code(&applicant.identity_number)
            .await
            .context("Identity verification: code request failed")?;
        controller
            .submit_code(&applicant.otp_code)
            .await
            .context("Identity verification: code not accepted")?;
        advance_from(controller, WizardStep::Identity).await?;

        // Personal details; empty answers keep whatever auto-fill supplied.
        controller
            .merge_draft(DraftPatch {
                full_name: non_empty(&applicant.full_name),
                date_of_birth: non_empty(&applicant.date_of_birth),
                mobile_number: non_empty(&applicant.mobile_number),
                email_address: non_empty(&applicant.email_address),
                ..DraftPatch::default()
            })
            .await
            .context("Personal Details: details rejected")?;
        advance_from(controller, WizardStep::PersonalInfo).await?;

        // Exam
        controller
            .select_exam_type(&applicant.exam_type)
            .await
            .context("Exam details: exam type rejected")?;
        controller
            .select_center(&applicant.exam_center)
            .await
            .context("Exam details: exam center rejected")?;
        advance_from(controller, WizardStep::ExamSelection).await?;

        // Payment; success advances to review on its own.
        let method = applicant
            .payment
            .method()
            .context("Payment: unknown payment method")?;
        controller.select_payment_method(method).await?;
        match method {
            PaymentMethod::Card => {
                controller.stage_card(applicant.payment.card.clone()).await?;
            }
            PaymentMethod::Upi => controller.stage_upi_id(&applicant.payment.upi_id).await?,
            PaymentMethod::Netbanking => controller.stage_bank(&applicant.payment.bank).await?,
            PaymentMethod::Wallet => {}
        }
        let receipt = controller
            .submit_payment()
            .await
            .context("Payment: charge failed")?;
        info!(transaction_id = %receipt.transaction_id, "payment receipt");

        // Review
        controller
            .set_acknowledged(applicant.acknowledge)
            .await?;
        controller
            .submit_registration()
            .await
            .context("Review & Submit: submission failed")
    }
    .instrument(info_span!("host.run_registration"))
    .await
}

async fn advance_from(controller: &WizardController, step: WizardStep) -> anyhow::Result<()> {
    controller
        .next()
        .await
        .with_context(|| format!("{step}: cannot continue"))?;
    Ok(())
}
