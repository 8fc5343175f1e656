//! examreg: runs the five-step exam registration wizard for one applicant.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::Parser;
use er_core::AppConfig;
use er_host::adapters::LoggingWizardEventPort;
use er_host::bootstrap::{build_controller, load_applicant, load_config, run_registration};

#[derive(Parser, Debug)]
#[command(name = "examreg")]
#[command(about = "Run the exam registration wizard for one applicant", long_about = None)]
pub struct Cli {
    /// Configuration file (TOML); built-in defaults when omitted
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Applicant answers (TOML)
    #[arg(short, long)]
    pub applicant: PathBuf,
}

/// Loads `path`, or returns the defaults when no file was given.
pub fn resolve_config(path: Option<&Path>) -> anyhow::Result<AppConfig> {
    match path {
        Some(path) => load_config(path),
        None => Ok(AppConfig::defaults()),
    }
}

/// Runs the wizard and renders the confirmation as pretty JSON.
pub async fn run(applicant_path: &Path, config: &AppConfig) -> anyhow::Result<String> {
    let applicant = load_applicant(applicant_path)?;
    let controller = build_controller(config, Arc::new(LoggingWizardEventPort));

    let confirmation = run_registration(&controller, &applicant).await?;
    tracing::info!(registration_id = %confirmation.registration_id, "registration complete");

    let output = serde_json::json!({
        "confirmation": &confirmation,
        "summary": confirmation.summary_lines(),
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn cli_requires_applicant() {
        assert!(Cli::try_parse_from(["examreg"]).is_err());

        let cli = Cli::try_parse_from(["examreg", "--applicant", "a.toml", "-c", "cfg.toml"])
            .unwrap();
        assert_eq!(cli.applicant, PathBuf::from("a.toml"));
        assert_eq!(cli.config, Some(PathBuf::from("cfg.toml")));
    }

    #[test]
    fn resolve_config_without_file_uses_defaults() {
        assert_eq!(resolve_config(None).unwrap(), AppConfig::defaults());
    }

    #[tokio::test(start_paused = true)]
    async fn run_prints_confirmation_json() {
        let mut applicant = NamedTempFile::new().unwrap();
        applicant
            .write_all(
                br#"
                identity_number = "1234 5678 9012"
                otp_code = "654321"
                full_name = "A B"
                date_of_birth = "2000-01-01"
                mobile_number = "9876543210"
                email_address = "a@b.com"
                exam_type = "jee-main"
                exam_center = "pune-01"

                [payment]
                method = "upi"
                upi_id = "ab@upi"
                "#,
            )
            .unwrap();

        let output = run(applicant.path(), &AppConfig::defaults()).await.unwrap();

        let json: serde_json::Value = serde_json::from_str(&output).unwrap();
        let registration_id = json["confirmation"]["registration_id"].as_str().unwrap();
        assert!(registration_id.starts_with("EDQ"));
        assert_eq!(json["confirmation"]["full_name"], "A B");
        assert_eq!(json["confirmation"]["exam"], "JEE Main 2024");
        assert_eq!(
            json["summary"][0],
            format!("Registration ID: {registration_id}")
        );
    }
}
