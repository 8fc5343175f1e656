use anyhow::Context;
use clap::Parser;

use examreg_lib::{resolve_config, run, Cli};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = resolve_config(cli.config.as_deref())?;
    er_host::bootstrap::tracing::init_tracing_subscriber(&config.log_directory)?;

    let runtime = tokio::runtime::Runtime::new().context("Failed to create tokio runtime")?;
    let output = runtime.block_on(run(&cli.applicant, &config))?;
    println!("{output}");
    Ok(())
}
