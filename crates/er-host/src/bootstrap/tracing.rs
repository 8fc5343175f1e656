//! Tracing configuration for examreg
//!
//! Stderr always receives formatted events. When a log directory is
//! configured, a non-blocking file writer is added alongside.

use std::{fs, io, path::Path, sync::OnceLock};

use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::{fmt, fmt::writer::BoxMakeWriter, prelude::*, registry};

static LOG_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

const LOG_FILE_NAME: &str = "examreg.log";

/// Check if running in development environment
fn is_development() -> bool {
    cfg!(debug_assertions)
}

/// Build the default filter directives for tracing
///
/// - **Development**: debug level everywhere
/// - **Production**: info level, simulated providers stay at info
fn build_filter_directives(is_dev: bool) -> Vec<String> {
    vec![
        if is_dev { "debug" } else { "info" }.to_string(),
        if is_dev { "er_app=debug" } else { "er_app=info" }.to_string(),
        if is_dev {
            "er_infra=debug"
        } else {
            "er_infra=info"
        }
        .to_string(),
    ]
}

/// Initialize the tracing subscriber
///
/// - **Environment filter**: respects `RUST_LOG`, otherwise debug in dev and info in release
/// - **Stderr**: always on, so stdout stays free for the confirmation output
/// - **File**: `<log_directory>/examreg.log` when `log_directory` is non-empty
///
/// ## Errors / 错误
///
/// Returns `Err` if a subscriber is already registered.
pub fn init_tracing_subscriber(log_directory: &Path) -> anyhow::Result<()> {
    let filter_directives = build_filter_directives(is_development());
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter_directives.join(",")));

    let console_writer: BoxMakeWriter = BoxMakeWriter::new(io::stderr);
    let file_writer = if log_directory.as_os_str().is_empty() {
        None
    } else {
        match build_file_writer(log_directory) {
            Ok(writer) => Some(writer),
            Err(err) => {
                eprintln!("Failed to initialize file logging, falling back to stderr: {err}");
                None
            }
        }
    };

    // "2025-01-15 10:30:45.123 INFO [file.rs:42] [target] message"
    let console_layer = fmt::layer()
        .with_timer(fmt::time::ChronoUtc::new(
            "%Y-%m-%d %H:%M:%S%.3f".to_string(),
        ))
        .with_level(true)
        .with_file(true)
        .with_line_number(true)
        .with_target(true)
        .with_ansi(cfg!(not(test)))
        .with_writer(console_writer);

    let file_layer = file_writer.map(|writer| {
        fmt::layer()
            .with_timer(fmt::time::ChronoUtc::new(
                "%Y-%m-%d %H:%M:%S%.3f".to_string(),
            ))
            .with_level(true)
            .with_file(true)
            .with_line_number(true)
            .with_target(true)
            .with_ansi(false)
            .with_writer(writer)
    });

    let subscriber = registry().with(env_filter).with(console_layer);

    if let Some(layer) = file_layer {
        subscriber.with(layer).try_init()?;
    } else {
        subscriber.try_init()?;
    }

    Ok(())
}

fn build_file_writer(log_directory: &Path) -> anyhow::Result<NonBlocking> {
    fs::create_dir_all(log_directory)?;

    let file_appender = tracing_appender::rolling::never(log_directory, LOG_FILE_NAME);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    LOG_GUARD
        .set(guard)
        .map_err(|_| anyhow::anyhow!("Tracing log guard already initialized"))?;

    Ok(non_blocking)
}
