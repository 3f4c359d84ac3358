use std::{env, io};

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{ConfigPaths, GeneralConfig, LogLevel};

const LOG_FORMAT_VAR: &str = "COURSEKIT_LOG_FORMAT";

/// Initialize tracing from the `[general]` config section
///
/// Logs to stderr so command output on stdout stays clean, and additionally
/// to a daily rolling file when `log_to_file` is set.
///
/// # Errors
/// Returns error if the log directory cannot be created or a subscriber is
/// already installed
pub fn init(general: &GeneralConfig) -> Result<(), Box<dyn std::error::Error>> {
    if general.log_to_file {
        init_with_file(general.log_level)
    } else {
        init_cli_mode(general.log_level)
    }
}

/// Initialize stderr-only tracing
///
/// Uses RUST_LOG if set, otherwise `level`. Output is pretty unless
/// `COURSEKIT_LOG_FORMAT=json`.
///
/// # Errors
/// Returns error if tracing subscriber initialization fails
pub fn init_cli_mode(level: LogLevel) -> Result<(), Box<dyn std::error::Error>> {
    let registry = tracing_subscriber::registry().with(env_filter(level));

    if json_format() {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_level(true)
                    .with_writer(io::stderr),
            )
            .try_init()?;
    } else {
        registry
            .with(
                fmt::layer()
                    .compact()
                    .with_target(true)
                    .with_level(true)
                    .with_writer(io::stderr),
            )
            .try_init()?;
    }

    Ok(())
}

/// Initialize tracing with file output
///
/// Same console output as [`init_cli_mode`], plus a daily rolling file in
/// the coursekit logs directory.
///
/// # Errors
/// Returns error if file creation or tracing subscriber initialization fails
pub fn init_with_file(level: LogLevel) -> Result<(), Box<dyn std::error::Error>> {
    const DAYS_TO_KEEP: usize = 7;

    let log_dir = ConfigPaths::log_dir()?;

    let file_appender = tracing_appender::rolling::Builder::new()
        .rotation(tracing_appender::rolling::Rotation::DAILY)
        .max_log_files(DAYS_TO_KEEP)
        .filename_prefix("coursekit")
        .filename_suffix("log")
        .build(&log_dir)?;
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let registry = tracing_subscriber::registry().with(env_filter(level));

    if json_format() {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_level(true)
                    .with_writer(io::stderr),
            )
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_level(true)
                    .with_writer(non_blocking)
                    .with_ansi(false),
            )
            .try_init()?;
    } else {
        registry
            .with(
                fmt::layer()
                    .pretty()
                    .with_target(true)
                    .with_level(true)
                    .with_writer(io::stderr),
            )
            .with(
                fmt::layer()
                    .compact()
                    .with_target(true)
                    .with_level(true)
                    .with_writer(non_blocking)
                    .with_ansi(false),
            )
            .try_init()?;
    }

    // Keep the background writer alive for the rest of the process.
    std::mem::forget(guard);

    Ok(())
}

fn env_filter(level: LogLevel) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.to_string()))
}

fn json_format() -> bool {
    env::var(LOG_FORMAT_VAR).is_ok_and(|format| format == "json")
}
