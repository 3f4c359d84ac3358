//! coursekit - lesson audio player and course progress from the command line
//!
//! Every invocation restores the player from the runtime state file, runs
//! one command, and writes the state back if the command changed it.

use std::{env, error::Error, fs, process};

use coursekit::{
    cli::{CliService, formatting::format_error},
    config::ConfigPaths,
    config_store::ConfigStore,
    runtime_state::RuntimeState,
    service_manager::Services,
    tracing_config,
};
use tracing::{info, instrument};

#[tokio::main]
async fn main() {
    let args: Vec<String> = env::args().skip(1).collect();

    if let Err(e) = run(&args).await {
        eprintln!("{}", format_error(&e.to_string()));
        process::exit(1);
    }
}

/// Executes one CLI command and persists the resulting runtime state.
///
/// # Errors
/// Returns error if configuration, services, or the command itself fail.
async fn run(args: &[String]) -> Result<(), Box<dyn Error>> {
    ensure_coursekit_directories()?;

    let config_store = ConfigStore::load()?;
    tracing_config::init(&config_store.get_current().general)?;

    let runtime = RuntimeState::load().await?;
    let services = Services::new(&config_store, &runtime)?;
    let cli_service = CliService::new(&config_store, services, runtime);

    let category = args.first().map(String::as_str).unwrap_or("help");
    let command = args.get(1).map(String::as_str).unwrap_or("");
    let command_args = args.get(2..).unwrap_or(&[]);

    let output = cli_service
        .execute_command(category, command, command_args)
        .await?;

    if let Some(mut updated) = cli_service.updated_runtime() {
        updated.save().await?;
    }

    if !output.trim().is_empty() {
        println!("{output}");
    }

    Ok(())
}

#[instrument]
fn ensure_coursekit_directories() -> Result<(), Box<dyn Error>> {
    let config_dir = ConfigPaths::config_dir()?;
    if !config_dir.exists() {
        info!("Creating config directory: {}", config_dir.display());
        fs::create_dir_all(&config_dir)?;
    }
    Ok(())
}
