//! CLI module.

use anyhow::Result;
use apcheck_actions::RunnerActionsService;
use apcheck_config::Config;
use apcheck_logging::configure_logging;
use args::{Args, CommandExecutor};
use clap::Parser;
use shadow_rs::shadow;
use tracing::info;

pub(crate) mod args;
mod config_validator;

shadow!(build);

/// Get version data.
pub fn get_version_data() -> String {
    format!(
        "{} {} (commit {} - {})",
        build::PROJECT_NAME,
        build::PKG_VERSION,
        build::SHORT_COMMIT,
        build::COMMIT_DATE_3339
    )
}

/// Initialize command line.
pub fn initialize_command_line() -> Result<()> {
    dotenv::dotenv().ok();

    let args = Args::parse();
    let config = Config::from_env(env!("CARGO_PKG_VERSION").to_string());
    configure_logging(&config)?;
    config_validator::validate_and_report(&config, &RunnerActionsService::stdout(&config))?;

    info!("{}", get_version_data());

    CommandExecutor::parse_args(config, args)
}
