//! Validation utilities.

use apcheck_actions::ActionsService;
use apcheck_config::Config;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Errors on environment variables:\n{}", errors)]
    EnvVarsError { errors: String },
}

fn validate_env_vars(config: &Config) -> Result<(), ValidationError> {
    let mut errors = Vec::new();

    if let Err(e) = config.api.driver() {
        errors.push(format!("  - APCHECK_API_DRIVER: {e}"));
    }
    if config.api.github.root_url.is_empty() {
        errors.push("  - Missing env. var.: GITHUB_API_URL".to_string());
    }
    if config.api.github.page_size == 0 || config.api.github.page_size > 100 {
        errors.push(format!(
            "  - APCHECK_API_GITHUB_PAGE_SIZE: should be between 1 and 100, got {}",
            config.api.github.page_size
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::EnvVarsError {
            errors: errors.join("\n"),
        })
    }
}

/// Validate configuration.
///
/// Runner values (token, repository, event path) are checked later, when
/// the event is handled, so that a missing value is reported to the runner.
pub fn validate_configuration(config: &Config) -> Result<(), ValidationError> {
    validate_env_vars(config)
}

/// Validate configuration, reporting a failure to the runner.
pub fn validate_and_report(
    config: &Config,
    actions_service: &dyn ActionsService,
) -> anyhow::Result<()> {
    if let Err(e) = validate_configuration(config) {
        actions_service.set_failed(&e.to_string())?;
        return Err(e.into());
    }

    Ok(())
}
