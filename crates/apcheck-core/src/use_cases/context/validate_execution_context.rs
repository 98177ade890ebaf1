use std::path::PathBuf;

use apcheck_config::GitHubEnvConfig;
use apcheck_models::RepositoryPath;

use crate::ContextError;

/// Validated runner environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionContext {
    /// Authentication token.
    pub token: String,
    /// Target repository.
    pub repository: RepositoryPath,
    /// Path to the JSON event payload.
    pub event_path: PathBuf,
}

/// Check that every required runner value is present.
///
/// Nothing remote may happen before this succeeds.
pub fn validate_execution_context(
    github: &GitHubEnvConfig,
) -> Result<ExecutionContext, ContextError> {
    let (Some(token), Some(repository), Some(event_path)) =
        (&github.token, &github.repository, &github.event_path)
    else {
        return Err(ContextError::MissingVariables);
    };

    let repository = RepositoryPath::try_from(repository.as_str())
        .map_err(|e| ContextError::InvalidRepositoryPath { source: e })?;

    Ok(ExecutionContext {
        token: token.clone(),
        repository,
        event_path: event_path.into(),
    })
}
