//! Logic errors.

use std::path::PathBuf;

use thiserror::Error;

/// Execution context error.
#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum ContextError {
    #[error("GITHUB_TOKEN, GITHUB_REPOSITORY or GITHUB_EVENT_PATH is not set")]
    MissingVariables,

    #[error("Invalid GITHUB_REPOSITORY value: {source}")]
    InvalidRepositoryPath {
        source: apcheck_models::RepositoryPathError,
    },
}

/// Event payload error.
#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum PayloadError {
    #[error("Could not read event payload at {}: {}", path.display(), source)]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Could not parse event payload: {source}")]
    ParseError { source: serde_json::Error },

    #[error("Event payload is missing field '{field}'")]
    MissingField { field: &'static str },
}

/// Logic error.
#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum DomainError {
    #[error(transparent)]
    ContextError { source: ContextError },

    #[error(transparent)]
    PayloadError { source: PayloadError },

    #[error("This event doesn't contain PR")]
    MissingPullRequest,

    /// Wraps [`apcheck_ghapi_interface::ApiError`].
    #[error("API error: {source}")]
    ApiError {
        source: apcheck_ghapi_interface::ApiError,
    },

    /// Wraps [`apcheck_actions::ActionsError`].
    #[error("Runner error: {source}")]
    ActionsError {
        source: apcheck_actions::ActionsError,
    },
}

impl From<ContextError> for DomainError {
    fn from(e: ContextError) -> Self {
        Self::ContextError { source: e }
    }
}

impl From<PayloadError> for DomainError {
    fn from(e: PayloadError) -> Self {
        Self::PayloadError { source: e }
    }
}

impl From<apcheck_ghapi_interface::ApiError> for DomainError {
    fn from(e: apcheck_ghapi_interface::ApiError) -> Self {
        Self::ApiError { source: e }
    }
}

impl From<apcheck_actions::ActionsError> for DomainError {
    fn from(e: apcheck_actions::ActionsError) -> Self {
        Self::ActionsError { source: e }
    }
}

/// Result alias for `DomainError`.
pub type Result<T, E = DomainError> = core::result::Result<T, E>;
