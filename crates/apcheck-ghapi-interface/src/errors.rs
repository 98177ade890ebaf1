//! API errors.

use thiserror::Error;

/// API error.
#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum ApiError {
    /// Reviews could not be listed.
    #[error(
        "Could not list reviews for pull request #{} on repository {}",
        pr_number,
        repository_path
    )]
    ReviewsListError {
        pr_number: u64,
        repository_path: String,
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },

    #[error(transparent)]
    ImplementationError {
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },
}

/// Result alias for `ApiError`.
pub type Result<T, E = ApiError> = core::result::Result<T, E>;
