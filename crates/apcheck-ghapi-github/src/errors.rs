use apcheck_ghapi_interface::ApiError;

/// GitHub driver error.
#[derive(Debug, thiserror::Error)]
#[allow(clippy::enum_variant_names, missing_docs)]
pub enum GitHubError {
    #[error(transparent)]
    HttpError { source: reqwest::Error },

    #[error("Invalid authorization token,\n  caused by: {}", source)]
    InvalidTokenError {
        source: http::header::InvalidHeaderValue,
    },

    #[error(
        "Could not list reviews for pull request #{} on repository {}",
        pr_number,
        repository_path
    )]
    ReviewsListError {
        pr_number: u64,
        repository_path: String,
        source: reqwest::Error,
    },
}

impl From<reqwest::Error> for GitHubError {
    fn from(e: reqwest::Error) -> Self {
        GitHubError::HttpError { source: e }
    }
}

impl From<GitHubError> for ApiError {
    fn from(e: GitHubError) -> Self {
        match e {
            GitHubError::ReviewsListError {
                pr_number,
                repository_path,
                source,
            } => ApiError::ReviewsListError {
                pr_number,
                repository_path,
                source: source.into(),
            },
            e => ApiError::ImplementationError { source: e.into() },
        }
    }
}
