//! GitHub adapter

use apcheck_config::Config;
use apcheck_ghapi_interface::{
    review::{GhReviewApi, GhReviewPage},
    ApiService, Result,
};
use async_trait::async_trait;
use http::{header, HeaderMap};
use reqwest::Client;

use crate::{
    auth::{build_github_url, get_authenticated_client_builder},
    errors::GitHubError,
};

/// GitHub API adapter implementation.
#[derive(Clone)]
pub struct GithubApiService {
    config: Config,
    token: String,
}

impl GithubApiService {
    /// Creates new GitHub API adapter.
    pub fn new(config: Config, token: String) -> Self {
        Self { config, token }
    }

    fn get_client(&self) -> Result<Client, GitHubError> {
        get_authenticated_client_builder(&self.config, &self.token)?
            .build()
            .map_err(GitHubError::from)
    }

    fn build_url(&self, path: String) -> String {
        build_github_url(&self.config, path)
    }
}

#[async_trait]
impl ApiService for GithubApiService {
    #[tracing::instrument(skip(self), fields(reviews_count, next_page))]
    async fn pull_reviews_list_page(
        &self,
        owner: &str,
        name: &str,
        issue_number: u64,
        page: u32,
    ) -> Result<GhReviewPage> {
        let response = self
            .get_client()?
            .get(&self.build_url(format!(
                "/repos/{owner}/{name}/pulls/{issue_number}/reviews"
            )))
            .query(&[("per_page", self.config.api.github.page_size), ("page", page)])
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| GitHubError::ReviewsListError {
                pr_number: issue_number,
                repository_path: format!("{owner}/{name}"),
                source: e,
            })?;

        let next_page = has_next_page(response.headers()).then_some(page + 1);
        let reviews = response
            .json::<Vec<GhReviewApi>>()
            .await
            .map_err(GitHubError::from)?;

        let span = tracing::Span::current();
        span.record("reviews_count", reviews.len());
        span.record("next_page", next_page);

        Ok(GhReviewPage { reviews, next_page })
    }
}

/// Check for a `rel="next"` entry in the `Link` header.
fn has_next_page(headers: &HeaderMap) -> bool {
    headers
        .get_all(header::LINK)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(','))
        .any(|link| {
            link.split(';')
                .skip(1)
                .any(|param| param.trim() == r#"rel="next""#)
        })
}
