use async_trait::async_trait;

use crate::{review::GhReviewPage, Result};

/// GitHub API Adapter interface
#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait ApiService: Send + Sync {
    /// List one page of reviews from a pull request.
    ///
    /// Pages start at 1.
    async fn pull_reviews_list_page(
        &self,
        owner: &str,
        name: &str,
        issue_number: u64,
        page: u32,
    ) -> Result<GhReviewPage>;
}
