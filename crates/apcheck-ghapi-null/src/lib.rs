//! Null driver for GH API.

#![warn(missing_docs)]
#![warn(clippy::all)]

use apcheck_ghapi_interface::{review::GhReviewPage, ApiService, Result};
use async_trait::async_trait;

/// Null API service.
#[derive(Clone, Default)]
pub struct NullApiService {
    _private: (),
}

impl NullApiService {
    /// Build a null API service.
    pub fn new() -> Self {
        Self { _private: () }
    }
}

#[async_trait]
impl ApiService for NullApiService {
    #[tracing::instrument(skip_all, ret)]
    async fn pull_reviews_list_page(
        &self,
        _owner: &str,
        _name: &str,
        _issue_number: u64,
        _page: u32,
    ) -> Result<GhReviewPage> {
        Ok(GhReviewPage::default())
    }
}
