//! Reviews API module.

use futures::{stream, Stream, TryStreamExt};

use crate::{review::GhReviewApi, ApiError, ApiService, Result};

/// Review API.
pub struct ReviewApi;

impl ReviewApi {
    /// Stream every review of a pull request, in API order.
    ///
    /// Pages are fetched lazily, one at a time, when the previous page is
    /// exhausted. The stream is single-pass and stops at the first error.
    pub fn stream_reviews_for_pull_request<'a>(
        adapter: &'a dyn ApiService,
        repository_owner: &'a str,
        repository_name: &'a str,
        pr_number: u64,
    ) -> impl Stream<Item = Result<GhReviewApi>> + Send + 'a {
        stream::try_unfold(Some(1u32), move |page| async move {
            let Some(page) = page else {
                return Ok(None);
            };

            let page = adapter
                .pull_reviews_list_page(repository_owner, repository_name, pr_number, page)
                .await?;
            let reviews = stream::iter(page.reviews.into_iter().map(Ok::<_, ApiError>));

            Ok(Some((reviews, page.next_page)))
        })
        .try_flatten()
    }
}

#[cfg(test)]
mod tests {
    use futures::StreamExt;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{review::GhReviewPage, types::GhUser, MockApiService};

    fn new_review(id: u64, username: &str) -> GhReviewApi {
        GhReviewApi {
            id,
            user: Some(GhUser {
                login: username.into(),
            }),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn flatten_pages_in_order() {
        let mut adapter = MockApiService::new();
        adapter
            .expect_pull_reviews_list_page()
            .once()
            .withf(|owner, name, number, page| {
                owner == "me" && name == "test" && number == &1 && page == &1
            })
            .return_once(|_, _, _, _| {
                Ok(GhReviewPage {
                    reviews: vec![new_review(1, "alice"), new_review(2, "bob")],
                    next_page: Some(2),
                })
            });
        adapter
            .expect_pull_reviews_list_page()
            .once()
            .withf(|_, _, _, page| page == &2)
            .return_once(|_, _, _, _| {
                Ok(GhReviewPage {
                    reviews: vec![new_review(3, "carol")],
                    next_page: None,
                })
            });

        let ids: Vec<u64> = ReviewApi::stream_reviews_for_pull_request(&adapter, "me", "test", 1)
            .map_ok(|r| r.id)
            .try_collect()
            .await
            .unwrap();

        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn fetch_pages_lazily() {
        let mut adapter = MockApiService::new();
        adapter
            .expect_pull_reviews_list_page()
            .once()
            .withf(|_, _, _, page| page == &1)
            .return_once(|_, _, _, _| {
                Ok(GhReviewPage {
                    reviews: vec![new_review(1, "alice")],
                    next_page: Some(2),
                })
            });

        // Page 2 has no expectation: fetching it would panic.
        let first: Vec<_> = ReviewApi::stream_reviews_for_pull_request(&adapter, "me", "test", 1)
            .take(1)
            .collect()
            .await;

        assert_eq!(first.len(), 1);
        assert_eq!(first[0].as_ref().unwrap().id, 1);
    }

    #[tokio::test]
    async fn stop_on_error() {
        let mut adapter = MockApiService::new();
        adapter
            .expect_pull_reviews_list_page()
            .once()
            .withf(|_, _, _, page| page == &1)
            .return_once(|_, _, _, _| {
                Ok(GhReviewPage {
                    reviews: vec![new_review(1, "alice")],
                    next_page: Some(2),
                })
            });
        adapter
            .expect_pull_reviews_list_page()
            .once()
            .withf(|_, _, _, page| page == &2)
            .return_once(|_, _, _, _| {
                Err(ApiError::ImplementationError {
                    source: "boom".into(),
                })
            });

        let results: Vec<_> = ReviewApi::stream_reviews_for_pull_request(&adapter, "me", "test", 1)
            .collect()
            .await;

        assert_eq!(results.len(), 2);
        assert!(results[0].is_ok());
        assert!(results[1].is_err());
    }

    #[tokio::test]
    async fn empty_pull_request() {
        let mut adapter = MockApiService::new();
        adapter
            .expect_pull_reviews_list_page()
            .once()
            .return_once(|_, _, _, _| Ok(GhReviewPage::default()));

        let count = ReviewApi::stream_reviews_for_pull_request(&adapter, "me", "test", 1)
            .count()
            .await;

        assert_eq!(count, 0);
    }
}
