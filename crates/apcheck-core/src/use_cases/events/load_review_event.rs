use std::path::Path;

use apcheck_ghapi_interface::types::GhReviewEventPayload;
use async_trait::async_trait;
use shaku::{Component, Interface};

use crate::{PayloadError, Result};

/// Review event, classified from its payload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReviewEvent {
    /// Action, if any.
    pub action: Option<String>,
    /// Review state, as written in the payload.
    pub review_state: String,
    /// Pull request number, absent when the event is not about a PR.
    pub pull_request_number: Option<u64>,
}

impl TryFrom<GhReviewEventPayload> for ReviewEvent {
    type Error = PayloadError;

    fn try_from(payload: GhReviewEventPayload) -> Result<Self, Self::Error> {
        let review = payload
            .review
            .ok_or(PayloadError::MissingField { field: "review" })?;
        let review_state = review.state.ok_or(PayloadError::MissingField {
            field: "review.state",
        })?;

        Ok(Self {
            action: payload.action,
            review_state,
            pull_request_number: payload.pull_request.map(|pr| pr.number),
        })
    }
}

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait LoadReviewEventInterface: Interface {
    async fn run(&self, event_path: &Path) -> Result<ReviewEvent>;
}

#[derive(Component)]
#[shaku(interface = LoadReviewEventInterface)]
pub(crate) struct LoadReviewEvent;

#[async_trait]
impl LoadReviewEventInterface for LoadReviewEvent {
    #[tracing::instrument(skip(self), ret)]
    async fn run(&self, event_path: &Path) -> Result<ReviewEvent> {
        let raw = tokio::fs::read_to_string(event_path)
            .await
            .map_err(|e| PayloadError::ReadError {
                path: event_path.to_path_buf(),
                source: e,
            })?;

        let payload: GhReviewEventPayload =
            serde_json::from_str(&raw).map_err(|e| PayloadError::ParseError { source: e })?;

        Ok(ReviewEvent::try_from(payload)?)
    }
}
