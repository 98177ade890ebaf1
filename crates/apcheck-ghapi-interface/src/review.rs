use std::fmt::Display;

use serde::{Deserialize, Serialize};
use smart_default::SmartDefault;
use time::OffsetDateTime;

use crate::types::GhUser;

/// Review state (API version)
#[derive(Deserialize, Serialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GhReviewStateApi {
    /// Approved.
    Approved,
    /// Changes requested.
    ChangesRequested,
    /// Commented.
    Commented,
    /// Dismissed.
    Dismissed,
    /// Pending.
    Pending,
    /// Any state this tool does not know about.
    #[serde(other)]
    Unknown,
}

impl Display for GhReviewStateApi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&serde_plain::to_string(&self).map_err(|_| std::fmt::Error)?)
    }
}

/// Review (API version)
#[derive(Deserialize, Clone, Debug, SmartDefault, PartialEq, Eq)]
pub struct GhReviewApi {
    /// Review ID.
    pub id: u64,
    /// User, missing for deleted accounts.
    pub user: Option<GhUser>,
    /// Submitted at, missing for pending reviews.
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub submitted_at: Option<OffsetDateTime>,
    /// State.
    #[default(GhReviewStateApi::Pending)]
    pub state: GhReviewStateApi,
}

impl GhReviewApi {
    /// Reviewer login, if any.
    pub fn reviewer_login(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.login.as_str())
    }
}

/// One page of reviews.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GhReviewPage {
    /// Reviews, in API order.
    pub reviews: Vec<GhReviewApi>,
    /// Next page number, if there is one.
    pub next_page: Option<u32>,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn deserialize_reviews() {
        let reviews: Vec<GhReviewApi> = serde_json::from_str(
            r#"[
                {
                    "id": 80,
                    "user": { "login": "octocat", "id": 1 },
                    "body": "Here is the body for the review.",
                    "state": "APPROVED",
                    "submitted_at": "2019-11-17T17:43:43Z"
                },
                {
                    "id": 81,
                    "user": null,
                    "state": "PENDING"
                },
                {
                    "id": 82,
                    "user": { "login": "hubot" },
                    "state": "SOMETHING_NEW",
                    "submitted_at": "2019-11-18T10:00:00Z"
                }
            ]"#,
        )
        .unwrap();

        assert_eq!(reviews.len(), 3);
        assert_eq!(reviews[0].state, GhReviewStateApi::Approved);
        assert_eq!(reviews[0].reviewer_login(), Some("octocat"));
        assert!(reviews[0].submitted_at.is_some());
        assert_eq!(reviews[1].reviewer_login(), None);
        assert_eq!(reviews[1].submitted_at, None);
        assert_eq!(reviews[2].state, GhReviewStateApi::Unknown);
    }

    #[test]
    fn display_state() {
        assert_eq!(GhReviewStateApi::Approved.to_string(), "APPROVED");
        assert_eq!(
            GhReviewStateApi::ChangesRequested.to_string(),
            "CHANGES_REQUESTED"
        );
    }
}
