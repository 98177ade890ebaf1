use serde::{Deserialize, Serialize};

use crate::types::{common::GhUser, pulls::GhPullRequestShort};

/// GitHub Review, as found in an event payload.
///
/// Every field is optional: payloads are classified after parsing.
#[derive(Debug, Deserialize, Serialize, Default, PartialEq, Eq, Clone)]
pub struct GhReviewPayload {
    /// State, in lower case (`approved`, `commented`, ...).
    pub state: Option<String>,
    /// User.
    pub user: Option<GhUser>,
}

/// GitHub Review event payload.
#[derive(Debug, Deserialize, Serialize, Default, PartialEq, Eq, Clone)]
pub struct GhReviewEventPayload {
    /// Action (`submitted`, `edited`, `dismissed`).
    pub action: Option<String>,
    /// Review.
    pub review: Option<GhReviewPayload>,
    /// Pull request.
    pub pull_request: Option<GhPullRequestShort>,
}
