use serde::{Deserialize, Serialize};

/// GitHub Pull request short format, as embedded in event payloads.
#[derive(Debug, Deserialize, Serialize, Default, PartialEq, Eq, Clone)]
pub struct GhPullRequestShort {
    /// Number.
    pub number: u64,
}
