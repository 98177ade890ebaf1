//! Domain models.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod approval_policy;
mod pull_request_handle;
mod repository_path;

pub use approval_policy::{ApprovalPolicy, DEFAULT_APPROVALS_COUNT};
pub use pull_request_handle::{PullRequestHandle, PullRequestHandleError};
pub use repository_path::{RepositoryPath, RepositoryPathError};
