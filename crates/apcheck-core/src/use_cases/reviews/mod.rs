pub(crate) mod count_pull_request_approvals;
pub(crate) mod handle_review_event;
mod trigger_filter;

pub use count_pull_request_approvals::{CountPullRequestApprovalsInterface, IS_APPROVED_OUTPUT};
pub use handle_review_event::{HandleReviewEventInterface, ReviewOutcome};
pub use trigger_filter::is_trigger_event;

#[cfg(any(test, feature = "testkit"))]
pub use self::{
    count_pull_request_approvals::MockCountPullRequestApprovalsInterface,
    handle_review_event::MockHandleReviewEventInterface,
};
