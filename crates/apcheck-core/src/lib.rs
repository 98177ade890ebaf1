//! Logic module.

#![warn(clippy::all)]
#![allow(clippy::new_without_default)]

mod context;
pub mod errors;
pub mod use_cases;

pub use context::CoreContext;
pub use errors::{ContextError, DomainError, PayloadError, Result};
use shaku::module;
use use_cases::{
    events::load_review_event::LoadReviewEvent,
    reviews::{
        count_pull_request_approvals::CountPullRequestApprovals,
        handle_review_event::HandleReviewEvent,
    },
};

module! {
    pub CoreModule {
        components = [
            LoadReviewEvent, CountPullRequestApprovals, HandleReviewEvent
        ],
        providers = []
    }
}
