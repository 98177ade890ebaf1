pub(crate) mod load_review_event;

pub use load_review_event::{LoadReviewEventInterface, ReviewEvent};

#[cfg(any(test, feature = "testkit"))]
pub use self::load_review_event::MockLoadReviewEventInterface;
