mod review_event;

pub use review_event::{GhReviewEventPayload, GhReviewPayload};
