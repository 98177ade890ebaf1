pub mod context;
pub mod events;
pub mod reviews;
