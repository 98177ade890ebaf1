//! GitHub API interface.
//!
//! Contains the API service contract and the GitHub payload types.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod errors;
mod interface;
pub mod review;
pub mod reviews;
pub mod types;

pub use errors::{ApiError, Result};
pub use interface::ApiService;
#[cfg(any(test, feature = "testkit"))]
pub use interface::MockApiService;
