//! Workflow runner crate.
//!
//! Reports outputs, exported variables, messages and failures back to the
//! calling pipeline.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod commands;
mod errors;
mod interface;
mod runner;

pub use errors::{ActionsError, Result};
pub use interface::ActionsService;
#[cfg(any(test, feature = "testkit"))]
pub use interface::MockActionsService;
pub use runner::RunnerActionsService;
