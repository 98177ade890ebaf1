pub mod validate_execution_context;

pub use validate_execution_context::{validate_execution_context, ExecutionContext};
