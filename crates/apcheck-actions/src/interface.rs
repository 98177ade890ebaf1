use crate::Result;

/// Pipeline-facing reporting interface.
#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
pub trait ActionsService: Send + Sync {
    /// Set a step output.
    fn set_output(&self, name: &str, value: &str) -> Result<()>;
    /// Export a variable for the following steps.
    fn export_variable(&self, name: &str, value: &str) -> Result<()>;
    /// Show an informational message.
    fn info(&self, message: &str) -> Result<()>;
    /// Mark the run as failed.
    fn set_failed(&self, message: &str) -> Result<()>;
}
