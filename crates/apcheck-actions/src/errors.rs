//! Runner errors.

use std::path::PathBuf;

use thiserror::Error;

/// Runner error.
#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum ActionsError {
    #[error("Could not write to runner file {}: {}", path.display(), source)]
    FileCommandError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Could not write workflow command: {}", source)]
    WriterError { source: std::io::Error },

    #[error("Workflow command writer is poisoned")]
    PoisonedWriter,

    #[error("Unexpected input: name or value contains the delimiter {}", delimiter)]
    DelimiterCollision { delimiter: String },
}

/// Result alias for `ActionsError`.
pub type Result<T, E = ActionsError> = core::result::Result<T, E>;
