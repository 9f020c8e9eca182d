use std::io;
use std::path::PathBuf;

/// Errors from history log operations.
#[derive(Debug, thiserror::Error)]
pub enum HistoryError {
    /// No commit has been recorded yet.
    #[error("no commits recorded yet")]
    Unavailable,

    /// Appending a record failed.
    #[error("failed to append to history log {}: {source}", .path.display())]
    Append {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The log exists but could not be read.
    #[error("failed to read history log {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Result alias for history operations.
pub type HistoryResult<T> = Result<T, HistoryError>;
