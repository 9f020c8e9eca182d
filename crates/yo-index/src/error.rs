//! Error types for the index crate.

use std::io;
use std::path::PathBuf;

/// Errors that can occur during staging operations.
#[derive(Debug, thiserror::Error)]
pub enum IndexError {
    /// The file to stage does not exist or cannot be read.
    #[error("cannot read {}: {source}", .path.display())]
    UnreadableSource {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// An empty path was provided.
    #[error("invalid path: {0}")]
    InvalidPath(String),

    /// Store operation failed.
    #[error("store error: {0}")]
    Store(#[from] yo_store::StoreError),

    /// Appending a line to the staging record failed.
    #[error("failed to append to staging record {}: {source}", .path.display())]
    Append {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The staging record exists but could not be read.
    #[error("failed to read staging record {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The staging record could not be removed.
    #[error("failed to remove staging record {}: {source}", .path.display())]
    Clear {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A staging line is not `"<40-hex digest> <path>"`.
    #[error("malformed staging entry on line {line}: {content:?}")]
    MalformedEntry { line: usize, content: String },
}

/// Convenience alias for index results.
pub type IndexResult<T> = Result<T, IndexError>;
