use std::io;
use std::path::PathBuf;

use yo_types::ObjectId;

/// Errors from object store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Writing an object to the backend failed.
    #[error("failed to write object {id}: {source}")]
    Write {
        id: ObjectId,
        #[source]
        source: io::Error,
    },

    /// Reading an object from the backend failed for a reason other than
    /// the object being absent.
    #[error("failed to read object {id}: {source}")]
    Read {
        id: ObjectId,
        #[source]
        source: io::Error,
    },

    /// The object directory could not be listed.
    #[error("failed to list objects in {}: {source}", .dir.display())]
    List {
        dir: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
