//! Repository API for yo.
//!
//! [`Repository`] ties the object store, staging area and history log
//! together behind the four user-facing operations: `init`, `stage`,
//! `commit` and `history`. Every operation takes its location from an
//! explicit [`RepoConfig`]; nothing reads the process working directory.

pub mod commit;
pub mod config;
pub mod error;
pub mod repository;

pub use commit::{CommitEngine, CommitObject, CommitResult, CommitStep};
pub use config::RepoConfig;
pub use error::{SdkError, SdkResult};
pub use repository::Repository;

// Re-export key types
pub use yo_history::LogRecord;
pub use yo_index::StagingEntry;
pub use yo_types::{Clock, ObjectId, SteppingClock, SystemClock, Timestamp};
