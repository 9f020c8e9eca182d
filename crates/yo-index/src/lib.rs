//! Staging area for yo.
//!
//! Tracks the files added since the last commit as an ordered, append-only
//! record: one `"<digest> <path>\n"` line per `add`, in the order the adds
//! happened. Repeated adds of the same path produce repeated lines.
//!
//! # Key Types
//!
//! - [`StagingArea`] -- The on-disk staging record plus the object store it
//!   feeds
//! - [`StagingEntry`] -- One parsed `(digest, path)` line

pub mod entry;
pub mod error;
pub mod staging;

pub use entry::StagingEntry;
pub use error::{IndexError, IndexResult};
pub use staging::{parse_record, StagingArea};
