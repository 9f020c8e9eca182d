//! Append-only commit history for yo.
//!
//! The history log is human-readable text: one block per commit, appended in
//! commit order and never rewritten. Readers get the whole log back as an
//! opaque string.
//!
//! - [`LogRecord`] -- one commit's block (`Commit:`, `Message:`, `Time:`)
//! - [`HistoryLog`] -- append/read boundary
//! - [`FsHistoryLog`] -- the `logs/commits` file
//! - [`InMemoryHistoryLog`] -- for tests and embedding

pub mod error;
pub mod fs;
pub mod memory;
pub mod record;
pub mod traits;

pub use error::{HistoryError, HistoryResult};
pub use fs::FsHistoryLog;
pub use memory::InMemoryHistoryLog;
pub use record::LogRecord;
pub use traits::HistoryLog;
