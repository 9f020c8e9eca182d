use crate::error::HistoryResult;
use crate::record::LogRecord;

/// Append/read boundary for the commit history.
///
/// Records are only ever appended. `read_all` returns every record ever
/// appended, oldest first, as the concatenation of their rendered text.
pub trait HistoryLog: Send + Sync {
    /// Append one record to the end of the log.
    fn append(&self, record: &LogRecord) -> HistoryResult<()>;

    /// The full log text.
    ///
    /// Returns [`HistoryError::Unavailable`](crate::HistoryError::Unavailable)
    /// if nothing has ever been appended.
    fn read_all(&self) -> HistoryResult<String>;
}
