use std::sync::RwLock;

use crate::error::{HistoryError, HistoryResult};
use crate::record::LogRecord;
use crate::traits::HistoryLog;

/// In-memory history log for tests and embedding.
#[derive(Debug, Default)]
pub struct InMemoryHistoryLog {
    records: RwLock<Vec<LogRecord>>,
}

impl InMemoryHistoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records appended so far.
    pub fn len(&self) -> usize {
        self.records.read().expect("lock poisoned").len()
    }

    /// Returns `true` if nothing has been appended.
    pub fn is_empty(&self) -> bool {
        self.records.read().expect("lock poisoned").is_empty()
    }

    /// Clone of every record, oldest first.
    pub fn records(&self) -> Vec<LogRecord> {
        self.records.read().expect("lock poisoned").clone()
    }
}

impl HistoryLog for InMemoryHistoryLog {
    fn append(&self, record: &LogRecord) -> HistoryResult<()> {
        self.records
            .write()
            .expect("lock poisoned")
            .push(record.clone());
        Ok(())
    }

    fn read_all(&self) -> HistoryResult<String> {
        let records = self.records.read().expect("lock poisoned");
        if records.is_empty() {
            return Err(HistoryError::Unavailable);
        }
        Ok(records.iter().map(LogRecord::render).collect())
    }
}
