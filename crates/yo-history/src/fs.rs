use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{HistoryError, HistoryResult};
use crate::record::LogRecord;
use crate::traits::HistoryLog;

/// History log stored as a single append-only text file.
///
/// The parent directory is created by repository bootstrap. Appending into a
/// missing directory fails rather than recreating it.
#[derive(Clone, Debug)]
pub struct FsHistoryLog {
    path: PathBuf,
}

impl FsHistoryLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path to the log file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl HistoryLog for FsHistoryLog {
    fn append(&self, record: &LogRecord) -> HistoryResult<()> {
        let append_err = |source| HistoryError::Append {
            path: self.path.clone(),
            source,
        };

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(append_err)?;
        file.write_all(record.render().as_bytes())
            .map_err(append_err)?;

        debug!(digest = %record.digest.short_hex(), "history record appended");
        Ok(())
    }

    fn read_all(&self) -> HistoryResult<String> {
        match fs::read(&self.path) {
            Ok(bytes) => Ok(String::from_utf8_lossy(&bytes).into_owned()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Err(HistoryError::Unavailable),
            Err(source) => Err(HistoryError::Read {
                path: self.path.clone(),
                source,
            }),
        }
    }
}
