use std::fmt;

use yo_types::{ObjectId, Timestamp};

/// One commit's entry in the history log.
///
/// Rendered as:
///
/// ```text
/// Commit: <40-hex digest>
/// Message: <message>
/// Time: <RFC 1123 timestamp>
///
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogRecord {
    pub digest: ObjectId,
    pub message: String,
    pub time: Timestamp,
}

impl LogRecord {
    pub fn new(digest: ObjectId, message: impl Into<String>, time: Timestamp) -> Self {
        Self {
            digest,
            message: message.into(),
            time,
        }
    }

    /// The exact text appended to the log, trailing blank line included.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for LogRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Commit: {}\nMessage: {}\nTime: {}\n\n",
            self.digest,
            self.message,
            self.time.to_rfc1123()
        )
    }
}
