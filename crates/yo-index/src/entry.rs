//! Staging entry type: one line of the staging record.

use std::fmt;

use serde::{Deserialize, Serialize};
use yo_types::ObjectId;

/// A file staged for the next commit.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StagingEntry {
    /// Content-addressed ID of the file's bytes in the object store.
    pub object_id: ObjectId,
    /// The path exactly as it was given to `add`.
    pub path: String,
}

impl StagingEntry {
    /// Create a new staging entry.
    pub fn new(object_id: ObjectId, path: impl Into<String>) -> Self {
        Self {
            object_id,
            path: path.into(),
        }
    }

    /// The record line for this entry, including the trailing newline.
    pub fn to_line(&self) -> String {
        format!("{} {}\n", self.object_id, self.path)
    }

    /// Parse one record line (without its newline).
    ///
    /// The digest ends at the first space; everything after it is the path,
    /// spaces included.
    pub fn parse_line(line: &str) -> Option<Self> {
        let (digest, path) = line.split_once(' ')?;
        let object_id = ObjectId::from_hex(digest).ok()?;
        Some(Self::new(object_id, path))
    }
}

impl fmt::Display for StagingEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.object_id, self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yo_crypto::ContentHasher;

    #[test]
    fn line_format() {
        let entry = StagingEntry::new(ContentHasher::hash(b"hello"), "a.txt");
        assert_eq!(
            entry.to_line(),
            "aaf4c61ddcc5e8a2dabede0f3b482cd9aea9434d a.txt\n"
        );
    }

    #[test]
    fn parse_keeps_spaces_in_path() {
        let id = ContentHasher::hash(b"x");
        let entry = StagingEntry::parse_line(&format!("{id} my notes/todo list.txt")).unwrap();
        assert_eq!(entry.object_id, id);
        assert_eq!(entry.path, "my notes/todo list.txt");
    }

    #[test]
    fn parse_rejects_bad_digest() {
        assert!(StagingEntry::parse_line("nothex a.txt").is_none());
        assert!(StagingEntry::parse_line("aaf4c61d a.txt").is_none());
        assert!(StagingEntry::parse_line("no-space-at-all").is_none());
    }

    #[test]
    fn display_omits_newline() {
        let entry = StagingEntry::new(ContentHasher::hash(b"hello"), "a.txt");
        assert_eq!(entry.to_string() + "\n", entry.to_line());
    }

    #[test]
    fn serde_uses_hex_digest() {
        let entry = StagingEntry::new(ContentHasher::hash(b"hello"), "a.txt");
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(
            json["object_id"],
            "aaf4c61ddcc5e8a2dabede0f3b482cd9aea9434d"
        );
        assert_eq!(json["path"], "a.txt");
    }
}
