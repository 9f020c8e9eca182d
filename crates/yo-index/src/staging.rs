//! The on-disk staging record.
//!
//! [`StagingArea`] owns a single file of `"<digest> <path>\n"` lines. Adding
//! a file stores its bytes in the object store and appends one line; the
//! record is never rewritten in place. Commit reads it whole and then
//! deletes it.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::debug;
use yo_store::ObjectStore;

use crate::entry::StagingEntry;
use crate::error::{IndexError, IndexResult};

/// The staging area: files added since the last commit.
pub struct StagingArea {
    /// Path of the staging record file.
    path: PathBuf,
    /// The object store receiving staged content.
    store: Arc<dyn ObjectStore>,
}

impl std::fmt::Debug for StagingArea {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StagingArea")
            .field("path", &self.path)
            .finish()
    }
}

impl StagingArea {
    /// Create a staging area whose record lives at `path`.
    ///
    /// Nothing is touched on disk until the first `stage_*` call.
    pub fn new(path: impl Into<PathBuf>, store: Arc<dyn ObjectStore>) -> Self {
        Self {
            path: path.into(),
            store,
        }
    }

    /// Path of the staging record file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    // ---------------------------------------------------------------
    // Stage operations
    // ---------------------------------------------------------------

    /// Stage the file at `source`, recording it as `recorded_path`.
    ///
    /// `source` is where the bytes are read from; `recorded_path` is what is
    /// written into the staging line (usually the path the user typed). The
    /// recorded path must be non-empty UTF-8 so the line names the file
    /// exactly; it is checked before the source is read.
    pub fn stage_file(&self, source: &Path, recorded_path: &Path) -> IndexResult<StagingEntry> {
        let recorded = recorded_path.to_str().ok_or_else(|| {
            IndexError::InvalidPath(format!("not valid UTF-8: {}", recorded_path.display()))
        })?;
        if recorded.is_empty() {
            return Err(IndexError::InvalidPath("empty path".to_string()));
        }

        let content = fs::read(source).map_err(|e| IndexError::UnreadableSource {
            path: source.to_path_buf(),
            source: e,
        })?;
        self.stage_content(recorded, &content)
    }

    /// Stage already-loaded content under `path`.
    ///
    /// Stores the bytes, then appends the entry. No deduplication: staging
    /// the same path twice yields two lines.
    pub fn stage_content(&self, path: &str, content: &[u8]) -> IndexResult<StagingEntry> {
        if path.is_empty() {
            return Err(IndexError::InvalidPath("empty path".to_string()));
        }

        let object_id = self.store.put(content)?;
        let entry = StagingEntry::new(object_id, path);
        self.append(&entry)?;

        debug!(id = %object_id.short_hex(), path, "staged");
        Ok(entry)
    }

    fn append(&self, entry: &StagingEntry) -> IndexResult<()> {
        let append_err = |source| IndexError::Append {
            path: self.path.clone(),
            source,
        };

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(append_err)?;
        file.write_all(entry.to_line().as_bytes())
            .map_err(append_err)?;
        Ok(())
    }

    // ---------------------------------------------------------------
    // Read / clear
    // ---------------------------------------------------------------

    /// The raw staging record.
    ///
    /// Returns `Ok(None)` when nothing is staged: the record is absent or
    /// has zero length.
    pub fn read(&self) -> IndexResult<Option<Vec<u8>>> {
        match fs::read(&self.path) {
            Ok(bytes) if bytes.is_empty() => Ok(None),
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(IndexError::Read {
                path: self.path.clone(),
                source,
            }),
        }
    }

    /// Parse the staging record into entries, in insertion order.
    pub fn entries(&self) -> IndexResult<Vec<StagingEntry>> {
        let Some(bytes) = self.read()? else {
            return Ok(Vec::new());
        };
        parse_record(&bytes)
    }

    /// Returns `true` if nothing is staged.
    pub fn is_empty(&self) -> IndexResult<bool> {
        Ok(self.read()?.is_none())
    }

    /// Delete the staging record.
    ///
    /// The file is removed, not truncated. Removing an absent record is an
    /// error.
    pub fn clear(&self) -> IndexResult<()> {
        fs::remove_file(&self.path).map_err(|source| IndexError::Clear {
            path: self.path.clone(),
            source,
        })?;
        debug!(path = %self.path.display(), "staging cleared");
        Ok(())
    }
}

/// Parse staging record bytes into entries.
pub fn parse_record(bytes: &[u8]) -> IndexResult<Vec<StagingEntry>> {
    String::from_utf8_lossy(bytes)
        .lines()
        .enumerate()
        .map(|(i, line)| {
            StagingEntry::parse_line(line).ok_or_else(|| IndexError::MalformedEntry {
                line: i + 1,
                content: line.to_string(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use yo_crypto::ContentHasher;
    use yo_store::{FsObjectStore, InMemoryObjectStore};

    fn make_staging(dir: &Path) -> (Arc<InMemoryObjectStore>, StagingArea) {
        let store = Arc::new(InMemoryObjectStore::new());
        let staging = StagingArea::new(dir.join("staging"), store.clone());
        (store, staging)
    }

    #[test]
    fn new_staging_is_empty_and_lazy() {
        let dir = tempfile::tempdir().unwrap();
        let (_store, staging) = make_staging(dir.path());
        assert!(staging.is_empty().unwrap());
        assert!(staging.read().unwrap().is_none());
        assert!(staging.entries().unwrap().is_empty());
        assert!(!staging.path().exists());
    }

    #[test]
    fn stage_content_stores_object_and_appends_line() {
        let dir = tempfile::tempdir().unwrap();
        let (store, staging) = make_staging(dir.path());

        let entry = staging.stage_content("a.txt", b"hello").unwrap();

        assert_eq!(entry.object_id, ContentHasher::hash(b"hello"));
        assert_eq!(store.get(&entry.object_id).unwrap().unwrap(), b"hello");
        assert_eq!(
            fs::read_to_string(staging.path()).unwrap(),
            "aaf4c61ddcc5e8a2dabede0f3b482cd9aea9434d a.txt\n"
        );
    }

    #[test]
    fn lines_keep_insertion_order() {
        let dir = tempfile::tempdir().unwrap();
        let (_store, staging) = make_staging(dir.path());

        staging.stage_content("f1", b"one").unwrap();
        staging.stage_content("f2", b"two").unwrap();
        staging.stage_content("f3", b"three").unwrap();

        let expected = format!(
            "{} f1\n{} f2\n{} f3\n",
            ContentHasher::hash(b"one"),
            ContentHasher::hash(b"two"),
            ContentHasher::hash(b"three"),
        );
        assert_eq!(fs::read_to_string(staging.path()).unwrap(), expected);

        let paths: Vec<String> = staging
            .entries()
            .unwrap()
            .into_iter()
            .map(|e| e.path)
            .collect();
        assert_eq!(paths, vec!["f1", "f2", "f3"]);
    }

    #[test]
    fn repeated_path_is_not_deduplicated() {
        let dir = tempfile::tempdir().unwrap();
        let (store, staging) = make_staging(dir.path());

        staging.stage_content("a.txt", b"v1").unwrap();
        staging.stage_content("a.txt", b"v2").unwrap();
        staging.stage_content("a.txt", b"v2").unwrap();

        let entries = staging.entries().unwrap();
        assert_eq!(entries.len(), 3);
        assert!(entries.iter().all(|e| e.path == "a.txt"));
        assert_eq!(entries[1], entries[2]);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn stage_file_reads_source_and_records_given_path() {
        let dir = tempfile::tempdir().unwrap();
        let (_store, staging) = make_staging(dir.path());
        let source = dir.path().join("notes.md");
        fs::write(&source, b"# notes").unwrap();

        let entry = staging.stage_file(&source, Path::new("notes.md")).unwrap();
        assert_eq!(entry.path, "notes.md");
        assert_eq!(entry.object_id, ContentHasher::hash(b"# notes"));
    }

    #[test]
    fn stage_missing_file_is_unreadable_source() {
        let dir = tempfile::tempdir().unwrap();
        let (store, staging) = make_staging(dir.path());

        let err = staging
            .stage_file(&dir.path().join("ghost.txt"), Path::new("ghost.txt"))
            .unwrap_err();

        assert!(matches!(err, IndexError::UnreadableSource { .. }));
        assert!(store.is_empty());
        assert!(!staging.path().exists());
    }

    #[test]
    fn stage_rejects_empty_path() {
        let dir = tempfile::tempdir().unwrap();
        let (_store, staging) = make_staging(dir.path());
        let result = staging.stage_content("", b"data");
        assert!(matches!(result, Err(IndexError::InvalidPath(_))));
    }

    #[test]
    fn stage_file_rejects_empty_recorded_path() {
        let dir = tempfile::tempdir().unwrap();
        let (store, staging) = make_staging(dir.path());
        let result = staging.stage_file(dir.path(), Path::new(""));
        assert!(matches!(result, Err(IndexError::InvalidPath(_))));
        assert!(store.is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_path_is_rejected_not_rewritten() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let dir = tempfile::tempdir().unwrap();
        let (store, staging) = make_staging(dir.path());
        let name = Path::new(OsStr::from_bytes(b"caf\xe9.txt"));
        let source = dir.path().join(name);
        fs::write(&source, b"hello").unwrap();

        let err = staging.stage_file(&source, name).unwrap_err();

        assert!(matches!(err, IndexError::InvalidPath(_)));
        assert!(store.is_empty());
        assert!(!staging.path().exists());
    }

    #[test]
    fn store_failure_leaves_record_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let store = Arc::new(FsObjectStore::new(dir.path().join("no-objects-dir")));
        let staging = StagingArea::new(dir.path().join("staging"), store);

        let err = staging.stage_content("a.txt", b"hello").unwrap_err();
        assert!(matches!(err, IndexError::Store(_)));
        assert!(!staging.path().exists());
    }

    #[test]
    fn clear_removes_record() {
        let dir = tempfile::tempdir().unwrap();
        let (_store, staging) = make_staging(dir.path());
        staging.stage_content("a.txt", b"hello").unwrap();

        staging.clear().unwrap();
        assert!(!staging.path().exists());
        assert!(staging.is_empty().unwrap());
    }

    #[test]
    fn clear_without_record_errors() {
        let dir = tempfile::tempdir().unwrap();
        let (_store, staging) = make_staging(dir.path());
        assert!(matches!(staging.clear(), Err(IndexError::Clear { .. })));
    }

    #[test]
    fn zero_length_record_counts_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let (_store, staging) = make_staging(dir.path());
        fs::write(staging.path(), b"").unwrap();
        assert!(staging.read().unwrap().is_none());
    }

    #[test]
    fn malformed_line_reports_line_number() {
        let dir = tempfile::tempdir().unwrap();
        let (_store, staging) = make_staging(dir.path());
        staging.stage_content("ok.txt", b"fine").unwrap();
        let mut file = OpenOptions::new().append(true).open(staging.path()).unwrap();
        file.write_all(b"garbage\n").unwrap();

        match staging.entries() {
            Err(IndexError::MalformedEntry { line, content }) => {
                assert_eq!(line, 2);
                assert_eq!(content, "garbage");
            }
            other => panic!("expected malformed entry, got {other:?}"),
        }
    }
}
