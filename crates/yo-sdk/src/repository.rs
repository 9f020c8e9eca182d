use std::fmt;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use tracing::{debug, info};
use yo_history::{FsHistoryLog, HistoryError, HistoryLog};
use yo_index::{IndexError, StagingArea, StagingEntry};
use yo_store::{FsObjectStore, ObjectStore};
use yo_types::{Clock, ObjectId, SystemClock};

use crate::commit::{CommitEngine, CommitResult};
use crate::config::RepoConfig;
use crate::error::{SdkError, SdkResult};

/// A yo repository rooted at a working directory.
///
/// Opening a handle touches nothing on disk; each operation reads or writes
/// the files it needs under [`RepoConfig::repo_dir`].
pub struct Repository {
    config: RepoConfig,
    store: Arc<dyn ObjectStore>,
    staging: StagingArea,
    history: Arc<dyn HistoryLog>,
    clock: Arc<dyn Clock>,
}

impl Repository {
    /// Create the metadata directory layout and return a handle to it.
    ///
    /// Fails with [`SdkError::AlreadyInitialized`] if the metadata directory
    /// already exists, leaving it untouched.
    pub fn init(config: RepoConfig) -> SdkResult<Self> {
        let repo_dir = config.repo_dir();
        if repo_dir.exists() {
            return Err(SdkError::AlreadyInitialized(repo_dir));
        }

        for dir in [config.objects_dir(), config.logs_dir()] {
            fs::create_dir_all(&dir)
                .map_err(|e| SdkError::io(format!("create {}", dir.display()), e))?;
        }

        info!(path = %repo_dir.display(), "repository initialized");
        Ok(Self::open(config))
    }

    /// A handle over an existing (or not yet initialized) repository.
    pub fn open(config: RepoConfig) -> Self {
        let store: Arc<dyn ObjectStore> = Arc::new(FsObjectStore::new(config.objects_dir()));
        let staging = StagingArea::new(config.staging_path(), store.clone());
        let history = Arc::new(FsHistoryLog::new(config.commit_log_path()));
        Self {
            config,
            store,
            staging,
            history,
            clock: Arc::new(SystemClock),
        }
    }

    /// Replace the clock used to timestamp commits.
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn config(&self) -> &RepoConfig {
        &self.config
    }

    pub fn is_initialized(&self) -> bool {
        self.config.repo_dir().is_dir()
    }

    // ---- Staging ----

    /// Stage the file at `path`.
    ///
    /// Relative paths are read relative to the working directory. The
    /// staging line records `path` exactly as given, so paths that are empty
    /// or not valid UTF-8 are rejected with [`SdkError::InvalidPath`].
    /// Staging the same path again appends another line.
    pub fn stage(&self, path: impl AsRef<Path>) -> SdkResult<StagingEntry> {
        let path = path.as_ref();
        let source = self.config.resolve(path);

        self.staging.stage_file(&source, path).map_err(|e| match e {
            IndexError::UnreadableSource { path, source } => {
                SdkError::UnreadableSource { path, source }
            }
            IndexError::InvalidPath(reason) => SdkError::InvalidPath(reason),
            other => SdkError::io(format!("stage {}", path.display()), other),
        })
    }

    /// Entries staged since the last commit, oldest first.
    pub fn staged(&self) -> SdkResult<Vec<StagingEntry>> {
        self.staging.entries().map_err(SdkError::StagingUnreadable)
    }

    // ---- Commits ----

    /// Commit everything staged. See [`crate::commit`] for the step sequence.
    pub fn commit(&self, message: &str) -> SdkResult<CommitResult> {
        let result = CommitEngine::new(
            self.store.as_ref(),
            &self.staging,
            self.history.as_ref(),
            self.clock.as_ref(),
        )
        .run(message)?;
        info!(digest = %result.digest, entries = result.entries, "committed");
        Ok(result)
    }

    /// The full history log text, oldest commit first.
    pub fn history(&self) -> SdkResult<String> {
        self.history.read_all().map_err(|e| match e {
            HistoryError::Unavailable => SdkError::LogUnavailable,
            other => SdkError::io("read history log", other),
        })
    }

    /// Raw bytes of a stored object, if present.
    pub fn read_object(&self, id: &ObjectId) -> SdkResult<Option<Vec<u8>>> {
        debug!(id = %id.short_hex(), "reading object");
        self.store
            .get(id)
            .map_err(|e| SdkError::io(format!("read object {}", id.short_hex()), e))
    }
}

impl fmt::Debug for Repository {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Repository")
            .field("config", &self.config)
            .finish()
    }
}
