//! Repository location.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Default name of the metadata directory inside the working directory.
pub const DEFAULT_DIR_NAME: &str = ".yo";

const OBJECTS_DIR: &str = "objects";
const STAGING_FILE: &str = "staging";
const LOGS_DIR: &str = "logs";
const COMMIT_LOG_FILE: &str = "commits";

/// Where a repository lives.
///
/// Every path the repository touches is derived from this value:
///
/// ```text
/// <workdir>/<dir_name>/
///   objects/<40-hex digest>
///   staging
///   logs/commits
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoConfig {
    /// The working directory; relative paths given to `stage` resolve here.
    pub workdir: PathBuf,
    /// Name of the metadata directory under `workdir`.
    pub dir_name: String,
}

impl RepoConfig {
    pub fn new(workdir: impl Into<PathBuf>) -> Self {
        Self {
            workdir: workdir.into(),
            dir_name: DEFAULT_DIR_NAME.to_string(),
        }
    }

    pub fn with_dir_name(mut self, dir_name: impl Into<String>) -> Self {
        self.dir_name = dir_name.into();
        self
    }

    pub fn repo_dir(&self) -> PathBuf {
        self.workdir.join(&self.dir_name)
    }

    pub fn objects_dir(&self) -> PathBuf {
        self.repo_dir().join(OBJECTS_DIR)
    }

    pub fn staging_path(&self) -> PathBuf {
        self.repo_dir().join(STAGING_FILE)
    }

    pub fn logs_dir(&self) -> PathBuf {
        self.repo_dir().join(LOGS_DIR)
    }

    pub fn commit_log_path(&self) -> PathBuf {
        self.logs_dir().join(COMMIT_LOG_FILE)
    }

    /// Resolve a user-supplied path against `workdir`. Absolute paths are
    /// returned unchanged.
    pub fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.workdir.join(path)
        }
    }
}

impl Default for RepoConfig {
    fn default() -> Self {
        Self::new(".")
    }
}
