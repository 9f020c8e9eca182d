use std::io;
use std::path::PathBuf;

use thiserror::Error;
use yo_history::HistoryError;
use yo_index::IndexError;
use yo_store::StoreError;

use crate::commit::CommitStep;

/// Boxed underlying cause of an [`SdkError::Io`].
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, Error)]
pub enum SdkError {
    #[error("repository already initialized at {}", .0.display())]
    AlreadyInitialized(PathBuf),

    #[error("cannot read {}: {source}", .path.display())]
    UnreadableSource {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The path cannot be recorded verbatim in the staging area.
    #[error("invalid path: {0}")]
    InvalidPath(String),

    /// A storage operation outside the commit sequence failed.
    #[error("{operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: BoxError,
    },

    #[error("no changes staged for commit")]
    NoStagedChanges,

    #[error("staging area unreadable: {0}")]
    StagingUnreadable(#[source] IndexError),

    #[error("commit object not written: {0}")]
    CommitWriteFailure(#[source] StoreError),

    #[error("history not updated: {0}")]
    LogAppendFailure(#[source] HistoryError),

    #[error("staging area not cleared: {0}")]
    StagingClearFailure(#[source] IndexError),

    #[error("no commits yet")]
    LogUnavailable,
}

impl SdkError {
    pub(crate) fn io(operation: impl Into<String>, source: impl Into<BoxError>) -> Self {
        Self::Io {
            operation: operation.into(),
            source: source.into(),
        }
    }

    /// The commit step this error stopped at, if it came from a commit.
    pub fn step(&self) -> Option<CommitStep> {
        match self {
            Self::NoStagedChanges | Self::StagingUnreadable(_) => Some(CommitStep::ReadStaging),
            Self::CommitWriteFailure(_) => Some(CommitStep::WriteObject),
            Self::LogAppendFailure(_) => Some(CommitStep::AppendLog),
            Self::StagingClearFailure(_) => Some(CommitStep::ClearStaging),
            _ => None,
        }
    }
}

pub type SdkResult<T> = Result<T, SdkError>;
