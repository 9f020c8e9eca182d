//! The commit sequence.
//!
//! A commit is four steps run in order, each depending on the one before:
//!
//! 1. [`CommitStep::ReadStaging`]: read the staging record.
//! 2. [`CommitStep::WriteObject`]: store the record under the commit digest.
//! 3. [`CommitStep::AppendLog`]: append a history record.
//! 4. [`CommitStep::ClearStaging`]: delete the staging record.
//!
//! A failure stops the sequence where it happened. Earlier steps are not
//! rolled back, and the returned error names the failing step through
//! [`SdkError::step`].

use std::fmt;

use serde::Serialize;
use tracing::{debug, warn};
use yo_crypto::ContentHasher;
use yo_history::{HistoryLog, LogRecord};
use yo_index::StagingArea;
use yo_store::ObjectStore;
use yo_types::{Clock, ObjectId, Timestamp};

use crate::error::{SdkError, SdkResult};

/// One step of the commit sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum CommitStep {
    ReadStaging,
    WriteObject,
    AppendLog,
    ClearStaging,
}

impl CommitStep {
    /// All steps, in execution order.
    pub const ALL: [CommitStep; 4] = [
        Self::ReadStaging,
        Self::WriteObject,
        Self::AppendLog,
        Self::ClearStaging,
    ];
}

impl fmt::Display for CommitStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::ReadStaging => "read staging",
            Self::WriteObject => "write object",
            Self::AppendLog => "append log",
            Self::ClearStaging => "clear staging",
        };
        f.write_str(name)
    }
}

/// A sealed commit, ready to be written.
///
/// The storage key is derived from the payload, the message and the
/// timestamp, so it is not the hash of `payload`. The object file named
/// `storage_key` holds `payload` (the staging bytes), not a structured
/// commit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommitObject {
    /// Key the payload is stored under.
    pub storage_key: ObjectId,
    /// Digest shown to users and written to the history log.
    pub display_digest: ObjectId,
    /// Bytes written to the object store.
    pub payload: Vec<u8>,
}

impl CommitObject {
    /// Compute the commit digest over `staging ++ message ++ at` and wrap
    /// the staging bytes as the payload.
    pub fn seal(staging: Vec<u8>, message: &str, at: Timestamp) -> Self {
        let stamp = at.to_digest_input();
        let digest = ContentHasher::hash_parts([
            staging.as_slice(),
            message.as_bytes(),
            stamp.as_bytes(),
        ]);
        Self {
            storage_key: digest,
            display_digest: digest,
            payload: staging,
        }
    }
}

/// Result of a successful commit.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CommitResult {
    pub digest: ObjectId,
    /// Number of staging lines the commit captured.
    pub entries: usize,
    /// Time written to the history record.
    pub recorded_at: Timestamp,
}

/// Runs the commit sequence against a set of backends.
pub struct CommitEngine<'a> {
    store: &'a dyn ObjectStore,
    staging: &'a StagingArea,
    history: &'a dyn HistoryLog,
    clock: &'a dyn Clock,
}

impl<'a> CommitEngine<'a> {
    pub fn new(
        store: &'a dyn ObjectStore,
        staging: &'a StagingArea,
        history: &'a dyn HistoryLog,
        clock: &'a dyn Clock,
    ) -> Self {
        Self {
            store,
            staging,
            history,
            clock,
        }
    }

    /// Commit everything staged with the given message.
    ///
    /// The clock is read twice: once for the digest, once for the history
    /// record.
    pub fn run(&self, message: &str) -> SdkResult<CommitResult> {
        let staged = self
            .staging
            .read()
            .map_err(SdkError::StagingUnreadable)?
            .ok_or(SdkError::NoStagedChanges)?;
        let entries = staged.split(|&b| b == b'\n').filter(|l| !l.is_empty()).count();
        debug!(step = %CommitStep::ReadStaging, bytes = staged.len(), entries, "commit step done");

        let object = CommitObject::seal(staged, message, self.clock.now());
        self.store
            .put_at(&object.storage_key, &object.payload)
            .map_err(SdkError::CommitWriteFailure)?;
        debug!(step = %CommitStep::WriteObject, key = %object.storage_key.short_hex(), "commit step done");

        let record = LogRecord::new(object.display_digest, message, self.clock.now());
        if let Err(e) = self.history.append(&record) {
            warn!(
                digest = %object.display_digest,
                "commit object written but history not updated"
            );
            return Err(SdkError::LogAppendFailure(e));
        }
        debug!(step = %CommitStep::AppendLog, "commit step done");

        if let Err(e) = self.staging.clear() {
            warn!(
                digest = %object.display_digest,
                "commit recorded but staging area still holds its entries"
            );
            return Err(SdkError::StagingClearFailure(e));
        }
        debug!(step = %CommitStep::ClearStaging, "commit step done");

        Ok(CommitResult {
            digest: object.display_digest,
            entries,
            recorded_at: record.time,
        })
    }
}
