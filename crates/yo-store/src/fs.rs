use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::debug;
use yo_types::{ObjectId, HEX_LEN};

use crate::error::{StoreError, StoreResult};
use crate::traits::ObjectStore;

/// Mode given to object files, matching the staging record and history log.
#[cfg(unix)]
const OBJECT_MODE: u32 = 0o644;

/// Filesystem object store: one file per object, named by its hex digest.
///
/// ```text
/// objects/
///   aaf4c61ddcc5e8a2dabede0f3b482cd9aea9434d
///   ...
/// ```
///
/// Writes land in a temporary file inside the same directory and are renamed
/// into place, so an object file is either absent or complete. The directory
/// itself is created by repository bootstrap, not by the store. On unix,
/// object files are readable by everyone (`0644`).
#[derive(Clone, Debug)]
pub struct FsObjectStore {
    dir: PathBuf,
}

impl FsObjectStore {
    /// Open a store over an existing objects directory.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The objects directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Where the object with the given ID lives (whether or not it exists).
    pub fn object_path(&self, id: &ObjectId) -> PathBuf {
        self.dir.join(id.to_hex())
    }

    /// All object IDs currently stored, sorted.
    ///
    /// Files whose names are not 40-character hex digests (e.g. leftover
    /// temporaries) are ignored.
    pub fn all_ids(&self) -> StoreResult<Vec<ObjectId>> {
        let list_err = |source| StoreError::List {
            dir: self.dir.clone(),
            source,
        };

        let mut ids = Vec::new();
        for entry in fs::read_dir(&self.dir).map_err(list_err)? {
            let entry = entry.map_err(list_err)?;
            let name = entry.file_name();
            let Some(name) = name.to_str() else { continue };
            if name.len() != HEX_LEN {
                continue;
            }
            if let Ok(id) = ObjectId::from_hex(name) {
                ids.push(id);
            }
        }
        ids.sort();
        Ok(ids)
    }

    fn write_atomic(&self, key: &ObjectId, data: &[u8]) -> io::Result<()> {
        let mut tmp = NamedTempFile::new_in(&self.dir)?;
        tmp.write_all(data)?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            tmp.as_file()
                .set_permissions(fs::Permissions::from_mode(OBJECT_MODE))?;
        }
        tmp.as_file().sync_all()?;
        tmp.persist(self.object_path(key)).map_err(|e| e.error)?;
        Ok(())
    }
}

impl ObjectStore for FsObjectStore {
    fn get(&self, id: &ObjectId) -> StoreResult<Option<Vec<u8>>> {
        match fs::read(self.object_path(id)) {
            Ok(data) => Ok(Some(data)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StoreError::Read { id: *id, source }),
        }
    }

    fn put_at(&self, key: &ObjectId, data: &[u8]) -> StoreResult<()> {
        self.write_atomic(key, data)
            .map_err(|source| StoreError::Write { id: *key, source })?;
        debug!(id = %key.short_hex(), len = data.len(), "object written");
        Ok(())
    }

    fn exists(&self, id: &ObjectId) -> StoreResult<bool> {
        self.object_path(id)
            .try_exists()
            .map_err(|source| StoreError::Read { id: *id, source })
    }
}
