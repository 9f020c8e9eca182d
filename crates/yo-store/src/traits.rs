use yo_crypto::ContentHasher;
use yo_types::ObjectId;

use crate::error::StoreResult;

/// Content-addressed object store.
///
/// All implementations must satisfy these invariants:
/// - `put` names every object by the SHA-1 of its bytes, so storing the same
///   content twice leaves one object with identical bytes.
/// - Writes replace whatever is stored under the key; readers never observe a
///   partially written object.
/// - The store never interprets object contents. It is a pure key-value store.
/// - All I/O errors are propagated, never silently ignored.
pub trait ObjectStore: Send + Sync {
    /// Read an object's bytes.
    ///
    /// Returns `Ok(None)` if the object does not exist.
    fn get(&self, id: &ObjectId) -> StoreResult<Option<Vec<u8>>>;

    /// Store `data` under an explicit key, replacing any existing object.
    ///
    /// The key is not checked against the content. Only commit objects,
    /// whose identity covers more than their payload, should be written
    /// this way.
    fn put_at(&self, key: &ObjectId, data: &[u8]) -> StoreResult<()>;

    /// Check whether an object exists in the store.
    fn exists(&self, id: &ObjectId) -> StoreResult<bool>;

    /// Store `data` under its own digest and return that digest.
    fn put(&self, data: &[u8]) -> StoreResult<ObjectId> {
        let id = ContentHasher::hash(data);
        self.put_at(&id, data)?;
        Ok(id)
    }
}
