use std::collections::HashMap;
use std::sync::RwLock;

use yo_types::ObjectId;

use crate::error::StoreResult;
use crate::traits::ObjectStore;

/// In-memory, HashMap-based object store.
///
/// Intended for tests and embedding. All objects are held in memory behind a
/// `RwLock` for safe concurrent access. Objects are cloned on read/write.
pub struct InMemoryObjectStore {
    objects: RwLock<HashMap<ObjectId, Vec<u8>>>,
}

impl InMemoryObjectStore {
    /// Create a new empty in-memory store.
    pub fn new() -> Self {
        Self {
            objects: RwLock::new(HashMap::new()),
        }
    }

    /// Number of objects currently stored.
    pub fn len(&self) -> usize {
        self.objects.read().expect("lock poisoned").len()
    }

    /// Returns `true` if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.objects.read().expect("lock poisoned").is_empty()
    }

    /// Return a sorted list of all object IDs in the store.
    pub fn all_ids(&self) -> Vec<ObjectId> {
        let map = self.objects.read().expect("lock poisoned");
        let mut ids: Vec<ObjectId> = map.keys().copied().collect();
        ids.sort();
        ids
    }
}

impl Default for InMemoryObjectStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ObjectStore for InMemoryObjectStore {
    fn get(&self, id: &ObjectId) -> StoreResult<Option<Vec<u8>>> {
        let map = self.objects.read().expect("lock poisoned");
        Ok(map.get(id).cloned())
    }

    fn put_at(&self, key: &ObjectId, data: &[u8]) -> StoreResult<()> {
        let mut map = self.objects.write().expect("lock poisoned");
        map.insert(*key, data.to_vec());
        Ok(())
    }

    fn exists(&self, id: &ObjectId) -> StoreResult<bool> {
        let map = self.objects.read().expect("lock poisoned");
        Ok(map.contains_key(id))
    }
}

impl std::fmt::Debug for InMemoryObjectStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let count = self.len();
        f.debug_struct("InMemoryObjectStore")
            .field("object_count", &count)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use yo_crypto::ContentHasher;

    #[test]
    fn new_store_is_empty() {
        let store = InMemoryObjectStore::new();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
        assert!(store.all_ids().is_empty());
    }

    #[test]
    fn put_then_get() {
        let store = InMemoryObjectStore::new();
        let id = store.put(b"hello").unwrap();
        assert_eq!(id, ContentHasher::hash(b"hello"));
        assert_eq!(store.get(&id).unwrap().unwrap(), b"hello");
        assert!(store.exists(&id).unwrap());
    }

    #[test]
    fn get_missing_returns_none() {
        let store = InMemoryObjectStore::new();
        let id = ContentHasher::hash(b"missing");
        assert!(store.get(&id).unwrap().is_none());
        assert!(!store.exists(&id).unwrap());
    }

    #[test]
    fn put_at_stores_under_given_key() {
        let store = InMemoryObjectStore::new();
        let key = ContentHasher::hash(b"commit identity");
        store.put_at(&key, b"staged lines").unwrap();
        assert_eq!(store.get(&key).unwrap().unwrap(), b"staged lines");
        assert_eq!(store.all_ids(), vec![key]);
    }

    #[test]
    fn all_ids_sorted() {
        let store = InMemoryObjectStore::new();
        store.put(b"one").unwrap();
        store.put(b"two").unwrap();
        store.put(b"three").unwrap();
        let ids = store.all_ids();
        let mut sorted = ids.clone();
        sorted.sort();
        assert_eq!(ids, sorted);
        assert_eq!(ids.len(), 3);
    }

    #[test]
    fn debug_shows_count() {
        let store = InMemoryObjectStore::new();
        store.put(b"x").unwrap();
        assert!(format!("{store:?}").contains("object_count: 1"));
    }

    proptest! {
        #[test]
        fn repeated_put_is_idempotent(data in proptest::collection::vec(any::<u8>(), 0..256), times in 1usize..5) {
            let store = InMemoryObjectStore::new();
            let mut ids = Vec::new();
            for _ in 0..times {
                ids.push(store.put(&data).unwrap());
            }
            prop_assert!(ids.windows(2).all(|w| w[0] == w[1]));
            prop_assert_eq!(store.len(), 1);
            prop_assert_eq!(store.get(&ids[0]).unwrap().unwrap(), data);
        }
    }
}
