use sha1::{Digest, Sha1};
use yo_types::{ObjectId, DIGEST_LEN};

/// SHA-1 content hasher.
///
/// Hashes are taken over the raw bytes with no header or domain tag, so an
/// object's ID equals `sha1sum` of its content.
#[derive(Clone, Debug, Default)]
pub struct ContentHasher {
    inner: Sha1,
}

impl ContentHasher {
    /// Start an incremental hash.
    pub fn new() -> Self {
        Self { inner: Sha1::new() }
    }

    /// Feed more bytes into the hash.
    pub fn update(&mut self, data: impl AsRef<[u8]>) -> &mut Self {
        self.inner.update(data.as_ref());
        self
    }

    /// Consume the hasher and produce the object ID.
    pub fn finalize(self) -> ObjectId {
        ObjectId::from_hash(self.inner.finalize().into())
    }

    /// Hash a single byte slice.
    pub fn hash(data: &[u8]) -> ObjectId {
        ObjectId::from_hash(Self::raw_hash(data))
    }

    /// Hash the concatenation of `parts`, in order, without materialising it.
    pub fn hash_parts<I, P>(parts: I) -> ObjectId
    where
        I: IntoIterator<Item = P>,
        P: AsRef<[u8]>,
    {
        let mut hasher = Self::new();
        for part in parts {
            hasher.update(part);
        }
        hasher.finalize()
    }

    /// Verify that data produces the expected object ID.
    pub fn verify(data: &[u8], expected: &ObjectId) -> bool {
        Self::hash(data) == *expected
    }

    /// Raw SHA-1 digest bytes.
    pub fn raw_hash(data: &[u8]) -> [u8; DIGEST_LEN] {
        Sha1::digest(data).into()
    }
}
