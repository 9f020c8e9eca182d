//! Content-addressed object storage for yo.
//!
//! Objects are immutable byte sequences named by the SHA-1 of their content,
//! laid out like git's loose objects: one file per object, named by its
//! 40-character hex digest.
//!
//! # Storage Backends
//!
//! All backends implement the [`ObjectStore`] trait:
//!
//! - [`FsObjectStore`] -- one file per object under a directory
//! - [`InMemoryObjectStore`] -- `HashMap`-based store for tests and embedding
//!
//! # Design Rules
//!
//! 1. `put` derives the key from the content; `put_at` is reserved for
//!    commit objects whose key covers more than the stored payload.
//! 2. Re-storing identical content is an overwrite with identical bytes.
//! 3. The store never interprets object contents.
//! 4. All I/O errors are propagated, never silently ignored.

pub mod error;
pub mod fs;
pub mod memory;
pub mod traits;

pub use error::{StoreError, StoreResult};
pub use fs::FsObjectStore;
pub use memory::InMemoryObjectStore;
pub use traits::ObjectStore;
