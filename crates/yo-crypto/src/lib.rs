//! Content hashing for yo.
//!
//! Objects are addressed by the SHA-1 digest of their bytes. This crate
//! wraps the RustCrypto implementation; there is no custom cryptography.

pub mod hasher;

pub use hasher::ContentHasher;
