//! Foundation types for yo.
//!
//! Every other yo crate depends on `yo-types`.
//!
//! # Key Types
//!
//! - [`ObjectId`] -- Content-addressed identifier (SHA-1 digest, 40 hex chars)
//! - [`Timestamp`] -- UTC instant with the two renderings a commit needs
//! - [`Clock`] -- Source of timestamps, injectable for tests

pub mod error;
pub mod object;
pub mod temporal;

pub use error::TypeError;
pub use object::{ObjectId, DIGEST_LEN, HEX_LEN};
pub use temporal::{Clock, SteppingClock, SystemClock, Timestamp};
