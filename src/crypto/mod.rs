//! Cryptographic primitives behind hashing and verification.
//!
//! Provides key derivation, salt generation and key comparison.

pub mod compare;
pub mod kdf;
pub mod random;

pub use compare::keys_match;
pub use kdf::{KdfParams, derive_key};
pub use random::generate_salt;
