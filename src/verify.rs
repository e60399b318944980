use log::debug;

use crate::crypto;
use crate::error::Result;
use crate::format;

/// Compares a plain-text password with an encoded argon2 hash.
///
/// All parameters, including the key length, are taken from the hash. A
/// wrong password is `Ok(false)`, not an error.
///
/// # Errors
///
/// Any decoding error from [`format::decode`], or
/// [`Error::Kdf`](crate::Error::Kdf) if argon2 rejects the stored parameters.
/// That includes hashes whose stored key is shorter than 4 bytes or whose
/// salt is shorter than 8 bytes: argon2 cannot derive such keys, so they are
/// reported as errors rather than as a mismatch.
pub fn matches(password: &str, hash: &str) -> Result<bool> {
    let stored = format::decode(hash)?;

    debug!(
        "Deriving {} key for comparison (m={}, t={}, p={})...",
        stored.variant(),
        stored.memory_cost(),
        stored.iterations(),
        stored.parallelism()
    );
    let derived = crypto::derive_key(
        password.as_bytes(),
        stored.salt(),
        stored.kdf(),
        stored.key().len(),
    )?;

    Ok(crypto::keys_match(stored.key(), &derived))
}
