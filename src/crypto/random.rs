use getrandom::fill;

use crate::error::{Error, Result};

/// Fill buffer with cryptographically secure random bytes
fn secure_random(buf: &mut [u8]) -> Result<()> {
    fill(buf).map_err(Error::Random)
}

/// Generate a salt of `len` bytes
pub fn generate_salt(len: u32) -> Result<Vec<u8>> {
    let mut salt = vec![0u8; len as usize];
    secure_random(&mut salt)?;
    Ok(salt)
}
