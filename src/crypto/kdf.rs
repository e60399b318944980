use argon2::{Algorithm, Argon2, Params, Version};
use zeroize::Zeroizing;

use crate::error::{Error, Result};
use crate::settings::Variant;

/// Argon2 version produced and accepted by this crate (`0x13`, encoded as 19).
pub const ARGON2_VERSION: Version = Version::V0x13;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KdfParams {
    variant: Variant,
    mem_cost_kib: u32,
    time_cost: u32,
    parallelism: u8,
}

impl KdfParams {
    pub fn new(variant: Variant, mem_cost_kib: u32, time_cost: u32, parallelism: u8) -> Self {
        Self {
            variant,
            mem_cost_kib,
            time_cost,
            parallelism,
        }
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn mem_cost_kib(&self) -> u32 {
        self.mem_cost_kib
    }

    pub fn time_cost(&self) -> u32 {
        self.time_cost
    }

    pub fn parallelism(&self) -> u8 {
        self.parallelism
    }
}

impl From<Variant> for Algorithm {
    fn from(variant: Variant) -> Self {
        match variant {
            Variant::Argon2i => Algorithm::Argon2i,
            Variant::Argon2id => Algorithm::Argon2id,
        }
    }
}

/// Derives `key_len` bytes from `password` and `salt`.
///
/// Parameter limits are enforced by argon2 itself (salt of at least 8 bytes,
/// key of at least 4 bytes, memory of at least `8 * parallelism` KiB) and
/// surface as [`Error::Kdf`].
pub fn derive_key(
    password: &[u8],
    salt: &[u8],
    kdf: KdfParams,
    key_len: usize,
) -> Result<Zeroizing<Vec<u8>>> {
    let params = Params::new(
        kdf.mem_cost_kib,
        kdf.time_cost,
        u32::from(kdf.parallelism),
        Some(key_len),
    )
    .map_err(Error::Kdf)?;

    let argon2 = Argon2::new(kdf.variant.into(), ARGON2_VERSION, params);

    let mut key = Zeroizing::new(vec![0u8; key_len]);
    argon2
        .hash_password_into(password, salt, &mut key)
        .map_err(Error::Kdf)?;

    Ok(key)
}
