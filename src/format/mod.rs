//! Textual encoding of argon2 hashes.
//!
//! ```text
//! $<variant>$v=<version>$m=<memory>,t=<iterations>,p=<parallelism>$<salt>$<key>
//! ```
//!
//! Salt and key are standard base64 without padding. The string is stored by
//! other systems (database columns, config files) and must be reproduced
//! bit-exact.

use std::fmt;
use std::str::FromStr;

use base64::{Engine as _, engine::general_purpose::STANDARD_NO_PAD as B64};
use zeroize::Zeroizing;

use crate::crypto::{KdfParams, kdf::ARGON2_VERSION};
use crate::error::{Error, Result};
use crate::settings::Variant;

pub mod params;

use params::CostParams;

/// Field delimiter of the encoded form.
pub const DELIMITER: char = '$';
/// Number of segments, counting the empty one before the leading `$`.
pub const SEGMENTS: usize = 6;
/// Format version written into new hashes; the only one accepted on decode.
pub const VERSION: u32 = ARGON2_VERSION as u32;

/// A decoded argon2 hash.
///
/// Exists only between decoding and comparison; persisted as text.
#[derive(Debug, PartialEq, Eq)]
pub struct PasswordHash {
    variant: Variant,
    version: u32,
    params: CostParams,
    salt: Vec<u8>,
    key: Zeroizing<Vec<u8>>,
}

impl PasswordHash {
    /// Creates a hash record at the current [`VERSION`].
    pub fn new(kdf: KdfParams, salt: Vec<u8>, key: Zeroizing<Vec<u8>>) -> Self {
        Self {
            variant: kdf.variant(),
            version: VERSION,
            params: CostParams {
                memory_cost: kdf.mem_cost_kib(),
                iterations: kdf.time_cost(),
                parallelism: kdf.parallelism(),
            },
            salt,
            key,
        }
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn version(&self) -> u32 {
        self.version
    }

    pub fn memory_cost(&self) -> u32 {
        self.params.memory_cost
    }

    pub fn iterations(&self) -> u32 {
        self.params.iterations
    }

    pub fn parallelism(&self) -> u8 {
        self.params.parallelism
    }

    pub fn salt(&self) -> &[u8] {
        &self.salt
    }

    pub fn key(&self) -> &[u8] {
        &self.key
    }

    /// The parameters needed to re-derive the key.
    pub fn kdf(&self) -> KdfParams {
        KdfParams::new(
            self.variant,
            self.params.memory_cost,
            self.params.iterations,
            self.params.parallelism,
        )
    }
}

/// Encodes a hash record into its canonical text.
pub fn encode(hash: &PasswordHash) -> String {
    format!(
        "${}$v={}${}${}${}",
        hash.variant,
        hash.version,
        hash.params.encode(),
        B64.encode(&hash.salt),
        B64.encode(hash.key.as_slice()),
    )
}

/// Decodes hash text. Performs no cryptography.
///
/// # Errors
///
/// - [`Error::InvalidHash`] if the text does not split into six `$`
///   segments or a segment is empty or lacks its tag
/// - [`Error::InvalidVariant`] for variants other than argon2i/argon2id
/// - [`Error::IncompatibleVersion`] if `v=` is not [`VERSION`]
/// - [`Error::Number`] for unparsable numbers
/// - [`Error::Base64`] for a corrupt salt or key
pub fn decode(text: &str) -> Result<PasswordHash> {
    let segments: Vec<&str> = text.split(DELIMITER).collect();
    if segments.len() != SEGMENTS {
        return Err(Error::InvalidHash);
    }
    if !segments[0].is_empty() || segments[1..].iter().any(|s| s.is_empty()) {
        return Err(Error::InvalidHash);
    }

    let variant = segments[1].parse::<Variant>()?;

    let version = segments[2]
        .strip_prefix("v=")
        .ok_or(Error::InvalidHash)?
        .parse::<u32>()?;
    match version {
        VERSION => {}
        other => return Err(Error::IncompatibleVersion(other)),
    }

    let params = CostParams::decode(segments[3])?;
    let salt = B64.decode(segments[4])?;
    let key = Zeroizing::new(B64.decode(segments[5])?);

    Ok(PasswordHash {
        variant,
        version,
        params,
        salt,
        key,
    })
}

impl fmt::Display for PasswordHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&encode(self))
    }
}

impl FromStr for PasswordHash {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        decode(s)
    }
}
