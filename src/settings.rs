//! Argon2 settings and their plain-text form.
//!
//! A settings string is a comma-delimited list of `key=value` pairs. All six
//! keys are mandatory as there are no defaults:
//!
//! ```text
//! f=argon2id,s=16,k=32,m=64*1024,t=3,p=2
//! ```
//!
//! | key | meaning |
//! |-----|---------|
//! | `f` | variant, `argon2i` or `argon2id` |
//! | `s` | salt length in bytes |
//! | `k` | key length in bytes |
//! | `m` | memory in KiB, integer or expression (see [`crate::expr`]) |
//! | `t` | iterations |
//! | `p` | parallelism |

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::{ConfigDefect, Error, Result};
use crate::expr;

/// Supported argon2 variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Data-independent addressing.
    Argon2i,
    /// Hybrid addressing.
    Argon2id,
}

impl Variant {
    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::Argon2i => "argon2i",
            Variant::Argon2id => "argon2id",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Variant {
    type Err = Error;

    /// `argon2d` is deliberately not accepted.
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "argon2i" => Ok(Variant::Argon2i),
            "argon2id" => Ok(Variant::Argon2id),
            other => Err(Error::InvalidVariant(other.to_string())),
        }
    }
}

/// Parameters used to create argon2 hashes.
///
/// Either populate the fields directly or parse a settings string. A value
/// is only usable once every numeric field is non-zero and `variant` is set;
/// [`HashSettings::validate`] checks this and
/// [`create`](crate::hasher::create) refuses anything else.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HashSettings {
    /// (f) `None` means unset.
    pub variant: Option<Variant>,
    /// (s) Byte length of the random salt.
    pub salt_length: u32,
    /// (k) Byte length of the derived key.
    pub key_length: u32,
    /// (m) Memory to use, in kibibytes.
    pub memory_cost: u32,
    /// (t) Number of passes over memory.
    pub iterations: u32,
    /// (p) Degree of parallelism.
    pub parallelism: u8,
}

impl HashSettings {
    pub fn new(
        variant: Variant,
        salt_length: u32,
        key_length: u32,
        memory_cost: u32,
        iterations: u32,
        parallelism: u8,
    ) -> Self {
        Self {
            variant: Some(variant),
            salt_length,
            key_length,
            memory_cost,
            iterations,
            parallelism,
        }
    }

    /// Returns the variant once [`validate`](Self::validate) has passed.
    pub fn validate(&self) -> Result<Variant> {
        let defect = match self.variant {
            None => ConfigDefect::MissingVariant,
            Some(_) if self.salt_length == 0 => ConfigDefect::ZeroSaltLength,
            Some(_) if self.key_length == 0 => ConfigDefect::ZeroKeyLength,
            Some(_) if self.memory_cost == 0 => ConfigDefect::ZeroMemoryCost,
            Some(_) if self.iterations == 0 => ConfigDefect::ZeroIterations,
            Some(_) if self.parallelism == 0 => ConfigDefect::ZeroParallelism,
            Some(variant) => return Ok(variant),
        };
        Err(Error::InvalidConfiguration(defect))
    }

    /// Hashes `password` with these settings.
    pub fn create(&self, password: &str) -> Result<String> {
        crate::hasher::create(password, self)
    }
}

impl FromStr for HashSettings {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut variant = None;
        let mut salt_length = None;
        let mut key_length = None;
        let mut memory_cost = None;
        let mut iterations = None;
        let mut parallelism = None;

        for token in s.split(',') {
            let (key, value) = token
                .split_once('=')
                .ok_or_else(|| Error::MalformedSetting(token.to_string()))?;

            match key {
                "f" => set_once(&mut variant, key, value.parse::<Variant>()?)?,
                "s" => set_once(&mut salt_length, key, value.parse::<u32>()?)?,
                "k" => set_once(&mut key_length, key, value.parse::<u32>()?)?,
                "m" => set_once(&mut memory_cost, key, expr::evaluate(value)?)?,
                "t" => set_once(&mut iterations, key, value.parse::<u32>()?)?,
                "p" => set_once(&mut parallelism, key, value.parse::<u8>()?)?,
                unknown => return Err(Error::UnknownSetting(unknown.to_string())),
            }
        }

        Ok(Self {
            variant: Some(variant.ok_or(Error::MissingSetting("f"))?),
            salt_length: salt_length.ok_or(Error::MissingSetting("s"))?,
            key_length: key_length.ok_or(Error::MissingSetting("k"))?,
            memory_cost: memory_cost.ok_or(Error::MissingSetting("m"))?,
            iterations: iterations.ok_or(Error::MissingSetting("t"))?,
            parallelism: parallelism.ok_or(Error::MissingSetting("p"))?,
        })
    }
}

fn set_once<T>(slot: &mut Option<T>, key: &str, value: T) -> Result<()> {
    if slot.is_some() {
        return Err(Error::DuplicateSetting(key.to_string()));
    }
    *slot = Some(value);
    Ok(())
}

/// Canonical settings string; memory is written as its evaluated value.
/// An unset variant renders as an empty `f=`, which does not parse back.
impl fmt::Display for HashSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "f={},s={},k={},m={},t={},p={}",
            self.variant.map_or("", |v| v.as_str()),
            self.salt_length,
            self.key_length,
            self.memory_cost,
            self.iterations,
            self.parallelism,
        )
    }
}

/// Parses a settings string into [`HashSettings`].
pub fn parse_settings(settings: &str) -> Result<HashSettings> {
    settings.parse()
}
