use std::fmt;
use std::num::ParseIntError;

use thiserror::Error;

/// Result alias used throughout the library.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("unknown or unsupported argon2 variant '{0}'")]
    InvalidVariant(String),

    #[error("hash is not in the correct format")]
    InvalidHash,

    #[error("incompatible version of argon2: {0}")]
    IncompatibleVersion(u32),

    #[error("argon2 configuration contains invalid values: {0}")]
    InvalidConfiguration(ConfigDefect),

    #[error("unknown argon2 setting: {0}")]
    UnknownSetting(String),

    #[error("missing argon2 setting: {0}")]
    MissingSetting(&'static str),

    #[error("argon2 setting given more than once: {0}")]
    DuplicateSetting(String),

    #[error("malformed argon2 setting '{0}', expected key=value")]
    MalformedSetting(String),

    #[error("`{0}` unsupported in argon2 memory expression")]
    UnsupportedExpression(String),

    #[error("division by zero in argon2 memory expression")]
    DivisionByZero,

    #[error(transparent)]
    Number(#[from] ParseIntError),

    #[error(transparent)]
    Base64(#[from] base64::DecodeError),

    #[error("OS random generator unavailable: {0}")]
    Random(getrandom::Error),

    #[error("argon2 key derivation failed: {0}")]
    Kdf(argon2::Error),
}

/// The first field that makes a [`HashSettings`](crate::HashSettings) unusable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigDefect {
    MissingVariant,
    ZeroSaltLength,
    ZeroKeyLength,
    ZeroMemoryCost,
    ZeroIterations,
    ZeroParallelism,
}

impl fmt::Display for ConfigDefect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigDefect::MissingVariant => write!(f, "variant is not set"),
            ConfigDefect::ZeroSaltLength => write!(f, "salt length must be > 0"),
            ConfigDefect::ZeroKeyLength => write!(f, "key length must be > 0"),
            ConfigDefect::ZeroMemoryCost => write!(f, "memory cost must be > 0"),
            ConfigDefect::ZeroIterations => write!(f, "iterations must be > 0"),
            ConfigDefect::ZeroParallelism => write!(f, "parallelism must be > 0"),
        }
    }
}
