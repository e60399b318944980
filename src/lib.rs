//! Argon2 password hashing configured from a plain-text settings string.
//!
//! Settings are written as a comma-delimited key-value string so they can
//! live in a config file or environment variable, and the memory cost may be
//! given as an expression such as `64*1024`:
//!
//! ```no_run
//! let settings = hashnest::parse_settings("f=argon2id,s=16,k=32,m=64*1024,t=3,p=2")?;
//! let hash = settings.create("mySecretPassword")?;
//!
//! assert!(hashnest::matches("mySecretPassword", &hash)?);
//! assert!(!hashnest::matches("MySecretPassword", &hash)?);
//! # Ok::<(), hashnest::Error>(())
//! ```
//!
//! Verification needs no settings: every parameter is read back from the
//! hash. Only `argon2i` and `argon2id` are supported.

pub mod crypto;
mod error;
pub mod expr;
pub mod format;
pub mod hasher;
pub mod settings;
pub mod verify;

pub use crate::error::{ConfigDefect, Error, Result};
pub use crate::expr::evaluate;
pub use crate::format::PasswordHash;
pub use crate::hasher::create;
pub use crate::settings::{HashSettings, Variant, parse_settings};
pub use crate::verify::matches;
