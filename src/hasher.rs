use log::debug;

use crate::crypto::{self, KdfParams};
use crate::error::Result;
use crate::format::{self, PasswordHash};
use crate::settings::HashSettings;

/// Creates an argon2 hash of a plain-text password.
///
/// Settings are validated before any random bytes are drawn or keys derived.
///
/// # Errors
///
/// - [`Error::InvalidConfiguration`](crate::Error::InvalidConfiguration) for
///   an unset variant or a zero field
/// - [`Error::Random`](crate::Error::Random) if the OS RNG fails
/// - [`Error::Kdf`](crate::Error::Kdf) if argon2 rejects the parameters
pub fn create(password: &str, settings: &HashSettings) -> Result<String> {
    let variant = settings.validate()?;

    let kdf = KdfParams::new(
        variant,
        settings.memory_cost,
        settings.iterations,
        settings.parallelism,
    );

    let salt = crypto::generate_salt(settings.salt_length)?;

    debug!(
        "Deriving {variant} key (m={}, t={}, p={}, {} byte key)...",
        kdf.mem_cost_kib(),
        kdf.time_cost(),
        kdf.parallelism(),
        settings.key_length
    );
    let key = crypto::derive_key(
        password.as_bytes(),
        &salt,
        kdf,
        settings.key_length as usize,
    )?;
    debug!("Deriving {variant} key...done");

    Ok(format::encode(&PasswordHash::new(kdf, salt, key)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ConfigDefect, Error};
    use crate::settings::Variant;

    #[test]
    fn create_produces_decodable_hash() {
        let settings = HashSettings::new(Variant::Argon2id, 16, 32, 256, 1, 2);
        let hash = create("pw", &settings).unwrap();

        assert!(hash.starts_with("$argon2id$v=19$m=256,t=1,p=2$"));
        let decoded = format::decode(&hash).unwrap();
        assert_eq!(decoded.salt().len(), 16);
        assert_eq!(decoded.key().len(), 32);
    }

    #[test]
    fn salts_are_unique_per_hash() {
        let settings = HashSettings::new(Variant::Argon2i, 16, 32, 64, 1, 1);
        let a = create("pw", &settings).unwrap();
        let b = create("pw", &settings).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn incomplete_settings_fail_before_hashing() {
        let settings = HashSettings {
            iterations: 0,
            ..HashSettings::new(Variant::Argon2i, 16, 32, 65536, 3, 2)
        };
        assert!(matches!(
            create("pw", &settings),
            Err(Error::InvalidConfiguration(ConfigDefect::ZeroIterations))
        ));
    }

    #[test]
    fn default_settings_are_rejected() {
        assert!(matches!(
            create("pw", &HashSettings::default()),
            Err(Error::InvalidConfiguration(ConfigDefect::MissingVariant))
        ));
    }

    #[test]
    fn argon2_limits_surface_as_kdf_error() {
        // salt shorter than argon2's 8 byte minimum
        let settings = HashSettings::new(Variant::Argon2id, 4, 32, 64, 1, 1);
        assert!(matches!(create("pw", &settings), Err(Error::Kdf(_))));
    }
}
