//! Argon2id password hashing, verification, and strength validation.
//!
//! Hashes are stored in PHC string format, so the cost parameters and salt
//! travel with the hash and verification never needs the current config.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::{Algorithm, Argon2, Params, Version};

/// Password policy and hashing cost.
#[derive(Debug, Clone)]
pub struct PasswordConfig {
    /// Minimum accepted password length in characters.
    pub min_length: usize,
    /// Argon2 time cost (iterations).
    pub hash_rounds: u32,
    /// Argon2 memory cost in KiB.
    pub hash_memory_kib: u32,
}

const DEFAULT_MIN_LENGTH: usize = 8;
const DEFAULT_HASH_ROUNDS: u32 = 3;
const DEFAULT_HASH_MEMORY_KIB: u32 = 19_456;

impl PasswordConfig {
    /// Load the password policy from environment variables.
    ///
    /// | Env Var                    | Default |
    /// |----------------------------|---------|
    /// | `PASSWORD_MIN_LENGTH`      | `8`     |
    /// | `PASSWORD_HASH_ROUNDS`     | `3`     |
    /// | `PASSWORD_HASH_MEMORY_KIB` | `19456` |
    ///
    /// # Panics
    ///
    /// Panics if a value does not parse or the Argon2 parameters are rejected.
    pub fn from_env() -> Self {
        let min_length: usize = std::env::var("PASSWORD_MIN_LENGTH")
            .unwrap_or_else(|_| DEFAULT_MIN_LENGTH.to_string())
            .parse()
            .expect("PASSWORD_MIN_LENGTH must be a valid usize");

        let hash_rounds: u32 = std::env::var("PASSWORD_HASH_ROUNDS")
            .unwrap_or_else(|_| DEFAULT_HASH_ROUNDS.to_string())
            .parse()
            .expect("PASSWORD_HASH_ROUNDS must be a valid u32");

        let hash_memory_kib: u32 = std::env::var("PASSWORD_HASH_MEMORY_KIB")
            .unwrap_or_else(|_| DEFAULT_HASH_MEMORY_KIB.to_string())
            .parse()
            .expect("PASSWORD_HASH_MEMORY_KIB must be a valid u32");

        let config = Self {
            min_length,
            hash_rounds,
            hash_memory_kib,
        };
        if let Err(e) = config.hasher() {
            panic!("Invalid password hashing parameters: {e}");
        }
        config
    }

    fn hasher(&self) -> Result<Argon2<'static>, argon2::Error> {
        let params = Params::new(self.hash_memory_kib, self.hash_rounds, 1, None)?;
        Ok(Argon2::new(Algorithm::Argon2id, Version::V0x13, params))
    }
}

impl Default for PasswordConfig {
    fn default() -> Self {
        Self {
            min_length: DEFAULT_MIN_LENGTH,
            hash_rounds: DEFAULT_HASH_ROUNDS,
            hash_memory_kib: DEFAULT_HASH_MEMORY_KIB,
        }
    }
}

/// Hash a plaintext password using Argon2id with a random salt.
///
/// Returns the PHC-formatted hash string (includes algorithm, params, salt, and hash).
pub fn hash_password(
    password: &str,
    config: &PasswordConfig,
) -> Result<String, argon2::password_hash::Error> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = config.hasher()?;
    let hash = argon2.hash_password(password.as_bytes(), &salt)?;
    Ok(hash.to_string())
}

/// Verify a plaintext password against a stored PHC-formatted Argon2id hash.
///
/// Returns `Ok(true)` if the password matches, `Ok(false)` if it does not.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, argon2::password_hash::Error> {
    let parsed_hash = PasswordHash::new(hash)?;
    match Argon2::default().verify_password(password.as_bytes(), &parsed_hash) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(e),
    }
}

/// Validate that a password meets minimum strength requirements.
pub fn validate_password_strength(password: &str, min_length: usize) -> Result<(), String> {
    if password.chars().count() < min_length {
        return Err(format!(
            "Password must be at least {min_length} characters long"
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Cheap parameters so the tests stay fast.
    fn fast_config() -> PasswordConfig {
        PasswordConfig {
            min_length: 8,
            hash_rounds: 1,
            hash_memory_kib: 1024,
        }
    }

    #[test]
    fn test_hash_and_verify() {
        let hash = hash_password("correct-horse-battery-staple", &fast_config())
            .expect("hashing should succeed");

        assert!(hash.starts_with("$argon2id$"), "expected argon2id PHC prefix");
        assert!(hash.contains("m=1024,t=1"), "configured cost must be embedded");

        let verified =
            verify_password("correct-horse-battery-staple", &hash).expect("verify should succeed");
        assert!(verified);
    }

    #[test]
    fn test_wrong_password_fails() {
        let hash = hash_password("real-password", &fast_config()).expect("hashing should succeed");
        let verified = verify_password("wrong-password", &hash).expect("verify should succeed");
        assert!(!verified);
    }

    #[test]
    fn test_garbage_hash_is_an_error() {
        assert!(verify_password("anything", "not-a-phc-string").is_err());
    }

    #[test]
    fn test_invalid_params_are_rejected() {
        let config = PasswordConfig {
            min_length: 8,
            hash_rounds: 0,
            hash_memory_kib: 1024,
        };
        assert!(hash_password("whatever-password", &config).is_err());
    }

    #[test]
    fn test_password_length_boundary() {
        assert!(validate_password_strength("short", 8).is_err());
        assert!(validate_password_strength("exactly8", 8).is_ok());
        let msg = validate_password_strength("", 8).unwrap_err();
        assert!(msg.contains("at least 8 characters"));
    }
}
