//! Password value object backed by Argon2id.
//!
//! Plain text never leaves this module: callers get a PHC hash string to
//! store and a `verify` check against a submitted password.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use once_cell::sync::Lazy;

use crate::config::MIN_PASSWORD_LENGTH;
use crate::errors::{AppError, AppResult};

/// Hash checked when the account does not exist, so unknown emails cost the
/// same Argon2 work as wrong passwords.
static DUMMY_HASH: Lazy<String> = Lazy::new(|| {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(b"no-account-placeholder", &salt)
        .map(|h| h.to_string())
        .unwrap_or_default()
});

/// Stored password hash
#[derive(Clone)]
pub struct Password {
    hash: String,
}

impl std::fmt::Debug for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Password([REDACTED])")
    }
}

impl Password {
    /// Hash a new plain text password with a fresh random salt.
    ///
    /// # Errors
    /// `Validation` when shorter than the minimum length.
    pub fn new(plain_text: &str) -> AppResult<Self> {
        if plain_text.chars().count() < MIN_PASSWORD_LENGTH as usize {
            return Err(AppError::validation(format!(
                "Password must be at least {} characters",
                MIN_PASSWORD_LENGTH
            )));
        }

        let salt = SaltString::generate(&mut OsRng);
        let hash = Argon2::default()
            .hash_password(plain_text.as_bytes(), &salt)
            .map_err(|e| AppError::internal(format!("Password hash failed: {}", e)))?
            .to_string();

        Ok(Self { hash })
    }

    /// Wrap a hash loaded from the users table.
    pub fn from_hash(hash: impl Into<String>) -> Self {
        Self { hash: hash.into() }
    }

    /// Placeholder used to equalize login timing for unknown accounts.
    pub fn dummy() -> Self {
        Self::from_hash(DUMMY_HASH.as_str())
    }

    pub fn as_str(&self) -> &str {
        &self.hash
    }

    pub fn into_string(self) -> String {
        self.hash
    }

    /// Constant-time check of `plain_text` against the stored hash.
    /// A malformed stored hash never verifies.
    pub fn verify(&self, plain_text: &str) -> bool {
        match PasswordHash::new(&self.hash) {
            Ok(parsed) => Argon2::default()
                .verify_password(plain_text.as_bytes(), &parsed)
                .is_ok(),
            Err(e) => {
                tracing::warn!("Stored password hash is not a valid PHC string: {}", e);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_differs_from_plain_text() {
        let password = Password::new("SecurePassword123!").unwrap();
        assert_ne!(password.as_str(), "SecurePassword123!");
        assert!(password.as_str().starts_with("$argon2"));
    }

    #[test]
    fn test_verify_round_trip_through_storage() {
        let stored = Password::new("TestPassword123").unwrap().into_string();
        let restored = Password::from_hash(stored);

        assert!(restored.verify("TestPassword123"));
        assert!(!restored.verify("TestPassword124"));
    }

    #[test]
    fn test_same_password_different_salts() {
        let a = Password::new("SamePassword123").unwrap();
        let b = Password::new("SamePassword123").unwrap();
        assert_ne!(a.as_str(), b.as_str());
    }

    #[test]
    fn test_too_short_is_rejected() {
        assert!(matches!(Password::new("short"), Err(AppError::Validation(_))));
        assert!(Password::new("12345678").is_ok());
    }

    #[test]
    fn test_dummy_never_matches_and_garbage_hash_fails() {
        assert!(!Password::dummy().verify("anything-at-all"));
        assert!(!Password::from_hash("not-a-hash").verify("anything-at-all"));
    }

    #[test]
    fn test_debug_is_redacted() {
        let password = Password::new("SecurePassword123!").unwrap();
        assert_eq!(format!("{:?}", password), "Password([REDACTED])");
    }
}
