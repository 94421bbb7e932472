//! Password hashing utilities using Argon2

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher as Argon2PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use std::fmt::Debug;

use crate::domain::DomainError;

/// Seam for salted one-way hashing. Used for user passwords and for API
/// key secrets, both of which are password-class credentials.
pub trait PasswordHasher: Send + Sync + Debug {
    /// Hash a secret with a fresh random salt
    fn hash(&self, secret: &str) -> Result<String, DomainError>;

    /// Verify a secret against a stored hash. The comparison happens
    /// inside the argon2 implementation and is constant-time; this is
    /// never plaintext equality.
    fn verify(&self, secret: &str, hash: &str) -> bool;
}

/// Argon2-based hasher with default parameters
#[derive(Debug, Clone, Default)]
pub struct Argon2Hasher;

impl Argon2Hasher {
    pub fn new() -> Self {
        Self
    }
}

impl PasswordHasher for Argon2Hasher {
    fn hash(&self, secret: &str) -> Result<String, DomainError> {
        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();

        argon2
            .hash_password(secret.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| DomainError::internal(format!("Failed to hash secret: {}", e)))
    }

    fn verify(&self, secret: &str, hash: &str) -> bool {
        let parsed_hash = match PasswordHash::new(hash) {
            Ok(h) => h,
            Err(_) => return false,
        };

        Argon2::default()
            .verify_password(secret.as_bytes(), &parsed_hash)
            .is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let hasher = Argon2Hasher::new();
        let hash = hasher.hash("my_secure_password").unwrap();

        assert!(hasher.verify("my_secure_password", &hash));
        assert!(!hasher.verify("wrong_password", &hash));
    }

    #[test]
    fn test_hash_is_salted() {
        let hasher = Argon2Hasher::new();
        let a = hasher.hash("same_secret").unwrap();
        let b = hasher.hash("same_secret").unwrap();

        assert_ne!(a, b);
        assert!(hasher.verify("same_secret", &a));
        assert!(hasher.verify("same_secret", &b));
    }

    #[test]
    fn test_garbage_hash_never_verifies() {
        let hasher = Argon2Hasher::new();
        assert!(!hasher.verify("anything", "not-a-phc-string"));
    }
}
