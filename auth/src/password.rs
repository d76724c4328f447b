use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::PasswordHash;
use argon2::password_hash::PasswordHasher as _;
use argon2::password_hash::PasswordVerifier;
use argon2::password_hash::SaltString;
use argon2::Argon2;
use thiserror::Error;

/// Error type for password operations.
#[derive(Debug, Clone, Error)]
pub enum PasswordError {
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Stored password hash is malformed: {0}")]
    MalformedHash(String),
}

/// Salted one-way password hashing (Argon2id).
///
/// Every call to [`hash`](PasswordHasher::hash) draws a fresh random salt,
/// so hashing the same password twice yields different digests.
pub struct PasswordHasher;

impl PasswordHasher {
    pub fn new() -> Self {
        Self
    }

    /// Hash a plaintext password for storage.
    ///
    /// # Returns
    /// PHC string format digest (algorithm, parameters, salt, and hash)
    ///
    /// # Errors
    /// * `HashingFailed` - hashing operation failed
    pub fn hash(&self, password: &str) -> Result<String, PasswordError> {
        let salt = SaltString::generate(&mut OsRng);

        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|digest| digest.to_string())
            .map_err(|e| PasswordError::HashingFailed(e.to_string()))
    }

    /// Verify a plaintext password against a stored digest.
    ///
    /// A mismatched password is `Ok(false)`, not an error; only an
    /// undecodable digest is an error.
    ///
    /// # Errors
    /// * `MalformedHash` - stored digest is not valid PHC format
    pub fn verify(&self, password: &str, digest: &str) -> Result<bool, PasswordError> {
        let parsed = PasswordHash::new(digest)
            .map_err(|e| PasswordError::MalformedHash(e.to_string()))?;

        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok())
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify_round_trip() {
        let hasher = PasswordHasher::new();

        let hash = hasher.hash("secret1").expect("Failed to hash password");
        assert!(hash.starts_with("$argon2"));

        assert!(hasher.verify("secret1", &hash).expect("Failed to verify"));
        assert!(!hasher.verify("secret2", &hash).expect("Failed to verify"));
    }

    #[test]
    fn test_fresh_salt_per_call() {
        let hasher = PasswordHasher::new();

        let first = hasher.hash("secret1").expect("Failed to hash password");
        let second = hasher.hash("secret1").expect("Failed to hash password");

        assert_ne!(first, second);
        assert!(hasher.verify("secret1", &first).unwrap());
        assert!(hasher.verify("secret1", &second).unwrap());
    }

    #[test]
    fn test_verify_malformed_digest() {
        let hasher = PasswordHasher::new();
        let result = hasher.verify("secret1", "not-a-phc-string");
        assert!(matches!(result, Err(PasswordError::MalformedHash(_))));
    }
}
