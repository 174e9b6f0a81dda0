//! Password hashing and verification using Argon2.
//!
//! Hashes are PHC strings carrying their own salt and parameters, so a
//! stored hash is all that is needed to verify a later login attempt.
//!
//! # Examples
//!
//! ```rust
//! use taskgate::auth::secret_hash::{generate_secret_hash, is_secret_valid};
//!
//! let hash = generate_secret_hash("user_password_123").unwrap();
//! assert!(is_secret_valid("user_password_123", &hash).unwrap());
//! assert!(!is_secret_valid("wrong_password", &hash).unwrap());
//! ```

use argon2::{
    Argon2, PasswordHasher, PasswordVerifier,
    password_hash::{PasswordHashString, SaltString},
};
use rand::rngs::OsRng;

use super::error::Result;

/// Hashes `pw` with Argon2 and a fresh random salt.
///
/// Two calls with the same password produce different hashes.
pub fn generate_secret_hash(pw: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();
    Ok(argon2.hash_password(pw.as_bytes(), &salt)?.to_string())
}

/// Verifies a password against a stored hash.
///
/// A mismatch is `Ok(false)`; only a hash that cannot be parsed (corrupted
/// storage) is an error. The comparison runs in constant time.
pub fn is_secret_valid(pw: &str, hash: &str) -> Result<bool> {
    let hash = PasswordHashString::new(hash)?;

    Ok(Argon2::default()
        .verify_password(pw.as_bytes(), &hash.password_hash())
        .is_ok())
}
