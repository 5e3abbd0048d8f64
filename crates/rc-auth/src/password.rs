//! Password hashing and verification using Argon2id.

use argon2::{
    password_hash::{PasswordHasher, SaltString},
    Argon2, PasswordHash, PasswordVerifier,
};

use crate::error::{AuthError, AuthResult};

/// Hash a password with a fresh random salt.
///
/// Returns the PHC-formatted hash string suitable for storage.
pub fn hash_password(password: &str) -> AuthResult<String> {
    let salt = SaltString::generate(rand::thread_rng());
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|_| AuthError::Internal("failed to hash password".into()))
}

/// Verify a password against a stored hash.
pub fn verify_password(password: &str, hash: &str) -> AuthResult<()> {
    let parsed = PasswordHash::new(hash)
        .map_err(|_| AuthError::Internal("invalid password hash format".into()))?;

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .map_err(|_| AuthError::InvalidCredentials)
}
