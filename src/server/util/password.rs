//! Password hashing with Argon2.
//!
//! Hashes are stored as PHC strings so the algorithm parameters and salt travel
//! with the hash.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::server::error::{internal::InternalError, AppError};

/// Hashes a plain-text password with a random salt.
///
/// # Returns
/// - `Ok(String)` - PHC string of the hash
/// - `Err(AppError::Internal(PasswordHash))` - Hashing failed
pub fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| InternalError::PasswordHash(e.to_string()))?;

    Ok(hash.to_string())
}

/// Checks a plain-text password against a stored hash.
///
/// # Arguments
/// - `user_id` - Owner of the hash, for error reporting
/// - `password` - Submitted password
/// - `stored_hash` - PHC string from the database
///
/// # Returns
/// - `Ok(true)` - Password matches
/// - `Ok(false)` - Password does not match
/// - `Err(AppError::Internal(MalformedPasswordHash))` - Stored hash cannot be parsed
pub fn verify_password(user_id: i32, password: &str, stored_hash: &str) -> Result<bool, AppError> {
    let parsed = PasswordHash::new(stored_hash).map_err(|e| InternalError::MalformedPasswordHash {
        user_id,
        reason: e.to_string(),
    })?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}
