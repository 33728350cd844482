//! Password rules and Argon2id hashing.
//!
//! Hashes are PHC strings, so the algorithm parameters and salt travel with
//! the hash and `verify_password` needs nothing else.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;
use fitclass_core::error::CoreError;

use crate::error::AppError;

/// Minimum length for a new password.
pub const MIN_PASSWORD_LEN: usize = 8;
/// Upper bound on accepted input. Argon2 itself takes any length.
pub const MAX_PASSWORD_LEN: usize = 256;

/// Reject a new password that is too short or too long.
pub fn check_new_password(password: &str) -> Result<(), CoreError> {
    let len = password.chars().count();
    if len < MIN_PASSWORD_LEN {
        return Err(CoreError::Validation(format!(
            "password must be at least {MIN_PASSWORD_LEN} characters long"
        )));
    }
    if len > MAX_PASSWORD_LEN {
        return Err(CoreError::Validation(format!(
            "password exceeds maximum length of {MAX_PASSWORD_LEN} characters"
        )));
    }
    Ok(())
}

/// Hash `password` with Argon2id and a fresh random salt.
pub fn hash_password(password: &str) -> Result<String, argon2::password_hash::Error> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
}

/// Hash on the blocking pool so a slow Argon2 run never stalls the runtime.
pub async fn hash_password_blocking(password: String) -> Result<String, AppError> {
    tokio::task::spawn_blocking(move || hash_password(&password))
        .await
        .map_err(|e| AppError::InternalError(format!("Password hashing task failed: {e}")))?
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))
}

/// Check `password` against a stored PHC hash. A mismatch is `Ok(false)`;
/// only a malformed hash is an error.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, argon2::password_hash::Error> {
    let parsed = PasswordHash::new(hash)?;
    match Argon2::default().verify_password(password.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(e),
    }
}
