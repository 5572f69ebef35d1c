//! Admin password hashing.
//!
//! Hashes are Argon2id PHC strings, so the salt and cost parameters are
//! stored alongside the digest.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{self, PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;

pub fn hash_password(plain: &str) -> Result<String, password_hash::Error> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(plain.as_bytes(), &salt)
        .map(|hash| hash.to_string())
}

/// `Ok(false)` means the password did not match; `Err` means `stored` is
/// not a readable PHC string.
pub fn verify_password(plain: &str, stored: &str) -> Result<bool, password_hash::Error> {
    let parsed = PasswordHash::new(stored)?;
    match Argon2::default().verify_password(plain.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(password_hash::Error::Password) => Ok(false),
        Err(other) => Err(other),
    }
}

/// Length is counted in characters, not bytes.
pub fn validate_password_strength(plain: &str, min_length: usize) -> Result<(), String> {
    if plain.chars().count() >= min_length {
        Ok(())
    } else {
        Err(format!("password: must be at least {min_length} characters long"))
    }
}
