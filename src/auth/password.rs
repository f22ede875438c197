//! bcrypt password hashes in the modular crypt format (`$2b$<cost>$...`).
//!
//! `$2a$` and `$2y$` hashes from other bcrypt implementations verify too.

use super::AuthError;

/// Work factor for new hashes.
pub const DEFAULT_COST: u32 = 10;

/// Hash a password with a fresh random salt.
pub fn hash(password: &str, cost: u32) -> Result<String, AuthError> {
    bcrypt::hash(password, cost).map_err(|e| AuthError::Hashing(e.to_string()))
}

/// Check `password` against a stored hash. Malformed hashes never match.
pub fn verify(password: &str, encoded: &str) -> bool {
    bcrypt::verify(password, encoded).unwrap_or(false)
}
