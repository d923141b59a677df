//! Password hashing and verification using Argon2id
//!
//! Hashes are PHC strings with a fresh random salt per call, so hashing the
//! same plaintext twice yields different outputs. Verification is the
//! constant-time comparison provided by the argon2 crate; a wrong password is
//! a `false`, not an error.

use argon2::{
    password_hash::{
        rand_core::OsRng, Error as PasswordHashError, PasswordHash, PasswordHasher,
        PasswordVerifier, SaltString,
    },
    Argon2,
};

use crate::error::{VaultError, VaultResult};

/// Hash a plaintext password into a PHC string
pub fn hash_password(plaintext: &str) -> VaultResult<String> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(plaintext.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| VaultError::Hashing(e.to_string()))
}

/// Verify a plaintext password against a stored PHC hash.
///
/// Returns `Ok(false)` on mismatch. Errors only when the stored hash is not
/// a structurally valid PHC string.
pub fn verify_password(hash: &str, plaintext: &str) -> VaultResult<bool> {
    let parsed =
        PasswordHash::new(hash).map_err(|e| VaultError::CorruptCredential(e.to_string()))?;

    match Argon2::default().verify_password(plaintext.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(PasswordHashError::Password) => Ok(false),
        Err(e) => Err(VaultError::CorruptCredential(e.to_string())),
    }
}
