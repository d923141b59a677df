//! The single-slot authentication session
//!
//! At most one identity is signed in per process. The session owns a copy of
//! the matched user record; it never holds a reference into a store's
//! collection.

use crate::auth::password::verify_password;
use crate::error::{VaultError, VaultResult};
use crate::models::User;
use crate::storage::UserStore;

/// Tracks the currently authenticated user, if any
#[derive(Debug, Default)]
pub struct Session {
    current: Option<User>,
}

impl Session {
    /// Create an empty session
    pub fn new() -> Self {
        Self::default()
    }

    /// Authenticate against the user store.
    ///
    /// On success the matched user is copied into the session and returned.
    /// A missing email and a wrong password both surface as `AuthFailed`;
    /// callers cannot tell which factor failed. A structurally corrupt
    /// stored hash propagates as `CorruptCredential`.
    pub fn authenticate(
        &mut self,
        users: &UserStore,
        email: &str,
        plaintext: &str,
    ) -> VaultResult<User> {
        let user = users.find_by_email(email).ok_or(VaultError::AuthFailed)?;

        if !verify_password(&user.hashed_password, plaintext)? {
            return Err(VaultError::AuthFailed);
        }

        let user = user.clone();
        self.current = Some(user.clone());
        Ok(user)
    }

    /// The signed-in user, or `NotAuthenticated`
    pub fn current(&self) -> VaultResult<&User> {
        self.current.as_ref().ok_or(VaultError::NotAuthenticated)
    }

    /// Whether anyone is signed in
    pub fn is_authenticated(&self) -> bool {
        self.current.is_some()
    }

    /// Drop the held identity
    pub fn clear(&mut self) {
        self.current = None;
    }
}
