//! User account model
//!
//! A user owns categories and tasks. The credential hash is an opaque PHC
//! string; the plaintext password is never stored and the hash is never
//! included in display output.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::UserId;

/// A registered user account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier, assigned at registration
    pub id: UserId,

    /// Display name
    pub name: String,

    /// Email address, unique across all users (case-sensitive as entered)
    pub email: String,

    /// Salted one-way hash of the password
    pub hashed_password: String,
}

impl User {
    /// Create a new user record
    pub fn new(
        id: UserId,
        name: impl Into<String>,
        email: impl Into<String>,
        hashed_password: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            hashed_password: hashed_password.into(),
        }
    }
}

impl fmt::Display for User {
    // Never includes the credential hash
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "User: ID={}, Name={}, Email={}", self.id, self.name, self.email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user() {
        let user = User::new(UserId::new(1), "Amy", "a@x.com", "h1");
        assert_eq!(user.id, UserId::new(1));
        assert_eq!(user.name, "Amy");
        assert_eq!(user.email, "a@x.com");
        assert_eq!(user.hashed_password, "h1");
    }

    #[test]
    fn test_display_omits_hash() {
        let user = User::new(UserId::new(2), "Ben", "b@x.com", "$argon2id$secret");
        let shown = user.to_string();
        assert_eq!(shown, "User: ID=2, Name=Ben, Email=b@x.com");
        assert!(!shown.contains("argon2id"));
    }

    #[test]
    fn test_serialization_round_trip() {
        let user = User::new(UserId::new(3), "Cam", "c@x.com", "h3");
        let json = serde_json::to_string(&user).unwrap();
        let back: User = serde_json::from_str(&json).unwrap();
        assert_eq!(user, back);
    }
}
