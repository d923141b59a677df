//! User store
//!
//! Owns the in-memory user collection and users.txt. The users file is
//! append-only: each successful registration encodes one line and appends
//! it, and prior entries (password hashes included) are never rewritten.

use std::path::PathBuf;

use crate::codec::Codec;
use crate::error::{VaultError, VaultResult};
use crate::models::{User, UserId};

use super::file_io::{append_line, read_lines};

/// Repository for user accounts
#[derive(Debug)]
pub struct UserStore {
    path: PathBuf,
    codec: Codec,
    users: Vec<User>,
    load_failed: bool,
}

impl UserStore {
    /// Create an empty store backed by the given file
    pub fn new(path: PathBuf, codec: Codec) -> Self {
        Self {
            path,
            codec,
            users: Vec::new(),
            load_failed: false,
        }
    }

    /// Load users from disk, in file order.
    ///
    /// Blank lines are skipped. A line that fails to decode is reported and
    /// skipped; it never aborts the rest of the load. A failed read marks
    /// the store degraded: `create` refuses to write until a later load
    /// succeeds, so an unread file is never extended with colliding ids.
    pub fn load(&mut self) -> VaultResult<()> {
        let lines = match read_lines(&self.path) {
            Ok(lines) => lines,
            Err(e) => {
                self.load_failed = true;
                return Err(e);
            }
        };
        self.load_failed = false;

        self.users.clear();
        for line in lines {
            if line.trim().is_empty() {
                continue;
            }
            match self.codec.decode::<User>(&line) {
                Ok(user) => self.users.push(user),
                Err(e) => eprintln!("Skipping unreadable user record: {}", e),
            }
        }

        Ok(())
    }

    /// Register a user.
    ///
    /// Assigns the next identity, enforces email uniqueness, appends the
    /// encoded record to the file, and only then admits the user to the
    /// in-memory collection; a failed persist leaves both sides unchanged.
    pub fn create(
        &mut self,
        name: &str,
        email: &str,
        hashed_password: &str,
    ) -> VaultResult<User> {
        if self.load_failed {
            return Err(VaultError::Storage(format!(
                "refusing to write {}: the last load failed",
                self.path.display()
            )));
        }

        if name.is_empty() {
            return Err(VaultError::Validation("name cannot be empty".into()));
        }
        if email.is_empty() {
            return Err(VaultError::Validation("email cannot be empty".into()));
        }
        if hashed_password.is_empty() {
            return Err(VaultError::Validation(
                "credential hash cannot be empty".into(),
            ));
        }

        if self.find_by_email(email).is_some() {
            return Err(VaultError::duplicate_email(email));
        }

        let id = UserId::new(self.users.len() as u64 + 1);
        let user = User::new(id, name, email, hashed_password);

        let encoded = self.codec.encode(&user)?;
        append_line(&self.path, &encoded)?;

        self.users.push(user.clone());
        Ok(user)
    }

    /// Look up a user by email (case-sensitive)
    pub fn find_by_email(&self, email: &str) -> Option<&User> {
        self.users.iter().find(|u| u.email == email)
    }

    /// Look up a user by id
    pub fn get(&self, id: UserId) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    /// All users, in creation order
    pub fn all(&self) -> &[User] {
        &self.users
    }

    /// Number of registered users
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// Whether the store is empty
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}
