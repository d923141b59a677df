//! Category store
//!
//! Owns the in-memory category collection and categories.txt. Categories are
//! low-volume, so every mutation re-encodes the whole collection and
//! rewrites the file atomically.

use std::path::PathBuf;

use crate::codec::Codec;
use crate::error::{VaultError, VaultResult};
use crate::models::{Category, CategoryId, UserId};

use super::file_io::{read_lines, rewrite_lines};
use super::users::UserStore;

/// Repository for task categories
#[derive(Debug)]
pub struct CategoryStore {
    path: PathBuf,
    categories: Vec<Category>,
    load_failed: bool,
}

impl CategoryStore {
    /// Create an empty store backed by the given file
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            categories: Vec::new(),
            load_failed: false,
        }
    }

    /// Load categories from disk, in file order, skipping unreadable lines.
    ///
    /// A failed read marks the store degraded: `create` refuses to write
    /// until a later load succeeds, since a full rewrite from an empty
    /// collection would discard every record still on disk.
    pub fn load(&mut self) -> VaultResult<()> {
        let lines = match read_lines(&self.path) {
            Ok(lines) => lines,
            Err(e) => {
                self.load_failed = true;
                return Err(e);
            }
        };
        self.load_failed = false;

        self.categories.clear();
        for line in lines {
            if line.trim().is_empty() {
                continue;
            }
            match Codec::Structured.decode::<Category>(&line) {
                Ok(category) => self.categories.push(category),
                Err(e) => eprintln!("Skipping unreadable category record: {}", e),
            }
        }

        Ok(())
    }

    /// Create a category owned by an existing user.
    ///
    /// The owner must be present in the user store. On persist failure the
    /// in-memory insert is rolled back, so a failed create consumes no
    /// identity.
    pub fn create(
        &mut self,
        title: &str,
        color: &str,
        owner: UserId,
        users: &UserStore,
    ) -> VaultResult<Category> {
        if self.load_failed {
            return Err(VaultError::Storage(format!(
                "refusing to rewrite {}: the last load failed",
                self.path.display()
            )));
        }

        if title.is_empty() {
            return Err(VaultError::Validation("category title cannot be empty".into()));
        }
        if color.is_empty() {
            return Err(VaultError::Validation("category color cannot be empty".into()));
        }

        if users.get(owner).is_none() {
            return Err(VaultError::user_not_found(owner.to_string()));
        }

        let id = CategoryId::new(self.categories.len() as u64 + 1);
        let category = Category::new(id, title, color, owner);

        self.categories.push(category.clone());
        if let Err(e) = self.persist() {
            self.categories.pop();
            return Err(e);
        }

        Ok(category)
    }

    /// Look up a category by id
    pub fn get(&self, id: CategoryId) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// Look up a category by id, but only if the given user owns it
    pub fn find_owned(&self, id: CategoryId, owner: UserId) -> Option<&Category> {
        self.categories
            .iter()
            .find(|c| c.id == id && c.user_id == owner)
    }

    /// All categories owned by a user, in creation order
    pub fn owned_by(&self, owner: UserId) -> Vec<&Category> {
        self.categories
            .iter()
            .filter(|c| c.user_id == owner)
            .collect()
    }

    /// All categories, in creation order
    pub fn all(&self) -> &[Category] {
        &self.categories
    }

    /// Number of categories
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// Whether the store is empty
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    fn persist(&self) -> VaultResult<()> {
        let lines = self
            .categories
            .iter()
            .map(|c| Codec::Structured.encode(c))
            .collect::<VaultResult<Vec<_>>>()?;
        rewrite_lines(&self.path, &lines)
    }
}
