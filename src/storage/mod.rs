//! Storage layer for TaskVault
//!
//! One store per entity kind, each owning its in-memory collection and its
//! backing line file. Users append; tasks and categories rewrite.

pub mod categories;
pub mod file_io;
pub mod tasks;
pub mod users;

pub use categories::CategoryStore;
pub use tasks::TaskStore;
pub use users::UserStore;

use crate::codec::Codec;
use crate::config::{SerializationMode, VaultPaths};
use crate::error::{VaultError, VaultResult};

/// Main storage coordinator that owns all three stores
pub struct Storage {
    paths: VaultPaths,
    pub users: UserStore,
    pub categories: CategoryStore,
    pub tasks: TaskStore,
}

impl Storage {
    /// Create a new Storage instance.
    ///
    /// The serialization mode only affects the users file; tasks and
    /// categories are always structured records.
    pub fn new(paths: VaultPaths, mode: SerializationMode) -> Self {
        Self {
            users: UserStore::new(paths.users_file(), Codec::for_mode(mode)),
            categories: CategoryStore::new(paths.categories_file()),
            tasks: TaskStore::new(paths.tasks_file()),
            paths,
        }
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &VaultPaths {
        &self.paths
    }

    /// Load all collections from disk.
    ///
    /// Each store loads independently; one unreadable file does not stop
    /// the others from loading. The returned error names every store that
    /// failed. A failed store comes up empty and refuses writes until a
    /// later load succeeds.
    pub fn load_all(&mut self) -> VaultResult<()> {
        let mut failures = Vec::new();

        for result in [
            self.users.load(),
            self.categories.load(),
            self.tasks.load(),
        ] {
            if let Err(e) = result {
                failures.push(e.to_string());
            }
        }

        if failures.is_empty() {
            Ok(())
        } else {
            Err(VaultError::Storage(failures.join("; ")))
        }
    }
}
