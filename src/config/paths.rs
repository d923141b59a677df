//! Path management for TaskVault
//!
//! The backing files live next to the process by default, matching the
//! flat-file layout users already have on disk.
//!
//! ## Path Resolution Order
//!
//! 1. `TASKVAULT_DATA_DIR` environment variable (if set)
//! 2. The current working directory

use std::path::PathBuf;

/// Manages all paths used by TaskVault
#[derive(Debug, Clone)]
pub struct VaultPaths {
    /// Base directory for all TaskVault data
    base_dir: PathBuf,
}

impl VaultPaths {
    /// Create a new VaultPaths instance
    ///
    /// Path resolution:
    /// 1. `TASKVAULT_DATA_DIR` env var (explicit override)
    /// 2. The current working directory
    pub fn new() -> Self {
        let base_dir = if let Ok(custom) = std::env::var("TASKVAULT_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            PathBuf::from(".")
        };

        Self { base_dir }
    }

    /// Create VaultPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to users.txt
    pub fn users_file(&self) -> PathBuf {
        self.base_dir.join("users.txt")
    }

    /// Get the path to tasks.txt
    pub fn tasks_file(&self) -> PathBuf {
        self.base_dir.join("tasks.txt")
    }

    /// Get the path to categories.txt
    pub fn categories_file(&self) -> PathBuf {
        self.base_dir.join("categories.txt")
    }
}

impl Default for VaultPaths {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_base_dir() {
        let paths = VaultPaths::with_base_dir(PathBuf::from("/tmp/vault-test"));
        assert_eq!(paths.users_file(), PathBuf::from("/tmp/vault-test/users.txt"));
        assert_eq!(paths.tasks_file(), PathBuf::from("/tmp/vault-test/tasks.txt"));
        assert_eq!(
            paths.categories_file(),
            PathBuf::from("/tmp/vault-test/categories.txt")
        );
    }

    #[test]
    fn test_file_names() {
        let paths = VaultPaths::with_base_dir(PathBuf::from("."));
        assert_eq!(paths.users_file().file_name().unwrap(), "users.txt");
        assert_eq!(paths.categories_file().file_name().unwrap(), "categories.txt");
    }
}
