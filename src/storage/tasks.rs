//! Task store
//!
//! Owns the in-memory task collection and tasks.txt. Like categories, tasks
//! use the full-rewrite persistence strategy with an atomic replace.

use std::path::PathBuf;

use crate::codec::Codec;
use crate::error::{VaultError, VaultResult};
use crate::models::{CategoryId, Task, TaskId, UserId};

use super::categories::CategoryStore;
use super::file_io::{read_lines, rewrite_lines};

/// Repository for tasks
#[derive(Debug)]
pub struct TaskStore {
    path: PathBuf,
    tasks: Vec<Task>,
    load_failed: bool,
}

impl TaskStore {
    /// Create an empty store backed by the given file
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            tasks: Vec::new(),
            load_failed: false,
        }
    }

    /// Load tasks from disk, in file order, skipping unreadable lines.
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

        self.tasks.clear();
        for line in lines {
            if line.trim().is_empty() {
                continue;
            }
            match Codec::Structured.decode::<Task>(&line) {
                Ok(task) => self.tasks.push(task),
                Err(e) => eprintln!("Skipping unreadable task record: {}", e),
            }
        }

        Ok(())
    }

    /// Create a task filed under one of the creator's own categories.
    ///
    /// The category must exist and belong to the creator; a category owned
    /// by someone else is indistinguishable from a missing one. The task's
    /// owner is fixed to the category's owner at creation. On persist
    /// failure the in-memory insert is rolled back.
    pub fn create(
        &mut self,
        title: &str,
        due_date: &str,
        category_id: CategoryId,
        creator: UserId,
        categories: &CategoryStore,
    ) -> VaultResult<Task> {
        if self.load_failed {
            return Err(VaultError::Storage(format!(
                "refusing to rewrite {}: the last load failed",
                self.path.display()
            )));
        }

        if title.is_empty() {
            return Err(VaultError::Validation("task title cannot be empty".into()));
        }
        if due_date.is_empty() {
            return Err(VaultError::Validation("due date cannot be empty".into()));
        }

        if categories.find_owned(category_id, creator).is_none() {
            return Err(VaultError::category_not_found(category_id.to_string()));
        }

        let id = TaskId::new(self.tasks.len() as u64 + 1);
        let task = Task::new(id, title, due_date, category_id, creator);

        self.tasks.push(task.clone());
        if let Err(e) = self.persist() {
            self.tasks.pop();
            return Err(e);
        }

        Ok(task)
    }

    /// All tasks owned by a user, in creation order
    pub fn owned_by(&self, owner: UserId) -> Vec<&Task> {
        self.tasks.iter().filter(|t| t.user_id == owner).collect()
    }

    /// All tasks, in creation order
    pub fn all(&self) -> &[Task] {
        &self.tasks
    }

    /// Number of tasks
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Whether the store is empty
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    fn persist(&self) -> VaultResult<()> {
        let lines = self
            .tasks
            .iter()
            .map(|t| Codec::Structured.encode(t))
            .collect::<VaultResult<Vec<_>>>()?;
        rewrite_lines(&self.path, &lines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::users::UserStore;
    use std::fs;
    use tempfile::TempDir;

    struct Fixture {
        _temp_dir: TempDir,
        users: UserStore,
        categories: CategoryStore,
        tasks: TaskStore,
    }

    fn fixture() -> Fixture {
        let temp_dir = TempDir::new().unwrap();
        let mut users = UserStore::new(temp_dir.path().join("users.txt"), Codec::Line);
        users.create("Amy", "a@x.com", "h1").unwrap();
        users.create("Ben", "b@x.com", "h2").unwrap();

        let mut categories = CategoryStore::new(temp_dir.path().join("categories.txt"));
        let amy = users.all()[0].id;
        categories.create("Chores", "green", amy, &users).unwrap();

        let tasks = TaskStore::new(temp_dir.path().join("tasks.txt"));
        Fixture {
            _temp_dir: temp_dir,
            users,
            categories,
            tasks,
        }
    }

    #[test]
    fn test_create_task_in_own_category() {
        let mut fx = fixture();
        let amy = fx.users.all()[0].id;

        let task = fx
            .tasks
            .create("Water plants", "2026-09-01", CategoryId::new(1), amy, &fx.categories)
            .unwrap();

        assert_eq!(task.id, TaskId::new(1));
        assert!(!task.is_done);
        assert_eq!(task.user_id, amy);
    }

    #[test]
    fn test_create_task_in_another_users_category_is_not_found() {
        let mut fx = fixture();
        let ben = fx.users.all()[1].id;

        let err = fx
            .tasks
            .create("Sneaky", "2026-09-01", CategoryId::new(1), ben, &fx.categories)
            .unwrap_err();

        assert!(err.is_not_found());
        assert!(fx.tasks.is_empty());
    }

    #[test]
    fn test_create_task_in_missing_category_is_not_found() {
        let mut fx = fixture();
        let amy = fx.users.all()[0].id;

        let err = fx
            .tasks
            .create("Lost", "2026-09-01", CategoryId::new(42), amy, &fx.categories)
            .unwrap_err();

        assert!(err.is_not_found());
    }

    #[test]
    fn test_failed_create_does_not_consume_an_identity() {
        let mut fx = fixture();
        let amy = fx.users.all()[0].id;

        fx.tasks
            .create("", "2026-09-01", CategoryId::new(1), amy, &fx.categories)
            .unwrap_err();
        fx.tasks
            .create("First", "2026-09-01", CategoryId::new(1), amy, &fx.categories)
            .unwrap();

        let second = fx
            .tasks
            .create("Second", "2026-09-02", CategoryId::new(1), amy, &fx.categories)
            .unwrap();
        assert_eq!(second.id, TaskId::new(2));
    }

    #[test]
    fn test_persist_failure_rolls_back_insert() {
        let mut fx = fixture();
        let amy = fx.users.all()[0].id;

        // A directory at the backing path makes the atomic rename fail
        let path = fx._temp_dir.path().join("tasks.txt");
        fs::create_dir(&path).unwrap();

        let err = fx
            .tasks
            .create("First", "2026-09-01", CategoryId::new(1), amy, &fx.categories)
            .unwrap_err();
        assert!(matches!(err, VaultError::Storage(_)));
        assert!(fx.tasks.is_empty());

        fs::remove_dir(&path).unwrap();
        let task = fx
            .tasks
            .create("First", "2026-09-01", CategoryId::new(1), amy, &fx.categories)
            .unwrap();
        assert_eq!(task.id, TaskId::new(1));
        assert_eq!(fx.tasks.len(), 1);
    }

    #[test]
    fn test_save_and_reload() {
        let mut fx = fixture();
        let amy = fx.users.all()[0].id;
        fx.tasks
            .create("Water plants", "2026-09-01", CategoryId::new(1), amy, &fx.categories)
            .unwrap();

        let mut reloaded = TaskStore::new(fx._temp_dir.path().join("tasks.txt"));
        reloaded.load().unwrap();

        assert_eq!(reloaded.all(), fx.tasks.all());
    }

    #[test]
    fn test_owned_by_filters_other_users() {
        let mut fx = fixture();
        let amy = fx.users.all()[0].id;
        let ben = fx.users.all()[1].id;

        fx.categories.create("Errands", "red", ben, &fx.users).unwrap();
        fx.tasks
            .create("Amy task", "2026-09-01", CategoryId::new(1), amy, &fx.categories)
            .unwrap();
        fx.tasks
            .create("Ben task", "2026-09-01", CategoryId::new(2), ben, &fx.categories)
            .unwrap();

        let amys = fx.tasks.owned_by(amy);
        assert_eq!(amys.len(), 1);
        assert_eq!(amys[0].title, "Amy task");
    }

    #[test]
    fn test_load_skips_malformed_lines() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("tasks.txt");
        fs::write(
            &path,
            "{\"id\":1,\"title\":\"ok\",\"due_date\":\"d\",\"category_id\":1,\"is_done\":false,\"user_id\":1}\n{broken\n",
        )
        .unwrap();

        let mut store = TaskStore::new(path);
        store.load().unwrap();

        assert_eq!(store.len(), 1);
        assert_eq!(store.all()[0].title, "ok");
    }
}
