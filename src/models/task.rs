//! Task model

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{CategoryId, TaskId, UserId};

/// A single task, filed under a category owned by the same user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier, assigned at creation
    pub id: TaskId,

    /// Task title
    pub title: String,

    /// Due date (free-form string, not validated as a calendar date)
    pub due_date: String,

    /// The category this task is filed under
    pub category_id: CategoryId,

    /// Completion flag; starts false, no operation currently flips it
    #[serde(default)]
    pub is_done: bool,

    /// Owner, a denormalized copy of the category's owner at creation time
    pub user_id: UserId,
}

impl Task {
    /// Create a new task record (not yet done)
    pub fn new(
        id: TaskId,
        title: impl Into<String>,
        due_date: impl Into<String>,
        category_id: CategoryId,
        user_id: UserId,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            due_date: due_date.into(),
            category_id,
            is_done: false,
            user_id,
        }
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {}, Title: {}, Due: {}, Done: {}",
            self.id, self.title, self.due_date, self.is_done
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_task_is_not_done() {
        let task = Task::new(
            TaskId::new(1),
            "Water plants",
            "2026-09-01",
            CategoryId::new(2),
            UserId::new(3),
        );
        assert!(!task.is_done);
        assert_eq!(task.category_id, CategoryId::new(2));
        assert_eq!(task.user_id, UserId::new(3));
    }

    #[test]
    fn test_is_done_defaults_false_when_absent() {
        let json = r#"{"id":1,"title":"t","due_date":"d","category_id":1,"user_id":1}"#;
        let task: Task = serde_json::from_str(json).unwrap();
        assert!(!task.is_done);
    }

    #[test]
    fn test_serialization_round_trip() {
        let task = Task::new(
            TaskId::new(4),
            "File report",
            "2026-10-15",
            CategoryId::new(1),
            UserId::new(1),
        );
        let json = serde_json::to_string(&task).unwrap();
        let back: Task = serde_json::from_str(&json).unwrap();
        assert_eq!(task, back);
    }
}
