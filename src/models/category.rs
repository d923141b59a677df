//! Task category model

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{CategoryId, UserId};

/// A category a user files tasks under
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Unique identifier, assigned at creation
    pub id: CategoryId,

    /// Category title
    pub title: String,

    /// Display color (free-form string)
    pub color: String,

    /// The user that owns this category
    pub user_id: UserId,
}

impl Category {
    /// Create a new category record
    pub fn new(
        id: CategoryId,
        title: impl Into<String>,
        color: impl Into<String>,
        user_id: UserId,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            color: color.into(),
            user_id,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.title, self.color)
    }
}
