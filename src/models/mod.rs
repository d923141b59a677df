//! Core data models (users, categories, tasks)

pub mod category;
pub mod ids;
pub mod task;
pub mod user;

pub use category::Category;
pub use ids::{CategoryId, TaskId, UserId};
pub use task::Task;
pub use user::User;
