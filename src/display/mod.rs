//! Terminal output formatting
//!
//! Pure functions that render collections as strings; the shell decides
//! where they go. Password hashes never appear in any output here.

use tabled::{Table, Tabled};

use crate::models::Task;
use crate::storage::CategoryStore;

#[derive(Tabled)]
struct TaskRow {
    #[tabled(rename = "ID")]
    id: u64,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Due")]
    due: String,
    #[tabled(rename = "Done")]
    done: bool,
}

/// Format a user's tasks as a table, resolving category titles.
///
/// A task whose category id no longer resolves renders as `Unknown`.
pub fn format_task_table(tasks: &[&Task], categories: &CategoryStore) -> String {
    if tasks.is_empty() {
        return "No tasks found".to_string();
    }

    let rows: Vec<TaskRow> = tasks
        .iter()
        .map(|task| TaskRow {
            id: task.id.value(),
            title: task.title.clone(),
            category: categories
                .get(task.category_id)
                .map(|c| c.title.clone())
                .unwrap_or_else(|| "Unknown".to_string()),
            due: task.due_date.clone(),
            done: task.is_done,
        })
        .collect();

    Table::new(rows).to_string()
}
