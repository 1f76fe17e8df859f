use std::collections::HashMap;
use std::fmt::Write;

use todolist_core::{Category, Status, Todo};
use todolist_store::CategoriesState;

/// `statuses` maps a category id to the statuses looked up for it.
pub fn format_todos(
    todos: &[&Todo],
    categories: &CategoriesState,
    statuses: &HashMap<i64, Vec<Status>>,
) -> String {
    if todos.is_empty() {
        return "No todos.\n".to_string();
    }
    let mut out = format!("{:<6} {:<40} {:<20} {}\n", "ID", "TITLE", "CATEGORY", "STATUS");
    for todo in todos {
        let category = categories.title_of(todo.category_id).unwrap_or("-");
        let status = statuses
            .get(&todo.category_id)
            .and_then(|list| list.iter().find(|s| s.id == todo.status_id))
            .map(|s| format!("{} ({})", s.title, s.color))
            .unwrap_or_else(|| "-".to_string());
        let _ = writeln!(
            out,
            "{:<6} {:<40} {:<20} {}",
            todo.id, todo.title, category, status
        );
    }
    out
}

pub fn format_categories(categories: &[Category]) -> String {
    if categories.is_empty() {
        return "No categories.\n".to_string();
    }
    let mut out = format!("{:<6} {:<30} {}\n", "ID", "TITLE", "UPDATED");
    for category in categories {
        let _ = writeln!(
            out,
            "{:<6} {:<30} {}",
            category.id,
            category.title,
            category.updated_at.format("%Y-%m-%d %H:%M")
        );
    }
    out
}

pub fn format_statuses(statuses: &[Status]) -> String {
    if statuses.is_empty() {
        return "No statuses.\n".to_string();
    }
    let mut out = format!("{:<6} {:<30} {}\n", "ID", "TITLE", "COLOR");
    for status in statuses {
        let _ = writeln!(out, "{:<6} {:<30} {}", status.id, status.title, status.color);
    }
    out
}
