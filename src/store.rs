//! Rendered State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Holds the latest
//! projection of the controller; it is replaced wholesale after every action.

use leptos::prelude::*;
use reactive_stores::Store;
use todo_core::{ListView, Progress, TaskId, TaskRow, Theme};

/// What the UI renders
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Rows in committed order
    pub rows: Vec<TaskRow>,
    /// Completion summary
    pub progress: Progress,
    /// Current display mode
    pub theme: Theme,
}

impl AppState {
    pub fn new(view: ListView, theme: Theme) -> Self {
        Self {
            rows: view.rows,
            progress: view.progress,
            theme,
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

/// Replace the rendered state with a fresh projection
pub fn store_refresh(store: &AppStore, view: ListView, theme: Theme) {
    *store.rows().write() = view.rows;
    *store.progress().write() = view.progress;
    *store.theme().write() = theme;
}

/// Rows as they should appear on screen: the committed order, or the drag
/// preview order while a drag is in progress
pub fn rows_in_display_order(rows: &[TaskRow], preview: Option<&[TaskId]>) -> Vec<TaskRow> {
    match preview {
        Some(order) => order
            .iter()
            .filter_map(|id| rows.iter().find(|row| row.id == *id).cloned())
            .collect(),
        None => rows.to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_row(index: usize, id: u32, description: &str) -> TaskRow {
        TaskRow {
            index,
            id: TaskId(id),
            description: description.to_string(),
            completed: false,
        }
    }

    #[test]
    fn test_display_order_without_preview() {
        let rows = vec![make_row(0, 10, "A"), make_row(1, 11, "B")];
        assert_eq!(rows_in_display_order(&rows, None), rows);
    }

    #[test]
    fn test_display_order_follows_preview() {
        let rows = vec![make_row(0, 10, "A"), make_row(1, 11, "B"), make_row(2, 12, "C")];
        let preview = [TaskId(12), TaskId(10), TaskId(11)];

        let shown = rows_in_display_order(&rows, Some(&preview));
        let labels: Vec<&str> = shown.iter().map(|r| r.description.as_str()).collect();
        assert_eq!(labels, vec!["C", "A", "B"]);
        // Rows keep the position they had when the drag started
        assert_eq!(shown[0].index, 2);
    }

    #[test]
    fn test_display_order_drops_unknown_ids() {
        let rows = vec![make_row(0, 10, "A")];
        let preview = [TaskId(99), TaskId(10)];
        assert_eq!(rows_in_display_order(&rows, Some(&preview)).len(), 1);
    }
}
