//! Application Context
//!
//! Shared state provided via Leptos Context API. Owns the controller and
//! funnels every user action through it, then re-renders from its state.

use leptos::prelude::*;
use todo_core::{DomainResult, TaskId, Theme, TodoController};

use crate::storage::BrowserStorage;
use crate::store::{store_refresh, AppStore};

pub type Controller = TodoController<BrowserStorage>;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    controller: StoredValue<Controller>,
    store: AppStore,
}

impl AppContext {
    pub fn new(controller: Controller, store: AppStore) -> Self {
        Self {
            controller: StoredValue::new(controller),
            store,
        }
    }

    /// Run an action against the controller and refresh the rendered state.
    /// Failures are logged and otherwise absorbed.
    fn dispatch<T>(&self, action: &'static str, op: impl FnOnce(&mut Controller) -> DomainResult<T>) -> Option<T> {
        let result = self.controller.try_update_value(op)?;
        let out = match result {
            Ok(out) => Some(out),
            Err(err) => {
                tracing::warn!(action, error = %err, "action failed");
                None
            }
        };
        self.refresh();
        out
    }

    /// Re-project the controller into the store
    pub fn refresh(&self) {
        if let Some((view, theme)) = self.controller.try_with_value(|ctrl| (ctrl.view(), ctrl.theme())) {
            store_refresh(&self.store, view, theme);
        }
    }

    /// Returns true if a task was added (blank input is ignored)
    pub fn add_task(&self, description: &str) -> bool {
        self.dispatch("add_task", |ctrl| ctrl.add_task(description))
            .flatten()
            .is_some()
    }

    /// New completion flag, or `None` if the toggle was rejected
    pub fn toggle_completion(&self, id: TaskId) -> Option<bool> {
        self.dispatch("toggle_completion", |ctrl| ctrl.toggle_completion(id))
    }

    pub fn delete_task(&self, id: TaskId) {
        self.dispatch("delete_task", |ctrl| ctrl.delete_task(id));
    }

    pub fn mark_all_completed(&self) {
        self.dispatch("mark_all_completed", |ctrl| ctrl.mark_all_completed());
    }

    pub fn unmark_all_completed(&self) {
        self.dispatch("unmark_all_completed", |ctrl| ctrl.unmark_all_completed());
    }

    pub fn delete_all(&self) {
        self.dispatch("delete_all", |ctrl| ctrl.delete_all());
    }

    pub fn reorder(&self, order: Vec<TaskId>) {
        self.dispatch("reorder", |ctrl| ctrl.reorder(&order));
    }

    pub fn toggle_theme(&self) -> Option<Theme> {
        self.dispatch("toggle_theme", |ctrl| ctrl.toggle_theme())
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
