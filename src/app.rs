//! To-Do Frontend App
//!
//! Main application component: loads persisted state once, provides it via
//! context and lays out the page.

use leptos::prelude::*;
use reactive_stores::Store;
use todo_core::{Theme, TodoController};

use crate::components::{BulkActions, NewTaskForm, ProgressBar, TaskListView, ThemeToggle};
use crate::context::AppContext;
use crate::storage::BrowserStorage;
use crate::store::{AppState, AppStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    let controller = TodoController::load(BrowserStorage);
    tracing::info!(
        tasks = controller.tasks().len(),
        theme = controller.theme().as_str(),
        "loaded persisted state"
    );

    let store = Store::new(AppState::new(controller.view(), controller.theme()));

    // Provide context to all children
    provide_context(store);
    provide_context(AppContext::new(controller, store));

    // Keep <body class="dark"> in sync with the theme
    Effect::new(move |_| apply_theme(store.theme().get()));

    view! {
        <div class="container">
            <header class="app-header">
                <h1>"To-Do List"</h1>
                <ThemeToggle />
            </header>

            <NewTaskForm />
            <ProgressBar />
            <TaskListView />
            <BulkActions />
        </div>
    }
}

fn apply_theme(theme: Theme) {
    if let Some(body) = document().body() {
        if let Err(err) = body.class_list().toggle_with_force("dark", theme.is_dark()) {
            tracing::warn!(?err, "failed to apply theme class");
        }
    }
}
