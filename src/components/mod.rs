//! UI Components
//!
//! Reusable Leptos components.

mod task_item;
mod new_task_form;
mod task_list_view;
mod progress_bar;
mod theme_toggle;
mod bulk_actions;

pub use task_item::TaskItem;
pub use new_task_form::NewTaskForm;
pub use task_list_view::TaskListView;
pub use progress_bar::ProgressBar;
pub use theme_toggle::ThemeToggle;
pub use bulk_actions::BulkActions;
