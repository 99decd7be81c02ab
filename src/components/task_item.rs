//! Task Item Component
//!
//! A single row in the task list.

use leptos::prelude::*;
use leptos_dragdrop::{make_on_mousedown, DndSignals};
use todo_core::{TaskId, TaskRow};

use crate::context::use_app_context;

/// A single draggable task row
#[component]
pub fn TaskItem(
    row: TaskRow,
    dnd: DndSignals<TaskId>,
) -> impl IntoView {
    let ctx = use_app_context();

    let id = row.id;
    let index = row.index;
    let completed = row.completed;
    let on_mousedown = make_on_mousedown(dnd, id);

    let item_class = move || row_class(completed, dnd.dragging_id_read.get() == Some(id));

    // The browser flips the box before we know whether the toggle stuck;
    // a rejected toggle leaves the row key unchanged, so write it back here
    let on_toggle = move |ev: web_sys::Event| {
        let outcome = ctx.toggle_completion(id);
        event_target::<web_sys::HtmlInputElement>(&ev).set_checked(checked_after_toggle(outcome, completed));
    };

    view! {
        <li
            class=item_class
            data-index=index
            data-id=id.to_string()
            on:mousedown=on_mousedown
        >
            <div class="task-body">
                <input
                    type="checkbox"
                    data-index=index
                    checked=completed
                    on:change=on_toggle
                />
                <span class="task-text">{row.description}</span>
            </div>
            <button
                class="delete-btn"
                data-index=index
                title="Delete"
                on:click=move |_| ctx.delete_task(id)
            >
                "🗑️"
            </button>
        </li>
    }
}

fn row_class(completed: bool, dragging: bool) -> String {
    let mut c = String::from("task-item");
    if completed { c.push_str(" completed"); }
    if dragging { c.push_str(" dragging"); }
    c
}

/// Checkbox state to show after a toggle: the new flag, or the rendered one
/// when the toggle was rejected
fn checked_after_toggle(outcome: Option<bool>, rendered: bool) -> bool {
    outcome.unwrap_or(rendered)
}
