//! New Task Form Component
//!
//! Text input plus Add button; Enter submits too.

use leptos::prelude::*;

use crate::context::use_app_context;

/// Form for appending a task to the end of the list
#[component]
pub fn NewTaskForm() -> impl IntoView {
    let ctx = use_app_context();

    let (new_text, set_new_text) = signal(String::new());

    let add_task = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let text = new_text.get_untracked();
        if ctx.add_task(&text) {
            set_new_text.set(String::new());
        }
    };

    view! {
        <form class="new-task-form" on:submit=add_task>
            <input
                id="task-input"
                type="text"
                placeholder="Add a new task..."
                autocomplete="off"
                prop:value=move || new_text.get()
                on:input=move |ev| set_new_text.set(event_target_value(&ev))
            />
            <button id="add-task-button" type="submit">"Add"</button>
        </form>
    }
}
