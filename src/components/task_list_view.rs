//! Task List View Component
//!
//! Displays the task rows with drag-and-drop reordering.
//! Uses leptos-dragdrop: the row order shown while dragging is a preview,
//! committed to the controller on release.

use leptos::html::Ul;
use leptos::prelude::*;
use leptos_dragdrop::*;
use todo_core::TaskId;

use crate::components::TaskItem;
use crate::context::use_app_context;
use crate::store::{rows_in_display_order, use_app_store, AppStateStoreFields};

/// Task list with DnD support
#[component]
pub fn TaskListView() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let dnd = create_dnd_signals::<TaskId>();
    let list_ref = NodeRef::<Ul>::new();

    bind_global_handlers(
        dnd,
        move || {
            list_ref
                .get_untracked()
                .map(|list| measure_rows::<TaskId>(&list, "data-id"))
                .unwrap_or_default()
        },
        move |order| {
            tracing::debug!(?order, "drop");
            ctx.reorder(order);
        },
    );

    let display_rows = move || {
        let rows = store.rows().get();
        let preview = dnd.preview_read.get();
        rows_in_display_order(&rows, preview.as_deref())
    };

    view! {
        <ul id="task-list" class="task-list" node_ref=list_ref>
            <For
                each=display_rows
                key=|row| (row.id, row.index, row.description.clone(), row.completed)
                children=move |row| view! { <TaskItem row=row dnd=dnd /> }
            />
        </ul>
    }
}
