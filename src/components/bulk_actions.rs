//! Bulk Actions Component
//!
//! Whole-list operations: mark all, delete all, unmark all.

use leptos::prelude::*;

use crate::context::use_app_context;

#[component]
pub fn BulkActions() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div class="bulk-actions">
            <button id="mark-all-completed" on:click=move |_| ctx.mark_all_completed()>
                "Mark All Completed"
            </button>
            <button id="delete-all-tasks" on:click=move |_| ctx.delete_all()>
                "Delete All"
            </button>
            <button id="unmark-all-completed" on:click=move |_| ctx.unmark_all_completed()>
                "Unmark All"
            </button>
        </div>
    }
}
