//! Progress Bar Component

use leptos::prelude::*;

use crate::store::{use_app_store, AppStateStoreFields};

/// Completion bar plus "NN% Completed" label
#[component]
pub fn ProgressBar() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="progress-container">
            <progress
                id="task-progress"
                max="100"
                prop:value=move || store.progress().get().rate()
            />
            <p id="progress-text">{move || store.progress().get().label()}</p>
        </div>
    }
}
