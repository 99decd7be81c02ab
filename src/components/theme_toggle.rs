//! Theme Toggle Component
//!
//! Switches light/dark mode. The glyph shows the mode you would switch to.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    view! {
        <button
            id="theme-toggle"
            class="theme-toggle"
            title=move || if store.theme().get().is_dark() { "Light mode" } else { "Dark mode" }
            on:click=move |_| { ctx.toggle_theme(); }
        >
            {move || store.theme().get().glyph()}
        </button>
    }
}
