//! Loading indicator

use leptos::prelude::*;

#[component]
pub fn LoadingPanel() -> impl IntoView {
    view! {
        <div class="loading-container">
            <div class="spinner"></div>
            <p class="loading-text">"Processing your PDF..."</p>
            <p class="text-muted">"Extracting subjects and calculating SGPA"</p>
        </div>
    }
}
