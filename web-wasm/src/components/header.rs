//! Header component

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <h1>"VTU SGPA Calculator"</h1>
            <p class="text-muted">"Upload your VTU result PDF to see subject grades and SGPA"</p>
        </header>
    }
}
