//! API key field with show/hide toggle

use leptos::prelude::*;
use vtu_sgpa_common::ViewModel;

#[component]
pub fn ApiKeyField<FI, FT>(
    model: Memo<ViewModel>,
    on_input: FI,
    on_toggle: FT,
) -> impl IntoView
where
    FI: Fn(String) + 'static + Clone,
    FT: Fn(()) + 'static + Clone,
{
    let visible = move || model.with(|v| v.upload.api_key_visible);

    view! {
        <div class="form-group api-key-group">
            <label for="apiKey">"Gemini API Key (optional)"</label>
            <div class="api-key-input">
                <input
                    id="apiKey"
                    type=move || if visible() { "text" } else { "password" }
                    placeholder="Improves accuracy of PDF parsing"
                    autocomplete="off"
                    prop:value=move || model.with(|v| v.upload.api_key.clone())
                    on:input=move |ev| on_input(event_target_value(&ev))
                />
                <button
                    id="toggleKey"
                    type="button"
                    class="btn btn-icon"
                    title=move || if visible() { "Hide key" } else { "Show key" }
                    on:click=move |_| on_toggle(())
                >
                    <i class=move || if visible() { "fas fa-eye-slash" } else { "fas fa-eye" }></i>
                </button>
            </div>
            <p class="text-muted">
                "The key is sent to the parsing service with your PDF and is not stored."
            </p>
        </div>
    }
}
