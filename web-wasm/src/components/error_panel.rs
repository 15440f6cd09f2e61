//! Error view with retry

use leptos::prelude::*;
use vtu_sgpa_common::ViewModel;

#[component]
pub fn ErrorPanel<FR>(model: Memo<ViewModel>, on_retry: FR) -> impl IntoView
where
    FR: Fn(()) + 'static + Clone,
{
    view! {
        <div class="error-card">
            <div class="error-icon">
                <i class="fas fa-exclamation-triangle"></i>
            </div>
            <h3>"Something went wrong"</h3>
            <p id="errorMessage" class="error-message">
                {move || model.with(|v| v.error_message.clone().unwrap_or_default())}
            </p>
            <button id="retryBtn" class="btn btn-primary" on:click=move |_| on_retry(())>
                <i class="fas fa-redo"></i>
                " Try Again"
            </button>
        </div>
    }
}
