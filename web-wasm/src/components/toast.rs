//! Transient notices
//!
//! Clicking a notice removes it before its timer runs out.

use leptos::prelude::*;
use vtu_sgpa_common::ViewModel;

#[component]
pub fn ToastStack<FD>(model: Memo<ViewModel>, on_dismiss: FD) -> impl IntoView
where
    FD: Fn(u64) + 'static + Clone + Send,
{
    view! {
        <div class="toast-stack">
            <For
                each=move || model.with(|v| v.notices.clone())
                key=|notice| notice.id
                children=move |notice| {
                    let id = notice.id;
                    let visible = move || {
                        model.with(|v| v.notices.iter().any(|n| n.id == id && n.visible))
                    };
                    let on_dismiss = on_dismiss.clone();
                    view! {
                        <div class="toast" class:show=visible on:click=move |_| on_dismiss(id)>
                            {notice.message}
                        </div>
                    }
                }
            />
        </div>
    }
}
