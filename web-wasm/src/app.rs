//! Main application component
//!
//! Holds the one `UploadController` in a local signal (it owns a
//! `web_sys::File`, which is not `Send`) and wires DOM events to it. All
//! markup is drawn from the `ViewModel` memo.

use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;
use gloo::timers::future::TimeoutFuture;
use vtu_sgpa_common::{render, ClientConfig, NoticePhase, Section, UploadController, ViewModel};
use web_sys::FileList;

use crate::api::parse_pdf;
use crate::components::{
    api_key_field::ApiKeyField,
    error_panel::ErrorPanel,
    header::Header,
    loading_panel::LoadingPanel,
    results_panel::ResultsPanel,
    toast::ToastStack,
    upload_area::UploadArea,
};
use crate::export::{download, share};
use crate::file::{files_from_list, PdfFile};

pub const COPIED_NOTICE: &str = "Results copied to clipboard!";

type Controller = RwSignal<UploadController<PdfFile>, LocalStorage>;

/// Main application component
#[component]
pub fn App(config: ClientConfig) -> impl IntoView {
    let parse_url = config.parse_url();
    let share_title = config.share_title.clone();

    let controller: Controller = RwSignal::new_local(UploadController::new(config));
    let model: Memo<ViewModel> = Memo::new(move |_| controller.with(render));
    let file_input: NodeRef<html::Input> = NodeRef::new();

    // Upload section
    let on_files_picked = move |files: FileList| {
        if let Some(file) = files_from_list(&files).into_iter().next() {
            controller.update(|c| {
                c.select_file(file);
            });
        }
    };

    let on_files_dropped = move |files: FileList| {
        let files = files_from_list(&files);
        controller.update(|c| {
            c.drop_files(files);
        });
    };

    let on_drag_over = move |_| {
        if !controller.with_untracked(|c| c.is_drag_over()) {
            controller.update(|c| c.drag_over());
        }
    };
    let on_drag_leave = move |_| controller.update(|c| c.drag_leave());
    let on_api_key = move |key: String| controller.update(|c| c.set_api_key(key));
    let on_toggle_key = move |_| {
        controller.update(|c| {
            c.toggle_api_key_visibility();
        });
    };

    let on_submit = move |_| {
        let Some(ticket) = controller.try_update(|c| c.begin_submit()).flatten() else {
            return;
        };
        let parse_url = parse_url.clone();
        spawn_local(async move {
            let outcome = parse_pdf::submit(&parse_url, ticket).await;
            if let Err(e) = &outcome {
                gloo::console::error!("Error processing PDF:", e.to_string());
            }
            controller.update(|c| c.complete_submit(outcome));
        });
    };

    // Results / error sections
    let on_reset = move |_| {
        if let Some(input) = file_input.get_untracked() {
            input.set_value("");
        }
        controller.update(|c| c.reset());
    };

    let on_download = move |_| {
        let timestamp = download::now_iso8601();
        match controller.with_untracked(|c| c.export_results(&timestamp)) {
            Ok(Some(doc)) => {
                if let Err(e) = download::download_document(&doc) {
                    gloo::console::error!("Download failed:", e);
                }
            }
            Ok(None) => {}
            Err(e) => gloo::console::error!("Export failed:", e.to_string()),
        }
    };

    let on_share = move |_| {
        let Some(text) = controller.with_untracked(|c| c.share_text()) else {
            return;
        };
        let share_title = share_title.clone();
        spawn_local(async move {
            match share::share_or_copy(&share_title, &text).await {
                Ok(share::ShareOutcome::Shared) => {}
                Ok(share::ShareOutcome::Copied) => show_notice(controller, COPIED_NOTICE),
                Err(e) => {
                    controller.with_untracked(|c| c.note_best_effort_failure(&e));
                    gloo::console::log!("Share cancelled or failed:", e.to_string());
                }
            }
        });
    };

    let on_dismiss_notice = move |id: u64| controller.update(|c| c.dismiss_notice(id));

    let section_display = move |section: Section| {
        move || if model.with(|v| v.section == section) { "block" } else { "none" }
    };

    view! {
        <div class="container">
            <Header />

            <section id="uploadSection" style:display=section_display(Section::Upload)>
                <UploadArea
                    model=model
                    file_input=file_input
                    on_files_picked=on_files_picked
                    on_files_dropped=on_files_dropped
                    on_drag_over=on_drag_over
                    on_drag_leave=on_drag_leave
                    on_submit=on_submit
                />
                <ApiKeyField model=model on_input=on_api_key on_toggle=on_toggle_key />
            </section>

            <section id="loadingSection" style:display=section_display(Section::Loading)>
                <LoadingPanel />
            </section>

            <section id="resultsSection" style:display=section_display(Section::Results)>
                <ResultsPanel
                    model=model
                    on_new_upload=on_reset
                    on_download=on_download
                    on_share=on_share
                />
            </section>

            <section id="errorSection" style:display=section_display(Section::Error)>
                <ErrorPanel model=model on_retry=on_reset />
            </section>

            <ToastStack model=model on_dismiss=on_dismiss_notice />
        </div>
    }
}

/// Push a notice and walk it through enter / show / leave on timers
fn show_notice(controller: Controller, message: &str) {
    let id = controller
        .try_update(|c| c.push_notice(message))
        .unwrap_or_default();

    spawn_local(async move {
        let mut phase = NoticePhase::Entering;
        loop {
            let Some(delay) = controller.try_with_untracked(|c| c.notice_delay_ms(phase)) else {
                return;
            };
            TimeoutFuture::new(delay).await;
            match controller.try_update(|c| c.advance_notice(id)).flatten() {
                Some(next) => phase = next,
                None => return,
            }
        }
    });
}
