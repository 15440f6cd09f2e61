//! Upload area component
//!
//! Click opens the hidden file picker; drag-and-drop hands the dropped
//! `FileList` up unchanged (the PDF check lives in the controller).

use leptos::html;
use leptos::prelude::*;
use vtu_sgpa_common::ViewModel;
use web_sys::{DragEvent, FileList, HtmlInputElement};

#[component]
pub fn UploadArea<FP, FD, FO, FL, FS>(
    model: Memo<ViewModel>,
    file_input: NodeRef<html::Input>,
    on_files_picked: FP,
    on_files_dropped: FD,
    on_drag_over: FO,
    on_drag_leave: FL,
    on_submit: FS,
) -> impl IntoView
where
    FP: Fn(FileList) + 'static + Clone,
    FD: Fn(FileList) + 'static + Clone,
    FO: Fn(()) + 'static + Clone,
    FL: Fn(()) + 'static + Clone,
    FS: Fn(()) + 'static + Clone,
{
    let drag_over = move || model.with(|v| v.upload.drag_over);
    let file_selected = move || model.with(|v| v.upload.file_selected);
    let file_label = move || model.with(|v| v.upload.file_label.clone());
    let submit_enabled = move || model.with(|v| v.upload.submit_enabled);

    let on_click = move |_| {
        if let Some(input) = file_input.get() {
            input.click();
        }
    };

    let on_dragover = move |ev: DragEvent| {
        ev.prevent_default();
        on_drag_over(());
    };

    let on_dragleave = {
        let on_drag_leave = on_drag_leave.clone();
        move |_: DragEvent| on_drag_leave(())
    };

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        match ev.data_transfer().and_then(|dt| dt.files()) {
            Some(files) => on_files_dropped(files),
            None => on_drag_leave(()),
        }
    };

    let on_change = move |ev: leptos::ev::Event| {
        let input: HtmlInputElement = event_target(&ev);
        if let Some(files) = input.files() {
            on_files_picked(files);
        }
    };

    view! {
        <div class="upload-card">
            <div
                id="uploadArea"
                class="upload-area"
                class:drag-over=drag_over
                class:file-selected=file_selected
                on:click=on_click
                on:dragover=on_dragover
                on:dragleave=on_dragleave
                on:drop=on_drop
            >
                <div class="upload-icon">
                    <i class="fas fa-file-pdf"></i>
                </div>
                <div class="upload-text">
                    <p>{file_label}</p>
                    <span class="text-muted">"PDF grade cards only"</span>
                </div>
            </div>

            <input
                type="file"
                id="pdfFile"
                accept=".pdf,application/pdf"
                style="display: none"
                node_ref=file_input
                on:change=on_change
            />

            <button
                id="uploadBtn"
                class="btn btn-primary"
                disabled=move || !submit_enabled()
                on:click=move |_| on_submit(())
            >
                <i class="fas fa-calculator"></i>
                " Calculate SGPA"
            </button>
        </div>
    }
}
