//! Results view: header, subject table, summary and actions

use leptos::prelude::*;
use vtu_sgpa_common::{ResultsView, ViewModel};

use crate::components::subject_table::SubjectTable;

#[component]
pub fn ResultsPanel<FN, FD, FS>(
    model: Memo<ViewModel>,
    on_new_upload: FN,
    on_download: FD,
    on_share: FS,
) -> impl IntoView
where
    FN: Fn(()) + 'static + Clone,
    FD: Fn(()) + 'static + Clone,
    FS: Fn(()) + 'static + Clone,
{
    let field = move |pick: fn(&ResultsView) -> String| {
        move || model.with(|v| v.results.as_ref().map(pick).unwrap_or_default())
    };

    view! {
        <div class="results-card">
            <div class="results-header">
                <div class="info-item">
                    <span class="info-label">"Scheme"</span>
                    <span id="schemeInfo" class="info-value">{field(|r| r.scheme.clone())}</span>
                </div>
                <div class="info-item">
                    <span class="info-label">"Branch"</span>
                    <span id="branchInfo" class="info-value">{field(|r| r.branch.clone())}</span>
                </div>
                <div id="sgpaInfo" class="sgpa-badge">{field(|r| r.sgpa_label.clone())}</div>
            </div>

            <SubjectTable model=model />

            <div class="summary-grid">
                <div class="summary-item">
                    <span id="totalSubjects" class="summary-value">
                        {field(|r| r.summary.total_subjects.clone())}
                    </span>
                    <span class="summary-label">"Total Subjects"</span>
                </div>
                <div class="summary-item">
                    <span id="passedSubjects" class="summary-value">
                        {field(|r| r.summary.passed_subjects.clone())}
                    </span>
                    <span class="summary-label">"Passed"</span>
                </div>
                <div class="summary-item">
                    <span id="totalCredits" class="summary-value">
                        {field(|r| r.summary.total_credits.clone())}
                    </span>
                    <span class="summary-label">"Total Credits"</span>
                </div>
                <div class="summary-item">
                    <span id="totalCreditPoints" class="summary-value">
                        {field(|r| r.summary.total_credit_points.clone())}
                    </span>
                    <span class="summary-label">"Credit Points"</span>
                </div>
            </div>

            <div class="action-buttons">
                <button id="newUploadBtn" class="btn btn-secondary" on:click=move |_| on_new_upload(())>
                    <i class="fas fa-upload"></i>
                    " New Upload"
                </button>
                <button id="downloadBtn" class="btn btn-primary" on:click=move |_| on_download(())>
                    <i class="fas fa-download"></i>
                    " Download JSON"
                </button>
                <button id="shareBtn" class="btn btn-secondary" on:click=move |_| on_share(())>
                    <i class="fas fa-share-alt"></i>
                    " Share"
                </button>
            </div>
        </div>
    }
}
