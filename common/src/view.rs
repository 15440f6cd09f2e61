//! View model projection
//!
//! `render` turns the controller into a plain description of what is on
//! screen. The Leptos widget and the terminal client both draw from it, and
//! tests assert against it without a document.

use crate::branch::branch_full_name;
use crate::controller::{FileHandle, NoticePhase, Section, UploadController};
use crate::types::{ResultPayload, Subject};

pub const DEFAULT_FILE_LABEL: &str = "Click to select PDF or drag & drop here";

/// Column headers of the subject table, in cell order
pub const SUBJECT_COLUMNS: [&str; 10] = [
    "Code",
    "Subject",
    "Internal",
    "External",
    "Total",
    "Result",
    "Credits",
    "Grade",
    "Grade Points",
    "Credit Points",
];

#[derive(Debug, Clone, PartialEq)]
pub struct ViewModel {
    pub section: Section,
    pub upload: UploadView,
    pub results: Option<ResultsView>,
    pub error_message: Option<String>,
    pub notices: Vec<NoticeView>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UploadView {
    pub file_label: String,
    pub file_selected: bool,
    pub drag_over: bool,
    pub submit_enabled: bool,
    pub api_key: String,
    pub api_key_visible: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResultsView {
    pub scheme: String,
    pub branch: String,
    pub sgpa_label: String,
    pub rows: Vec<SubjectRow>,
    pub summary: SummaryView,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SubjectRow {
    /// Same order as [`SUBJECT_COLUMNS`]
    pub cells: [String; 10],
    pub result_class: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SummaryView {
    pub total_subjects: String,
    pub passed_subjects: String,
    pub total_credits: String,
    pub total_credit_points: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NoticeView {
    pub id: u64,
    pub message: String,
    pub visible: bool,
}

pub fn render<F: FileHandle>(controller: &UploadController<F>) -> ViewModel {
    let selected = controller.selected_file();

    ViewModel {
        section: controller.section(),
        upload: UploadView {
            file_label: selected
                .map(|f| f.name().to_string())
                .unwrap_or_else(|| DEFAULT_FILE_LABEL.to_string()),
            file_selected: selected.is_some(),
            drag_over: controller.is_drag_over(),
            submit_enabled: controller.can_submit(),
            api_key: controller.api_key().to_string(),
            api_key_visible: controller.api_key_visible(),
        },
        results: controller.current_results().map(results_view),
        error_message: controller.error_message().map(str::to_string),
        notices: controller
            .notices()
            .iter()
            .map(|n| NoticeView {
                id: n.id,
                message: n.message.clone(),
                visible: n.phase == NoticePhase::Shown,
            })
            .collect(),
    }
}

pub fn results_view(payload: &ResultPayload) -> ResultsView {
    ResultsView {
        scheme: payload.scheme.clone(),
        branch: branch_full_name(&payload.branch).to_string(),
        sgpa_label: format!("SGPA: {}", payload.sgpa),
        rows: payload.subjects.iter().map(subject_row).collect(),
        summary: SummaryView {
            total_subjects: payload.summary.total_subjects.to_string(),
            passed_subjects: payload.summary.passed_subjects.to_string(),
            total_credits: payload.summary.total_credits.to_string(),
            total_credit_points: payload.summary.total_credit_points.to_string(),
        },
    }
}

fn subject_row(subject: &Subject) -> SubjectRow {
    SubjectRow {
        cells: [
            subject.code.to_string(),
            subject.name.to_string(),
            subject.internal.to_string(),
            subject.external.to_string(),
            subject.total.to_string(),
            subject.result.clone(),
            subject.credits.to_string(),
            subject.grade.to_string(),
            subject.grade_point.to_string(),
            subject.credit_points.to_string(),
        ],
        result_class: if subject.is_pass() { "pass" } else { "fail" },
    }
}
