//! Upload controller
//!
//! Explicit state object behind the widget. Every user action maps to one
//! method; the caller owns the instance and performs the I/O (file read,
//! HTTP, download, share) between `begin_submit` and `complete_submit`.
//!
//! ```text
//! Upload ──submit──▶ Loading ──ok──▶ Results ──new upload──▶ Upload
//!                       └────err──▶ Error   ──retry───────▶ Upload
//! ```

use tracing::debug;

use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::export::{build_export, share_text, ExportDocument};
use crate::protocol::is_pdf_mime;
use crate::types::ResultPayload;

/// What the controller needs to know about a selected file
pub trait FileHandle {
    fn name(&self) -> &str;
    fn mime_type(&self) -> &str;
}

/// Lifecycle of one upload
#[derive(Debug, Clone)]
pub enum UploadState<F> {
    Idle,
    FileSelected(F),
    Loading,
    ShowingResults(ResultPayload),
    ShowingError(String),
}

/// The four mutually exclusive view sections
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Upload,
    Loading,
    Results,
    Error,
}

impl Section {
    pub fn as_str(&self) -> &'static str {
        match self {
            Section::Upload => "upload",
            Section::Loading => "loading",
            Section::Results => "results",
            Section::Error => "error",
        }
    }
}

impl<F> UploadState<F> {
    pub fn section(&self) -> Section {
        match self {
            UploadState::Idle | UploadState::FileSelected(_) => Section::Upload,
            UploadState::Loading => Section::Loading,
            UploadState::ShowingResults(_) => Section::Results,
            UploadState::ShowingError(_) => Section::Error,
        }
    }
}

/// Handed out by `begin_submit`; the file is no longer held by the controller
#[derive(Debug)]
pub struct SubmitTicket<F> {
    pub file: F,
    /// Already trimmed
    pub api_key: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticePhase {
    Entering,
    Shown,
    Leaving,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub message: String,
    pub phase: NoticePhase,
}

#[derive(Debug, Clone)]
pub struct UploadController<F> {
    config: ClientConfig,
    state: UploadState<F>,
    api_key: String,
    api_key_visible: bool,
    drag_over: bool,
    notices: Vec<Notice>,
    next_notice_id: u64,
}

impl<F: FileHandle> UploadController<F> {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            config,
            state: UploadState::Idle,
            api_key: String::new(),
            api_key_visible: false,
            drag_over: false,
            notices: Vec::new(),
            next_notice_id: 1,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn state(&self) -> &UploadState<F> {
        &self.state
    }

    pub fn section(&self) -> Section {
        self.state.section()
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn api_key_visible(&self) -> bool {
        self.api_key_visible
    }

    pub fn is_drag_over(&self) -> bool {
        self.drag_over
    }

    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    pub fn selected_file(&self) -> Option<&F> {
        match &self.state {
            UploadState::FileSelected(file) => Some(file),
            _ => None,
        }
    }

    pub fn current_results(&self) -> Option<&ResultPayload> {
        match &self.state {
            UploadState::ShowingResults(payload) => Some(payload),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.state {
            UploadState::ShowingError(message) => Some(message),
            _ => None,
        }
    }

    pub fn can_submit(&self) -> bool {
        matches!(self.state, UploadState::FileSelected(_))
    }

    // =============================================
    // Upload section
    // =============================================

    /// File picker path. Only takes effect while the upload section is shown.
    pub fn select_file(&mut self, file: F) -> bool {
        if self.section() != Section::Upload {
            debug!(section = self.section().as_str(), "file selection ignored");
            return false;
        }
        debug!(file = file.name(), "file selected");
        self.state = UploadState::FileSelected(file);
        true
    }

    /// Drag-and-drop path: first file only, and only if it is a PDF
    pub fn drop_files<I>(&mut self, files: I) -> bool
    where
        I: IntoIterator<Item = F>,
    {
        self.drag_over = false;
        match files.into_iter().next() {
            Some(file) if is_pdf_mime(file.mime_type()) => self.select_file(file),
            Some(file) => {
                debug!(mime = file.mime_type(), "non-PDF drop ignored");
                false
            }
            None => false,
        }
    }

    pub fn drag_over(&mut self) {
        self.drag_over = true;
    }

    pub fn drag_leave(&mut self) {
        self.drag_over = false;
    }

    pub fn set_api_key(&mut self, key: impl Into<String>) {
        self.api_key = key.into();
    }

    pub fn toggle_api_key_visibility(&mut self) -> bool {
        self.api_key_visible = !self.api_key_visible;
        self.api_key_visible
    }

    // =============================================
    // Submission
    // =============================================

    /// Move to Loading and hand the pending file to the caller
    ///
    /// Returns `None` when nothing is selected. Since the file is consumed
    /// here, a second call before `complete_submit` is always a no-op.
    pub fn begin_submit(&mut self) -> Option<SubmitTicket<F>> {
        match std::mem::replace(&mut self.state, UploadState::Loading) {
            UploadState::FileSelected(file) => {
                debug!(file = file.name(), "submitting");
                Some(SubmitTicket {
                    file,
                    api_key: self.api_key.trim().to_string(),
                })
            }
            other => {
                self.state = other;
                debug!(section = self.section().as_str(), "submit ignored");
                None
            }
        }
    }

    /// Finish the in-flight submission
    pub fn complete_submit(&mut self, outcome: Result<ResultPayload>) {
        if !matches!(self.state, UploadState::Loading) {
            debug!(section = self.section().as_str(), "stale submission outcome dropped");
            return;
        }
        self.state = match outcome {
            Ok(payload) => {
                debug!(subjects = payload.subjects.len(), "results received");
                UploadState::ShowingResults(payload)
            }
            Err(err) => {
                debug!(error = %err, "submission failed");
                UploadState::ShowingError(err.to_string())
            }
        };
    }

    /// Back to a blank upload form, from any state
    pub fn reset(&mut self) {
        self.state = UploadState::Idle;
        self.api_key.clear();
        self.api_key_visible = false;
        self.drag_over = false;
    }

    // =============================================
    // Result actions
    // =============================================

    pub fn export_results(&self, timestamp: &str) -> Result<Option<ExportDocument>> {
        self.current_results()
            .map(|payload| build_export(payload, timestamp))
            .transpose()
    }

    pub fn share_text(&self) -> Option<String> {
        self.current_results().map(share_text)
    }

    /// Record a best-effort failure (share, clipboard); nothing visible changes
    pub fn note_best_effort_failure(&self, err: &Error) {
        debug!(error = %err, best_effort = err.is_best_effort(), "action failed");
    }

    // =============================================
    // Notices
    // =============================================

    pub fn push_notice(&mut self, message: impl Into<String>) -> u64 {
        let id = self.next_notice_id;
        self.next_notice_id += 1;
        self.notices.push(Notice {
            id,
            message: message.into(),
            phase: NoticePhase::Entering,
        });
        id
    }

    /// Step a notice to its next phase; `None` once it has been removed
    pub fn advance_notice(&mut self, id: u64) -> Option<NoticePhase> {
        let index = self.notices.iter().position(|n| n.id == id)?;
        let next = match self.notices[index].phase {
            NoticePhase::Entering => Some(NoticePhase::Shown),
            NoticePhase::Shown => Some(NoticePhase::Leaving),
            NoticePhase::Leaving => None,
        };
        match next {
            Some(phase) => self.notices[index].phase = phase,
            None => {
                self.notices.remove(index);
            }
        }
        next
    }

    pub fn dismiss_notice(&mut self, id: u64) {
        self.notices.retain(|n| n.id != id);
    }

    /// Milliseconds to wait in `phase` before calling `advance_notice`
    pub fn notice_delay_ms(&self, phase: NoticePhase) -> u32 {
        let toast = &self.config.toast;
        match phase {
            NoticePhase::Entering => toast.enter_delay_ms,
            NoticePhase::Shown => toast.display_ms,
            NoticePhase::Leaving => toast.exit_ms,
        }
    }
}
