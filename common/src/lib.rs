//! VTU SGPA Common Library
//!
//! Headless core shared by the browser widget and the terminal client:
//! result types, the parse API wire format, the upload state machine and
//! its view model.

pub mod branch;
pub mod config;
pub mod controller;
pub mod error;
pub mod export;
pub mod protocol;
pub mod types;
pub mod view;

pub use branch::branch_full_name;
pub use config::{ClientConfig, ToastTimings};
pub use controller::{FileHandle, Notice, NoticePhase, Section, SubmitTicket, UploadController, UploadState};
pub use error::{Error, Result};
pub use export::{build_export, export_filename, share_text, ExportDocument, ExportSnapshot, EXPORT_MIME};
pub use protocol::{interpret_health, interpret_response, HealthResponse, ParseRequest};
pub use types::{DisplayValue, ResultPayload, Subject, Summary};
pub use view::{render, ResultsView, SubjectRow, SummaryView, UploadView, ViewModel};
