//! Headless run of the upload controller

use crate::client::ApiClient;
use crate::pdf_input::LocalPdf;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;
use vtu_sgpa_common::{FileHandle, ParseRequest, UploadController};

/// Submit the selected file and settle the controller in Results or Error
///
/// Does nothing when no file is selected.
pub async fn submit(controller: &mut UploadController<LocalPdf>, client: &ApiClient, show_spinner: bool) {
    let Some(ticket) = controller.begin_submit() else {
        return;
    };

    let spinner = show_spinner.then(|| {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.cyan} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        pb.set_message(format!("Processing {}...", ticket.file.name()));
        pb.enable_steady_tick(Duration::from_millis(120));
        pb
    });

    let request = ParseRequest::from_pdf(ticket.file.bytes(), &ticket.api_key);
    let outcome = client.parse(&request).await;

    if let Some(pb) = spinner {
        pb.finish_and_clear();
    }
    controller.complete_submit(outcome);
}
