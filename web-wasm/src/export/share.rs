//! Share with native share sheet, falling back to the clipboard

use vtu_sgpa_common::{Error, Result};

use crate::api::parse_pdf::js_error_message;
use crate::export::js_bindings::{
    can_share_js, copy_to_clipboard_js, share_data_to_js, share_native_js, JsShareData,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareOutcome {
    /// Handed to `navigator.share`
    Shared,
    /// Written to the clipboard; the caller shows a notice
    Copied,
}

pub async fn share_or_copy(title: &str, text: &str) -> Result<ShareOutcome> {
    if can_share_js() {
        let data = share_data_to_js(&JsShareData {
            title: title.to_string(),
            text: text.to_string(),
        })
        .map_err(Error::Share)?;
        share_native_js(data)
            .await
            .map_err(|e| Error::Share(js_error_message(&e)))?;
        Ok(ShareOutcome::Shared)
    } else {
        copy_to_clipboard_js(text)
            .await
            .map_err(|e| Error::Clipboard(js_error_message(&e)))?;
        Ok(ShareOutcome::Copied)
    }
}
