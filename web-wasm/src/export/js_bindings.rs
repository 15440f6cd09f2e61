//! JavaScript Bridge bindings
//!
//! Web Share and Clipboard calls go through `js/share.js` so feature
//! detection stays on the JS side.

use serde::Serialize;
use wasm_bindgen::prelude::*;

/// Argument of `navigator.share`
#[derive(Debug, Clone, Serialize)]
pub struct JsShareData {
    pub title: String,
    pub text: String,
}

#[wasm_bindgen(module = "/js/share.js")]
extern "C" {
    /// Whether `navigator.share` exists
    #[wasm_bindgen(js_name = "canShare")]
    pub fn can_share_js() -> bool;

    /// Native share sheet; rejects when the user cancels
    #[wasm_bindgen(js_name = "shareNative", catch)]
    pub async fn share_native_js(data: JsValue) -> Result<JsValue, JsValue>;

    /// `navigator.clipboard.writeText`
    #[wasm_bindgen(js_name = "copyToClipboard", catch)]
    pub async fn copy_to_clipboard_js(text: &str) -> Result<JsValue, JsValue>;
}

/// JsShareData → JsValue
pub fn share_data_to_js(data: &JsShareData) -> Result<JsValue, String> {
    serde_wasm_bindgen::to_value(data).map_err(|e| format!("share data conversion failed: {}", e))
}
