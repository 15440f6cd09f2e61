//! Parse API call over `fetch`

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};
use vtu_sgpa_common::{
    interpret_response, Error, ParseRequest, ResultPayload, Result, SubmitTicket,
};

use crate::file::PdfFile;

/// Run one submission: read, encode, POST, interpret
pub async fn submit(url: &str, ticket: SubmitTicket<PdfFile>) -> Result<ResultPayload> {
    let bytes = ticket.file.read_bytes().await?;
    let request = ParseRequest::from_pdf(&bytes, &ticket.api_key);

    let (status, body) = post_json(url, &request)
        .await
        .map_err(|e| Error::Transport(js_error_message(&e)))?;

    interpret_response(status, &body)
}

/// POST a JSON body and return the status with the raw response text
async fn post_json(url: &str, request: &ParseRequest) -> std::result::Result<(u16, String), JsValue> {
    let body = serde_json::to_string(request)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&JsValue::from_str(&body));

    let request = Request::new_with_str_and_init(url, &opts)?;
    request.headers().set("Content-Type", "application/json")?;

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
    let resp: Response = resp_value.dyn_into()?;

    let text = JsFuture::from(resp.text()?).await?;
    Ok((resp.status(), text.as_string().unwrap_or_default()))
}

/// Readable message out of a rejected promise
pub fn js_error_message(value: &JsValue) -> String {
    if let Some(message) = value.as_string() {
        return message;
    }
    js_sys::Reflect::get(value, &JsValue::from_str("message"))
        .ok()
        .and_then(|m| m.as_string())
        .unwrap_or_else(|| format!("{:?}", value))
}

#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn js_error_message_reads_error_objects() {
        let err: JsValue = js_sys::Error::new("Failed to fetch").into();
        assert_eq!(js_error_message(&err), "Failed to fetch");
        assert_eq!(js_error_message(&JsValue::from_str("plain")), "plain");
    }
}
