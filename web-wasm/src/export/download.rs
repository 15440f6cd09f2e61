//! JSON download through a temporary object URL

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};
use vtu_sgpa_common::{ExportDocument, EXPORT_MIME};

/// Trigger a browser download of `doc`; the object URL is revoked right after
pub fn download_document(doc: &ExportDocument) -> Result<(), JsValue> {
    let parts = js_sys::Array::of1(&JsValue::from_str(&doc.body));
    let options = BlobPropertyBag::new();
    options.set_type(EXPORT_MIME);
    let blob = Blob::new_with_str_sequence_and_options(&parts, &options)?;

    let url = Url::create_object_url_with_blob(&blob)?;
    let clicked = click_download_link(&url, &doc.filename);
    Url::revoke_object_url(&url)?;
    clicked
}

fn click_download_link(url: &str, filename: &str) -> Result<(), JsValue> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("no body"))?;

    let anchor: HtmlAnchorElement = document.create_element("a")?.dyn_into()?;
    anchor.set_href(url);
    anchor.set_download(filename);

    body.append_child(&anchor)?;
    anchor.click();
    body.remove_child(&anchor)?;
    Ok(())
}

/// ISO-8601 timestamp from the browser clock
pub fn now_iso8601() -> String {
    String::from(js_sys::Date::new_0().to_iso_string())
}

#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn timestamp_is_utc_iso8601() {
        let ts = now_iso8601();
        assert_eq!(ts.len(), 24);
        assert!(ts.ends_with('Z'));
        assert_eq!(&ts[10..11], "T");
    }

    #[wasm_bindgen_test]
    fn download_leaves_no_anchor_behind() {
        let doc = ExportDocument {
            filename: "vtu_results_2018_CS.json".to_string(),
            body: "{}".to_string(),
        };
        download_document(&doc).expect("download failed");

        let document = web_sys::window().unwrap().document().unwrap();
        assert!(document.query_selector("a[download]").unwrap().is_none());
    }
}
