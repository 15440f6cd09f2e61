//! Widget configuration from the host page
//!
//! The page may embed `<script id="vtu-sgpa-config" type="application/json">`
//! with a [`ClientConfig`] object. Missing or broken config falls back to the
//! defaults (same-origin `/api/parse_pdf`).

use vtu_sgpa_common::ClientConfig;

const CONFIG_ELEMENT_ID: &str = "vtu-sgpa-config";

pub fn load_config() -> ClientConfig {
    let Some(text) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|el| el.text_content())
    else {
        return ClientConfig::default();
    };

    match ClientConfig::from_json(&text) {
        Ok(config) => {
            if config.sends_key_in_clear() {
                gloo::console::warn!("API key will be sent over plain HTTP to", config.endpoint.clone());
            }
            config
        }
        Err(e) => {
            gloo::console::error!("Invalid widget config, using defaults:", e.to_string());
            ClientConfig::default()
        }
    }
}
