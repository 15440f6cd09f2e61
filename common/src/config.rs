//! Client configuration shared by the browser widget and the terminal client

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::protocol::{join_url, HEALTH_PATH, PARSE_PDF_PATH};

/// Timings of the transient confirmation notice (milliseconds)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToastTimings {
    /// Delay before the enter animation starts
    pub enter_delay_ms: u32,
    /// How long the notice stays before it starts leaving
    pub display_ms: u32,
    /// Exit animation window before removal
    pub exit_ms: u32,
}

impl Default for ToastTimings {
    fn default() -> Self {
        Self {
            enter_delay_ms: 100,
            display_ms: 3000,
            exit_ms: 300,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Base URL of the parse service; empty means same origin
    pub endpoint: String,
    pub share_title: String,
    pub toast: ToastTimings,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: String::new(),
            share_title: "VTU SGPA Results".to_string(),
            toast: ToastTimings::default(),
        }
    }
}

impl ClientConfig {
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            ..Self::default()
        }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let config: ClientConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let endpoint = self.endpoint.trim();
        if !endpoint.is_empty()
            && !endpoint.starts_with("http://")
            && !endpoint.starts_with("https://")
        {
            return Err(Error::Config(format!(
                "endpoint must start with http:// or https://: {}",
                endpoint
            )));
        }
        Ok(())
    }

    pub fn parse_url(&self) -> String {
        join_url(self.endpoint.trim(), PARSE_PDF_PATH)
    }

    pub fn health_url(&self) -> String {
        join_url(self.endpoint.trim(), HEALTH_PATH)
    }

    /// True when the API key would cross the network unencrypted
    pub fn sends_key_in_clear(&self) -> bool {
        let Some(rest) = self.endpoint.trim().strip_prefix("http://") else {
            return false;
        };
        let host = rest.split(['/', ':']).next().unwrap_or_default();
        !matches!(host, "localhost" | "127.0.0.1")
    }
}
