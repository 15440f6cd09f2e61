use crate::error::{Result, SgpaError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use vtu_sgpa_common::ClientConfig;

pub const API_KEY_ENV: &str = "VTU_SGPA_API_KEY";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL of the parse service
    pub endpoint: String,
    pub api_key: Option<String>,
    pub timeout_seconds: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_config()
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            validate_endpoint(&config.endpoint).map_err(|e| {
                SgpaError::Config(format!("{} ({})", e, config_path.display()))
            })?;
            Ok(config)
        } else {
            Ok(Self::default_config())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| SgpaError::Config("home directory not found".into()))?;
        Ok(home.join(".config").join("vtu-sgpa").join("config.json"))
    }

    fn default_config() -> Self {
        Self {
            endpoint: "http://localhost:3000".into(),
            api_key: None,
            timeout_seconds: 120,
        }
    }

    /// Stored key, with a non-empty environment value taking precedence;
    /// empty when neither is set
    pub fn get_api_key(&self) -> String {
        match std::env::var(API_KEY_ENV) {
            Ok(key) if !key.trim().is_empty() => key,
            _ => self.api_key.clone().unwrap_or_default(),
        }
    }

    pub fn set_endpoint(&mut self, endpoint: String) -> Result<()> {
        self.endpoint = validate_endpoint(&endpoint)?;
        Ok(())
    }

    pub fn client_config(&self) -> ClientConfig {
        ClientConfig::with_endpoint(self.endpoint.clone())
    }

    /// Client settings for one run; `endpoint` overrides the stored one
    /// without touching what `save` writes
    pub fn client_config_with(&self, endpoint: Option<&str>) -> Result<ClientConfig> {
        match endpoint {
            Some(endpoint) => Ok(ClientConfig::with_endpoint(validate_endpoint(endpoint)?)),
            None => Ok(self.client_config()),
        }
    }
}

/// Trimmed endpoint, or a config error when it is not an http(s) URL
fn validate_endpoint(endpoint: &str) -> Result<String> {
    let candidate = ClientConfig::with_endpoint(endpoint.trim());
    candidate
        .validate()
        .map_err(|e| SgpaError::Config(e.to_string()))?;
    Ok(candidate.endpoint)
}
