//! Error types

use thiserror::Error;

/// Shared error type
///
/// `Network` and `Api` end a submission in the Error view. `Share` and
/// `Clipboard` are logged and never shown to the user.
#[derive(Error, Debug)]
pub enum Error {
    #[error("HTTP error! status: {status}")]
    Network { status: u16 },

    #[error("{0}")]
    Api(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to read file: {0}")]
    FileRead(String),

    #[error("Request failed: {0}")]
    Transport(String),

    #[error("Share failed: {0}")]
    Share(String),

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("Config error: {0}")]
    Config(String),
}

impl Error {
    /// Errors that must not reach the Error view
    pub fn is_best_effort(&self) -> bool {
        matches!(self, Error::Share(_) | Error::Clipboard(_))
    }
}

/// Result alias
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_network() {
        let error = Error::Network { status: 502 };
        assert_eq!(error.to_string(), "HTTP error! status: 502");
    }

    #[test]
    fn test_error_display_api_is_verbatim() {
        let error = Error::Api("No PDF content provided".to_string());
        assert_eq!(error.to_string(), "No PDF content provided");
    }

    #[test]
    fn test_error_display_json() {
        let json_error = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let error = Error::Json(json_error);
        assert!(error.to_string().contains("JSON error"));
    }

    #[test]
    fn test_error_from_json() {
        let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error: Error = json_error.into();
        assert!(matches!(error, Error::Json(_)));
    }

    #[test]
    fn test_best_effort_errors() {
        assert!(Error::Share("AbortError".into()).is_best_effort());
        assert!(Error::Clipboard("denied".into()).is_best_effort());
        assert!(!Error::Network { status: 500 }.is_best_effort());
        assert!(!Error::Api("x".into()).is_best_effort());
    }

    #[test]
    fn test_error_debug() {
        let error = Error::Config("bad endpoint".to_string());
        let debug = format!("{:?}", error);
        assert!(debug.contains("Config"));
        assert!(debug.contains("bad endpoint"));
    }
}
