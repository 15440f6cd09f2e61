use thiserror::Error;

#[derive(Error, Debug)]
pub enum SgpaError {
    #[error(transparent)]
    Common(#[from] vtu_sgpa_common::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Not a PDF file: {0}")]
    NotAPdf(String),

    #[error("Could not process the grade card: {0}")]
    ParseFailed(String),

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Input error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("JSON error: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SgpaError>;
