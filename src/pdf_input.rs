//! Local grade card input

use crate::error::{Result, SgpaError};
use std::path::Path;
use vtu_sgpa_common::protocol::{looks_like_pdf, PDF_MIME};
use vtu_sgpa_common::FileHandle;

/// A PDF read from disk; only built after the `%PDF-` check passed
#[derive(Debug, Clone)]
pub struct LocalPdf {
    name: String,
    bytes: Vec<u8>,
}

impl LocalPdf {
    pub fn from_bytes(name: impl Into<String>, bytes: Vec<u8>) -> Result<Self> {
        let name = name.into();
        if !looks_like_pdf(&bytes) {
            return Err(SgpaError::NotAPdf(name));
        }
        Ok(Self { name, bytes })
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }
}

impl FileHandle for LocalPdf {
    fn name(&self) -> &str {
        &self.name
    }

    fn mime_type(&self) -> &str {
        PDF_MIME
    }
}

pub fn load_pdf(path: &Path) -> Result<LocalPdf> {
    if !path.is_file() {
        return Err(SgpaError::FileNotFound(path.display().to_string()));
    }

    let bytes = std::fs::read(path)?;
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string());

    LocalPdf::from_bytes(name, bytes)
}
