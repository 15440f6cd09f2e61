//! JSON export to disk

use crate::error::Result;
use chrono::{SecondsFormat, Utc};
use std::path::{Path, PathBuf};
use vtu_sgpa_common::ExportDocument;

/// Same shape as the browser's `Date.toISOString()`
pub fn now_iso8601() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Where the export lands: a directory (or extensionless path) gets the
/// document's own filename, anything else is used as-is
pub fn output_path(doc: &ExportDocument, output: Option<&Path>) -> PathBuf {
    let filename = safe_filename(&doc.filename);
    match output {
        None => PathBuf::from(filename),
        Some(path) if path.is_dir() || path.extension().is_none() => path.join(filename),
        Some(path) => path.to_path_buf(),
    }
}

/// Scheme and branch come from the server; keep the name a single path component
pub fn safe_filename(name: &str) -> String {
    let flat: String = name
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();

    if flat.is_empty() || flat.chars().all(|c| c == '.') {
        "vtu_results.json".to_string()
    } else {
        flat
    }
}

pub fn write_export(doc: &ExportDocument, output: Option<&Path>) -> Result<PathBuf> {
    let path = output_path(doc, output);
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&path, &doc.body)?;
    Ok(path)
}
