//! Export and share builders

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::types::{DisplayValue, ResultPayload, Subject, Summary};

pub const EXPORT_MIME: &str = "application/json";

/// Snapshot written to the downloadable JSON document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportSnapshot {
    /// ISO-8601, supplied by the caller's clock
    pub timestamp: String,
    pub scheme: String,
    pub branch: String,
    pub sgpa: DisplayValue,
    pub subjects: Vec<Subject>,
    pub summary: Summary,
}

impl ExportSnapshot {
    pub fn new(payload: &ResultPayload, timestamp: impl Into<String>) -> Self {
        Self {
            timestamp: timestamp.into(),
            scheme: payload.scheme.clone(),
            branch: payload.branch.clone(),
            sgpa: payload.sgpa.clone(),
            subjects: payload.subjects.clone(),
            summary: payload.summary.clone(),
        }
    }
}

/// A ready-to-save export
#[derive(Debug, Clone, PartialEq)]
pub struct ExportDocument {
    pub filename: String,
    pub body: String,
}

pub fn export_filename(scheme: &str, branch: &str) -> String {
    format!("vtu_results_{}_{}.json", scheme, branch)
}

/// Pretty-printed (two-space) export of a result
pub fn build_export(payload: &ResultPayload, timestamp: &str) -> Result<ExportDocument> {
    let snapshot = ExportSnapshot::new(payload, timestamp);
    Ok(ExportDocument {
        filename: export_filename(&payload.scheme, &payload.branch),
        body: serde_json::to_string_pretty(&snapshot)?,
    })
}

pub fn share_text(payload: &ResultPayload) -> String {
    format!(
        "VTU Results - {} Scheme, {} Branch\nSGPA: {}\nTotal Credits: {}",
        payload.scheme, payload.branch, payload.sgpa, payload.summary.total_credits
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::fixtures;

    #[test]
    fn test_export_filename() {
        assert_eq!(export_filename("2018", "CS"), "vtu_results_2018_CS.json");
    }

    #[test]
    fn test_build_export_round_trips() {
        let payload = fixtures::payload();
        let doc = build_export(&payload, "2026-10-19T08:30:00.000Z").unwrap();

        assert_eq!(doc.filename, "vtu_results_2018_CS.json");

        let snapshot: ExportSnapshot = serde_json::from_str(&doc.body).unwrap();
        assert_eq!(snapshot.timestamp, "2026-10-19T08:30:00.000Z");
        assert_eq!(snapshot.scheme, payload.scheme);
        assert_eq!(snapshot.branch, payload.branch);
        assert_eq!(snapshot.sgpa, payload.sgpa);
        assert_eq!(snapshot.subjects, payload.subjects);
        assert_eq!(snapshot.summary, payload.summary);
    }

    #[test]
    fn test_export_body_layout() {
        let doc = build_export(&fixtures::payload(), "2026-10-19T08:30:00.000Z").unwrap();
        assert!(doc.body.starts_with("{\n  \"timestamp\": "));
        assert!(!doc.body.contains("success"));

        let keys: Vec<String> = serde_json::from_str::<serde_json::Map<String, serde_json::Value>>(&doc.body)
            .unwrap()
            .keys()
            .cloned()
            .collect();
        assert_eq!(keys.len(), 6);
    }

    #[test]
    fn test_share_text() {
        let text = share_text(&fixtures::payload());
        assert_eq!(text, "VTU Results - 2018 Scheme, CS Branch\nSGPA: 8.5\nTotal Credits: 12");
    }
}
