//! Parse API wire format
//!
//! - `POST /api/parse_pdf` with [`ParseRequest`]; answered with the result
//!   payload plus `"success": true`, or `{"success": false, "error": ...}`
//! - `GET /api/health` answered with [`HealthResponse`]
//!
//! The API key travels in the request body as plain JSON. Confidentiality
//! depends entirely on the deployment serving the endpoint over HTTPS.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Error, Result};
use crate::types::ResultPayload;

pub const PARSE_PDF_PATH: &str = "/api/parse_pdf";
pub const HEALTH_PATH: &str = "/api/health";
pub const PDF_MIME: &str = "application/pdf";

const FALLBACK_API_ERROR: &str = "Failed to process PDF";

/// Request body for the parse endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParseRequest {
    pub pdf_content: String,
    pub api_key: String,
}

impl ParseRequest {
    /// Encode raw PDF bytes; the key is trimmed and may end up empty
    pub fn from_pdf(pdf: &[u8], api_key: &str) -> Self {
        Self {
            pdf_content: STANDARD.encode(pdf),
            api_key: api_key.trim().to_string(),
        }
    }
}

/// Health probe body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    #[serde(default)]
    pub message: String,
}

pub fn is_success_status(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Map one HTTP reply of the parse endpoint onto a payload or an error
///
/// Non-2xx wins over whatever the body says. Only a JSON `true` counts as
/// success; `1` or `"true"` do not. A `success: true` body that does not
/// carry a complete payload is reported as an API error, never rendered
/// partially.
pub fn interpret_response(status: u16, body: &str) -> Result<ResultPayload> {
    if !is_success_status(status) {
        return Err(Error::Network { status });
    }

    let value: Value = serde_json::from_str(body)?;

    let success = value.get("success").and_then(Value::as_bool).unwrap_or(false);
    if !success {
        let message = value
            .get("error")
            .and_then(Value::as_str)
            .filter(|m| !m.is_empty())
            .unwrap_or(FALLBACK_API_ERROR);
        return Err(Error::Api(message.to_string()));
    }

    serde_json::from_value(value).map_err(|e| Error::Api(format!("Malformed response: {}", e)))
}

pub fn interpret_health(status: u16, body: &str) -> Result<HealthResponse> {
    if !is_success_status(status) {
        return Err(Error::Network { status });
    }
    Ok(serde_json::from_str(body)?)
}

pub fn is_pdf_mime(mime: &str) -> bool {
    mime == PDF_MIME
}

/// `%PDF-` header check for callers that have no MIME type to go on
pub fn looks_like_pdf(bytes: &[u8]) -> bool {
    bytes.starts_with(b"%PDF-")
}

/// Join a base endpoint and an API path; an empty base means same origin
pub fn join_url(base: &str, path: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DisplayValue;

    const SUCCESS_BODY: &str = r#"{
        "success": true,
        "scheme": "2022",
        "branch": "CS",
        "sgpa": 8.67,
        "subjects": [
            {"code": "BCS401", "name": "ANALYSIS & DESIGN OF ALGORITHMS", "internal": 45,
             "external": 36, "total": 81, "result": "P", "credits": 3, "grade": "A+",
             "grade_point": 9, "credit_points": 27},
            {"code": "BCS402", "name": "MICROCONTROLLERS", "internal": 20,
             "external": 12, "total": 32, "result": "F", "credits": 4, "grade": "F",
             "grade_point": 0, "credit_points": 0}
        ],
        "summary": {"total_internal": 65, "total_external": 48, "total_overall": 113,
                    "total_subjects": 2, "passed_subjects": 1, "total_credits": 7,
                    "total_credit_points": 27}
    }"#;

    #[test]
    fn test_request_encodes_base64_and_trims_key() {
        let request = ParseRequest::from_pdf(b"%PDF-1.4", "  AIza-key \n");
        assert_eq!(request.pdf_content, "JVBERi0xLjQ=");
        assert_eq!(request.api_key, "AIza-key");
    }

    #[test]
    fn test_request_json_field_names() {
        let request = ParseRequest::from_pdf(b"x", "");
        let json = serde_json::to_string(&request).unwrap();
        assert_eq!(json, r#"{"pdf_content":"eA==","api_key":""}"#);
    }

    #[test]
    fn test_interpret_success() {
        let payload = interpret_response(200, SUCCESS_BODY).unwrap();
        assert_eq!(payload.scheme, "2022");
        assert_eq!(payload.sgpa, DisplayValue::Float(8.67));
        assert_eq!(payload.subjects.len(), 2);
        assert_eq!(payload.subjects[1].code.to_string(), "BCS402");
        assert_eq!(payload.summary.total_overall, Some(DisplayValue::Int(113)));
    }

    #[test]
    fn test_interpret_non_2xx_is_network_error() {
        let err = interpret_response(400, r#"{"success": false, "error": "No PDF content provided"}"#)
            .unwrap_err();
        assert!(matches!(err, Error::Network { status: 400 }));
        assert!(err.to_string().contains("400"));
    }

    #[test]
    fn test_interpret_api_error_is_verbatim() {
        let err = interpret_response(200, r#"{"success": false, "error": "X"}"#).unwrap_err();
        assert!(matches!(err, Error::Api(_)));
        assert_eq!(err.to_string(), "X");
    }

    #[test]
    fn test_interpret_missing_success_uses_fallback() {
        let err = interpret_response(200, r#"{"scheme": "2022"}"#).unwrap_err();
        assert_eq!(err.to_string(), "Failed to process PDF");

        let err = interpret_response(200, r#"{"success": false, "error": ""}"#).unwrap_err();
        assert_eq!(err.to_string(), "Failed to process PDF");
    }

    #[test]
    fn test_interpret_success_must_be_boolean() {
        for flag in [r#"1"#, r#""true""#, "null"] {
            let body = SUCCESS_BODY.replacen(r#""success": true"#, &format!(r#""success": {}"#, flag), 1);
            let err = interpret_response(200, &body).unwrap_err();
            assert_eq!(err.to_string(), "Failed to process PDF");
        }
    }

    #[test]
    fn test_interpret_malformed_success_is_api_error() {
        let err = interpret_response(200, r#"{"success": true, "scheme": "2022"}"#).unwrap_err();
        assert!(matches!(err, Error::Api(ref m) if m.starts_with("Malformed response")));
    }

    #[test]
    fn test_interpret_invalid_json() {
        let err = interpret_response(200, "<html>gateway</html>").unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn test_interpret_health() {
        let health = interpret_health(
            200,
            r#"{"status": "healthy", "message": "VTU PDF Parser API is running"}"#,
        )
        .unwrap();
        assert_eq!(health.status, "healthy");

        assert!(matches!(interpret_health(405, "{}"), Err(Error::Network { status: 405 })));
    }

    #[test]
    fn test_pdf_detection() {
        assert!(is_pdf_mime("application/pdf"));
        assert!(!is_pdf_mime("image/png"));
        assert!(looks_like_pdf(b"%PDF-1.7\n..."));
        assert!(!looks_like_pdf(b"PK\x03\x04"));
    }

    #[test]
    fn test_join_url() {
        assert_eq!(join_url("", PARSE_PDF_PATH), "/api/parse_pdf");
        assert_eq!(
            join_url("https://sgpa.example.app/", PARSE_PDF_PATH),
            "https://sgpa.example.app/api/parse_pdf"
        );
    }
}
