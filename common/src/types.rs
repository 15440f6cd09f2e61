//! Result payload types
//!
//! Everything here is display-only. The parsing service computes grades,
//! credit points and SGPA; the client never does arithmetic on them.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque scalar as sent by the service
///
/// Marks and counters arrive as JSON integers, SGPA as a number or a string,
/// codes as strings. The original JSON type is kept so exports round-trip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DisplayValue {
    Int(i64),
    Float(f64),
    Text(String),
}

impl fmt::Display for DisplayValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DisplayValue::Int(v) => write!(f, "{}", v),
            DisplayValue::Float(v) => write!(f, "{}", v),
            DisplayValue::Text(v) => f.write_str(v),
        }
    }
}

impl From<&str> for DisplayValue {
    fn from(value: &str) -> Self {
        DisplayValue::Text(value.to_string())
    }
}

impl From<i64> for DisplayValue {
    fn from(value: i64) -> Self {
        DisplayValue::Int(value)
    }
}

impl From<f64> for DisplayValue {
    fn from(value: f64) -> Self {
        DisplayValue::Float(value)
    }
}

/// One row of the grade card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subject {
    pub code: DisplayValue,
    pub name: DisplayValue,
    pub internal: DisplayValue,
    pub external: DisplayValue,
    pub total: DisplayValue,
    /// "P" or "F"
    pub result: String,
    pub credits: DisplayValue,
    pub grade: DisplayValue,
    pub grade_point: DisplayValue,
    pub credit_points: DisplayValue,
}

impl Subject {
    pub fn is_pass(&self) -> bool {
        self.result == "P"
    }
}

/// Aggregate counters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub total_subjects: DisplayValue,
    pub passed_subjects: DisplayValue,
    pub total_credits: DisplayValue,
    pub total_credit_points: DisplayValue,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_internal: Option<DisplayValue>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_external: Option<DisplayValue>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_overall: Option<DisplayValue>,
}

/// Successful parse result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultPayload {
    pub scheme: String,
    pub branch: String,
    pub sgpa: DisplayValue,
    pub subjects: Vec<Subject>,
    pub summary: Summary,
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    pub fn subject(code: &str, total: i64, result: &str) -> Subject {
        Subject {
            code: code.into(),
            name: format!("{} NAME", code).as_str().into(),
            internal: DisplayValue::Int(45),
            external: (total - 45).into(),
            total: total.into(),
            result: result.to_string(),
            credits: DisplayValue::Int(4),
            grade: if result == "P" { "A+".into() } else { "F".into() },
            grade_point: DisplayValue::Int(if result == "P" { 9 } else { 0 }),
            credit_points: DisplayValue::Int(if result == "P" { 36 } else { 0 }),
        }
    }

    pub fn payload() -> ResultPayload {
        ResultPayload {
            scheme: "2018".to_string(),
            branch: "CS".to_string(),
            sgpa: "8.5".into(),
            subjects: vec![
                subject("18CS51", 81, "P"),
                subject("18CS52", 30, "F"),
                subject("18CS53", 88, "P"),
            ],
            summary: Summary {
                total_subjects: DisplayValue::Int(3),
                passed_subjects: DisplayValue::Int(2),
                total_credits: DisplayValue::Int(12),
                total_credit_points: DisplayValue::Int(72),
                total_internal: None,
                total_external: None,
                total_overall: None,
            },
        }
    }
}
