//! Core data model: the assessment request and the guaranteed-shape result.

use serde::{Deserialize, Serialize};

/// One inbound assessment request, fully resolved by the HTTP boundary.
///
/// Immutable; constructed once per call and never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentRequest {
    /// Reported symptoms, possibly empty.
    #[serde(default)]
    pub symptoms: Vec<String>,

    /// Patient age, already validated as present.
    pub age: String,

    /// Patient gender, already validated as present.
    pub gender: String,

    /// Optional free-text description of the complaint.
    pub description: Option<String>,

    /// Resolved display-language name (e.g. "Hindi (हिंदी)").
    pub target_language: String,
}

/// The UI-ready guidance object every request resolves to.
///
/// Central contract: every non-optional field always holds a defined value,
/// no matter how badly the provider output deviated from the expected
/// schema. Constructed exactly once per request and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentResult {
    /// Brief explanation of the condition. Always non-empty.
    pub summary: String,

    /// Practical recommendations, possibly empty.
    #[serde(default)]
    pub recommendations: Vec<String>,

    /// Cultural considerations (home remedies, dietary advice).
    #[serde(default)]
    pub cultural_tips: String,

    /// When to seek immediate medical attention.
    #[serde(default)]
    pub warning_signs: String,

    /// "Low Risk" | "Medium Risk" | "High Risk" | "Unknown"; free text from
    /// the provider is tolerated but normalized where a canonical value
    /// matches.
    pub risk_level: String,

    /// Whether the output came from strict parsing (tiers 1–2) rather than
    /// degraded plain-text recovery.
    pub structured_data: bool,

    /// Set when the provider call failed or timed out.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<bool>,

    /// Set when the deadline fired before the provider responded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timed_out: Option<bool>,

    /// Diagnostic copy of the recovered plain text (tier 3 only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw_text: Option<String>,
}

impl AssessmentResult {
    /// Fixed sentinel returned when the deadline fires before the provider
    /// responds. Bypasses the recovery pipeline entirely.
    pub fn timeout_sentinel() -> Self {
        Self {
            summary: "Service timed out. Please try again.".to_string(),
            recommendations: Vec::new(),
            cultural_tips: String::new(),
            warning_signs: String::new(),
            risk_level: "Unknown".to_string(),
            structured_data: false,
            error: Some(true),
            timed_out: Some(true),
            raw_text: None,
        }
    }

    /// Fixed sentinel returned when the provider call rejects before the
    /// deadline (network/auth/quota). Bypasses the recovery pipeline.
    pub fn unavailable_sentinel() -> Self {
        Self {
            summary: "Service temporarily unavailable. Please try again.".to_string(),
            recommendations: Vec::new(),
            cultural_tips: String::new(),
            warning_signs: String::new(),
            risk_level: "Unknown".to_string(),
            structured_data: false,
            error: Some(true),
            timed_out: None,
            raw_text: None,
        }
    }
}

/// Map free-text risk levels onto the canonical set where possible.
///
/// Unrecognized values pass through unchanged; they are tolerated, not
/// rejected.
pub fn normalize_risk_level(raw: &str) -> String {
    match raw.trim().to_lowercase().as_str() {
        "low" | "low risk" => "Low Risk".to_string(),
        "medium" | "medium risk" | "moderate" | "moderate risk" => "Medium Risk".to_string(),
        "high" | "high risk" => "High Risk".to_string(),
        "unknown" => "Unknown".to_string(),
        _ => raw.trim().to_string(),
    }
}
