//! Request models for the assessment API.

use serde::Deserialize;
use serde_json::Value;

/// Body of `POST /api/assessment/generate`.
///
/// Clients send age as either a string or a number, so the required fields
/// arrive as raw JSON values and are validated/stringified in the handler.
#[derive(Debug, Deserialize)]
pub struct GenerateAssessmentBody {
    #[serde(default)]
    pub symptoms: Vec<String>,
    pub age: Option<Value>,
    pub gender: Option<String>,
    pub description: Option<String>,
    pub language: Option<String>,
}

/// Render a JSON scalar as the non-empty text it carries, if any.
pub fn value_to_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// A present, non-empty string field.
pub fn non_empty(field: &Option<String>) -> Option<String> {
    field
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_accepts_numeric_age() {
        let body: GenerateAssessmentBody = serde_json::from_str(
            r#"{"symptoms":["fever"],"age":34,"gender":"female","language":"hi"}"#,
        )
        .unwrap();

        assert_eq!(value_to_text(body.age.as_ref().unwrap()).as_deref(), Some("34"));
    }

    #[test]
    fn test_body_accepts_string_age() {
        let body: GenerateAssessmentBody =
            serde_json::from_str(r#"{"age":"34","gender":"female","language":"hi"}"#).unwrap();

        assert!(body.symptoms.is_empty());
        assert_eq!(value_to_text(body.age.as_ref().unwrap()).as_deref(), Some("34"));
    }

    #[test]
    fn test_blank_values_are_treated_as_missing() {
        assert_eq!(value_to_text(&Value::String("  ".to_string())), None);
        assert_eq!(value_to_text(&Value::Null), None);
        assert_eq!(non_empty(&Some("  ".to_string())), None);
        assert_eq!(non_empty(&None), None);
        assert_eq!(non_empty(&Some(" hi ".to_string())).as_deref(), Some("hi"));
    }
}
