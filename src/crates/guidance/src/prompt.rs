//! Prompt construction for the health-guidance request.
//!
//! Maps request fields deterministically into a natural-language instruction
//! block specifying the target language and the exact six-field output
//! schema the recovery pipeline expects.

use crate::types::AssessmentRequest;

/// Build the full instruction prompt for one assessment request.
pub fn build_prompt(request: &AssessmentRequest) -> String {
    let symptoms_text = request.symptoms.join(", ");
    let description = request.description.as_deref().unwrap_or("None provided");

    format!(
        r#"
You are a culturally sensitive health advisor for rural India. Generate personalized health recommendations based on:

Patient Details:
- Gender: {gender}
- Age: {age}
- Main Symptoms: {symptoms}
- Description: "{description}"
- Language: {language}

Provide specific guidance in the following JSON format structure (do not use markdown code blocks, just raw JSON):
{{
  "summary": "A brief summary (2-3 sentences) explaining the condition in simple terms.",
  "recommendations": "List of 5-7 practical, actionable recommendations. Use bullet points or numbered list in the string.",
  "culturalTips": "Cultural considerations (home remedies, dietary advice common in Indian households).",
  "warningSigns": "When to seek immediate medical attention or call 108.",
  "riskLevel": "Low Risk | Medium Risk | High Risk"
}}

IMPORTANT:
- Write ENTIRELY in {language}.
- Use simple, clear language that rural populations can understand.
- Be empathetic and reassuring.
- Do NOT provide a medical diagnosis. Use phrases like "It appears to be...", "Possible causes include...".
- For "riskLevel", estimate based on symptoms (e.g., chest pain = High Risk, mild cold = Low Risk).
"#,
        gender = request.gender,
        age = request.age,
        symptoms = symptoms_text,
        description = description,
        language = request.target_language,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_request() -> AssessmentRequest {
        AssessmentRequest {
            symptoms: vec!["fever".to_string(), "headache".to_string()],
            age: "34".to_string(),
            gender: "female".to_string(),
            description: Some("Started two days ago".to_string()),
            target_language: "Hindi (हिंदी)".to_string(),
        }
    }

    #[test]
    fn test_prompt_contains_patient_details() {
        let prompt = build_prompt(&sample_request());

        assert!(prompt.contains("Gender: female"));
        assert!(prompt.contains("Age: 34"));
        assert!(prompt.contains("Main Symptoms: fever, headache"));
        assert!(prompt.contains(r#"Description: "Started two days ago""#));
        assert!(prompt.contains("Write ENTIRELY in Hindi (हिंदी)."));
    }

    #[test]
    fn test_prompt_names_all_schema_fields() {
        let prompt = build_prompt(&sample_request());

        for field in [
            "\"summary\"",
            "\"recommendations\"",
            "\"culturalTips\"",
            "\"warningSigns\"",
            "\"riskLevel\"",
        ] {
            assert!(prompt.contains(field), "missing {} in prompt", field);
        }
    }

    #[test]
    fn test_missing_description_uses_placeholder() {
        let mut request = sample_request();
        request.description = None;

        let prompt = build_prompt(&request);
        assert!(prompt.contains(r#"Description: "None provided""#));
    }
}
