//! Endpoint handlers.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use guidance::{display_language, AssessmentRequest};
use serde_json::json;

use crate::models::{non_empty, value_to_text, GenerateAssessmentBody};
use crate::response;
use crate::routes::AppState;

/// Liveness check
///
/// GET /
pub async fn health() -> impl IntoResponse {
    Json(json!({ "message": "Sahayak backend is running" }))
}

/// Generate a health assessment
///
/// POST /api/assessment/generate
pub async fn generate(
    State(app_state): State<AppState>,
    Json(body): Json<GenerateAssessmentBody>,
) -> axum::response::Response {
    let age = body.age.as_ref().and_then(value_to_text);
    let gender = non_empty(&body.gender);
    let language = non_empty(&body.language);

    let (Some(age), Some(gender), Some(language)) = (age, gender, language) else {
        return response::bad_request("Missing required fields: age, gender, or language")
            .into_response();
    };

    let request = AssessmentRequest {
        symptoms: body.symptoms,
        age,
        gender,
        description: non_empty(&body.description),
        target_language: display_language(&language).to_string(),
    };

    let result = app_state.engine.generate(&request).await;

    // Sentinel results still serialize as success; degraded service is
    // visible only through the error/timedOut fields.
    response::ok(result).into_response()
}
