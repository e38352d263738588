//! Bounded provider invocation.
//!
//! Wraps the single outbound text-generation call with a hard deadline:
//! the call and a timer race, and whichever completes first decides the
//! result. The engine is infallible: timeouts and provider failures
//! resolve to fixed sentinel results instead of errors.

use crate::prompt::build_prompt;
use crate::recover::recover;
use crate::types::{AssessmentRequest, AssessmentResult};
use llm::TextModel;
use std::sync::Arc;
use std::time::Duration;

/// Hard deadline for one provider call. Fixed; not configurable per request.
pub const ASSESSMENT_DEADLINE: Duration = Duration::from_millis(15_000);

/// Drives one assessment end to end: prompt → bounded provider call →
/// recovery pipeline (or sentinel).
pub struct AssessmentEngine {
    model: Arc<dyn TextModel>,
}

impl AssessmentEngine {
    /// Create an engine over the given provider.
    pub fn new(model: Arc<dyn TextModel>) -> Self {
        Self { model }
    }

    /// Generate a guidance result for one request. Always resolves within a
    /// small constant overhead of [`ASSESSMENT_DEADLINE`].
    pub async fn generate(&self, request: &AssessmentRequest) -> AssessmentResult {
        let prompt = build_prompt(request);
        let model = Arc::clone(&self.model);

        // The call runs as its own task so losing the race abandons it
        // without cancelling it.
        let mut call = tokio::spawn(async move { model.complete(&prompt).await });

        match tokio::time::timeout(ASSESSMENT_DEADLINE, &mut call).await {
            Ok(Ok(Ok(text))) => recover(&text),
            Ok(Ok(Err(e))) => {
                if e.is_auth_error() {
                    tracing::error!("Provider authentication failed: {}", e);
                } else {
                    tracing::warn!("Provider call failed: {}", e);
                }
                AssessmentResult::unavailable_sentinel()
            }
            Ok(Err(e)) => {
                tracing::warn!("Provider task aborted: {}", e);
                AssessmentResult::unavailable_sentinel()
            }
            Err(_elapsed) => {
                tracing::warn!(
                    "Provider call exceeded {:?} deadline, returning timeout sentinel",
                    ASSESSMENT_DEADLINE
                );
                // Drain the abandoned call on a detached task so a late
                // result is logged and dropped rather than leaked.
                tokio::spawn(async move {
                    match call.await {
                        Ok(Ok(_)) => {
                            tracing::debug!("Dropped provider response arriving after deadline")
                        }
                        Ok(Err(e)) => {
                            tracing::debug!("Provider failed after deadline: {}", e)
                        }
                        Err(_) => {}
                    }
                });
                AssessmentResult::timeout_sentinel()
            }
        }
    }
}
