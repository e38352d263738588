//! Integration tests for the bounded invoker.
//!
//! Uses virtual time (`start_paused`) so the 15-second deadline race runs
//! instantly, plus mock providers that succeed, fail, hang, or respond late.

use async_trait::async_trait;
use guidance::{AssessmentEngine, AssessmentRequest, ASSESSMENT_DEADLINE};
use llm::error::{LlmError, Result};
use llm::TextModel;
use std::sync::Arc;
use std::time::Duration;

fn sample_request() -> AssessmentRequest {
    AssessmentRequest {
        symptoms: vec!["cough".to_string()],
        age: "41".to_string(),
        gender: "male".to_string(),
        description: None,
        target_language: "English".to_string(),
    }
}

const GOOD_RESPONSE: &str = r#"{"summary":"Likely a common cold","recommendations":["Rest","Fluids"],"culturalTips":"Warm haldi milk","warningSigns":"Breathlessness","riskLevel":"Low Risk"}"#;

/// Provider that answers immediately with a fixed response.
struct InstantModel {
    response: String,
}

#[async_trait]
impl TextModel for InstantModel {
    async fn complete(&self, _prompt: &str) -> Result<String> {
        Ok(self.response.clone())
    }
}

/// Provider that rejects immediately.
struct FailingModel;

#[async_trait]
impl TextModel for FailingModel {
    async fn complete(&self, _prompt: &str) -> Result<String> {
        Err(LlmError::ProviderError("quota exhausted".to_string()))
    }
}

/// Provider that never resolves.
struct HangingModel;

#[async_trait]
impl TextModel for HangingModel {
    async fn complete(&self, _prompt: &str) -> Result<String> {
        std::future::pending::<()>().await;
        unreachable!()
    }
}

/// Provider that answers after a delay.
struct SlowModel {
    delay: Duration,
    response: String,
}

#[async_trait]
impl TextModel for SlowModel {
    async fn complete(&self, _prompt: &str) -> Result<String> {
        tokio::time::sleep(self.delay).await;
        Ok(self.response.clone())
    }
}

#[tokio::test(start_paused = true)]
async fn fast_response_is_recovered_normally() {
    let engine = AssessmentEngine::new(Arc::new(InstantModel {
        response: GOOD_RESPONSE.to_string(),
    }));

    let result = engine.generate(&sample_request()).await;

    assert_eq!(result.summary, "Likely a common cold");
    assert_eq!(result.recommendations, vec!["Rest", "Fluids"]);
    assert_eq!(result.risk_level, "Low Risk");
    assert!(result.structured_data);
    assert_eq!(result.error, None);
    assert_eq!(result.timed_out, None);
}

#[tokio::test(start_paused = true)]
async fn provider_failure_yields_unavailable_sentinel() {
    let engine = AssessmentEngine::new(Arc::new(FailingModel));

    let result = engine.generate(&sample_request()).await;

    assert_eq!(
        result.summary,
        "Service temporarily unavailable. Please try again."
    );
    assert_eq!(result.risk_level, "Unknown");
    assert_eq!(result.error, Some(true));
    assert_eq!(result.timed_out, None);
}

#[tokio::test(start_paused = true)]
async fn hanging_provider_times_out_at_the_deadline() {
    let engine = AssessmentEngine::new(Arc::new(HangingModel));

    let start = tokio::time::Instant::now();
    let result = engine.generate(&sample_request()).await;
    let elapsed = start.elapsed();

    // Not earlier than the deadline, and only a small constant overhead later
    assert!(elapsed >= ASSESSMENT_DEADLINE, "resolved early: {:?}", elapsed);
    assert!(
        elapsed < ASSESSMENT_DEADLINE + Duration::from_millis(100),
        "resolved late: {:?}",
        elapsed
    );

    assert_eq!(result.summary, "Service timed out. Please try again.");
    assert_eq!(result.risk_level, "Unknown");
    assert_eq!(result.error, Some(true));
    assert_eq!(result.timed_out, Some(true));
}

#[tokio::test(start_paused = true)]
async fn late_response_is_dropped_after_timeout() {
    // Provider resolves after the deadline; the sentinel must win and the
    // late result must be discarded without disturbing anything.
    let engine = AssessmentEngine::new(Arc::new(SlowModel {
        delay: ASSESSMENT_DEADLINE + Duration::from_secs(5),
        response: GOOD_RESPONSE.to_string(),
    }));

    let result = engine.generate(&sample_request()).await;

    assert_eq!(result.timed_out, Some(true));
    assert_eq!(result.summary, "Service timed out. Please try again.");

    // Let the abandoned call complete; the detached watcher drains it.
    tokio::time::sleep(Duration::from_secs(10)).await;
}

#[tokio::test(start_paused = true)]
async fn response_just_under_the_deadline_wins_the_race() {
    let engine = AssessmentEngine::new(Arc::new(SlowModel {
        delay: ASSESSMENT_DEADLINE - Duration::from_millis(10),
        response: GOOD_RESPONSE.to_string(),
    }));

    let result = engine.generate(&sample_request()).await;

    assert_eq!(result.timed_out, None);
    assert_eq!(result.summary, "Likely a common cold");
}
