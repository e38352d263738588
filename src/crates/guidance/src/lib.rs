//! Health-guidance core for sahayak.
//!
//! Turns an [`AssessmentRequest`] into an [`AssessmentResult`] that is
//! always safe to hand to a UI, no matter what the text-generation provider
//! does:
//!
//! - [`engine::AssessmentEngine`] bounds the provider call with a fixed
//!   deadline and maps timeouts and failures to sentinel results.
//! - [`recover::recover`] reduces arbitrary provider text to a typed result
//!   through four ordered tiers (strict JSON, field regex, plain-text
//!   salvage, sanitize-and-default polish).
//!
//! Both halves are total with respect to their inputs: no error ever
//! propagates out of this crate.

pub mod engine;
pub mod language;
pub mod prompt;
pub mod recover;
pub mod types;

// Re-export commonly used items
pub use engine::{AssessmentEngine, ASSESSMENT_DEADLINE};
pub use language::display_language;
pub use prompt::build_prompt;
pub use recover::recover;
pub use types::{AssessmentRequest, AssessmentResult};
