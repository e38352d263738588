//! HTTP boundary for sahayak.
//!
//! Thin axum layer over the guidance core: one assessment route, request
//! validation, language resolution, and the consistent success/error JSON
//! envelopes. The core guarantees a valid result for every accepted
//! request, so the only non-200 response this crate produces is the 400
//! for missing required fields.

pub mod handlers;
pub mod models;
pub mod response;
pub mod routes;

pub use routes::{create_router, AppState};
