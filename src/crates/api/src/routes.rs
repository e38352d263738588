//! API route definitions.

use axum::{
    routing::{get, post},
    Router,
};
use guidance::AssessmentEngine;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<AssessmentEngine>,
}

/// Build the complete API router
pub fn create_router(engine: Arc<AssessmentEngine>) -> Router {
    let app_state = AppState { engine };

    Router::new()
        // Liveness check
        .route("/", get(handlers::health))
        // Assessment endpoint
        .route("/api/assessment/generate", post(handlers::generate))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}
