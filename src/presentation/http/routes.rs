//! Route Configuration
//!
//! Configures all HTTP routes for the API.

use axum::{routing::get, Router};

use super::handlers;
use crate::startup::AppState;

/// Create the main API router
///
/// The collection paths keep their trailing slash; nesting would register
/// the inner root at `/ad` only and 404 the canonical `/ad/` form.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/ad/",
            get(handlers::ad::list_ads).post(handlers::ad::create_ad),
        )
        .route("/ad/{ad_id}", get(handlers::ad::get_ad))
        // Health check endpoint
        .route("/health", get(handlers::health::health_check))
        .with_state(state)
}
