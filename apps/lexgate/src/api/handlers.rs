//! # API Endpoint Handlers
//!
//! This module implements the edge's own HTTP endpoints. Page traffic
//! never lands here; it flows through the gate middleware into the
//! upstream forwarder.

use super::types::{DecideRequest, DecideResponse, HealthResponse, RoutesResponse};
use axum::{Json, http::StatusCode, response::IntoResponse};
use lexgate_core::evaluate;

// =============================================================================
// HEALTH HANDLER
// =============================================================================

/// Health check endpoint.
pub async fn health_handler() -> impl IntoResponse {
    Json(HealthResponse::default())
}

// =============================================================================
// DECIDE HANDLER
// =============================================================================

/// Dry-run a gate decision without issuing the redirect.
///
/// Useful for operators debugging why a path redirects, and for tests
/// of fronting proxies.
pub async fn decide_handler(Json(request): Json<DecideRequest>) -> impl IntoResponse {
    let decision = evaluate(&request.path, request.authenticated);
    (StatusCode::OK, Json(DecideResponse::from_decision(&decision)))
}

// =============================================================================
// ROUTES HANDLER
// =============================================================================

/// The compiled-in route table.
pub async fn routes_handler() -> impl IntoResponse {
    (StatusCode::OK, Json(RoutesResponse::current()))
}
