//! # Lexgate HTTP Edge Module
//!
//! This module implements the HTTP edge server using axum.
//!
//! ## Endpoints
//!
//! - `GET /health` - Health check
//! - `POST /gate/decide` - Dry-run a gate decision
//! - `GET /gate/routes` - The compiled-in route table
//! - everything else - gated, then forwarded to the upstream origin
//!
//! ## Security Configuration (Environment Variables)
//!
//! - `LEXGATE_CORS_ORIGINS`: Comma-separated list of allowed origins, or "*" for all (default: localhost only)
//! - `LEXGATE_RATE_LIMIT`: Requests per second (default: 100, 0 to disable)
//! - `LEXGATE_API_KEY`: If set, `/gate/*` requires Bearer token authentication

mod auth;
mod gate;
mod handlers;
mod middleware;
mod proxy;
mod types;

// Re-exports for external use
pub use auth::get_api_key_from_env;
pub use gate::HEADER_APP_LOCALE;
pub use middleware::{create_rate_limiter, get_rate_limit_from_env};
// Re-export handlers and types for integration tests (via `lexgate::api::*`)
#[allow(unused_imports)]
pub use handlers::{decide_handler, health_handler, routes_handler};
#[allow(unused_imports)]
pub use types::{
    DecideRequest, DecideResponse, ErrorResponse, HealthResponse, RouteJson, RoutesResponse,
    ValidationErrorResponse, ViolationJson,
};

use axum::{
    Router,
    http::{HeaderValue, Method, header},
    middleware as axum_middleware,
    routing::{get, post},
};
use lexgate_core::LexgateError;
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

// =============================================================================
// SERVER STATE
// =============================================================================

/// Upstream connect/response timeout.
const UPSTREAM_TIMEOUT: Duration = Duration::from_secs(30);

/// Shared server state: the upstream origin and the HTTP client used to
/// reach it.
#[derive(Clone)]
pub struct AppState {
    /// Origin that renders allowed traffic.
    pub upstream: Arc<reqwest::Url>,
    /// Pooled client for upstream exchanges.
    pub client: reqwest::Client,
}

impl AppState {
    /// Create state for the given upstream origin.
    ///
    /// Redirects from the upstream are relayed to the browser, never
    /// followed here.
    pub fn new(upstream: &str) -> Result<Self, LexgateError> {
        let url = reqwest::Url::parse(upstream).map_err(|e| {
            LexgateError::InvalidConfig(format!("Invalid upstream '{}': {}", upstream, e))
        })?;
        let client = reqwest::Client::builder()
            .timeout(UPSTREAM_TIMEOUT)
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .map_err(|e| LexgateError::InvalidConfig(format!("Cannot build HTTP client: {}", e)))?;
        Ok(Self {
            upstream: Arc::new(url),
            client,
        })
    }
}

// =============================================================================
// CORS CONFIGURATION
// =============================================================================

/// Build CORS layer from environment configuration.
///
/// Reads `LEXGATE_CORS_ORIGINS` environment variable:
/// - If "*": allows all origins (development mode - use with caution!)
/// - If not set: defaults to localhost only (restrictive default)
/// - Otherwise: parses comma-separated list of allowed origins
fn build_cors_layer() -> CorsLayer {
    let origins_env = std::env::var("LEXGATE_CORS_ORIGINS").ok();

    match origins_env.as_deref() {
        Some("*") => {
            tracing::warn!(
                "CORS: Allowing ALL origins (LEXGATE_CORS_ORIGINS=*). This is insecure for production!"
            );
            CorsLayer::permissive()
        }
        Some(origins) => {
            let allowed_origins: Vec<HeaderValue> = origins
                .split(',')
                .filter_map(|s| {
                    let trimmed = s.trim();
                    match trimmed.parse::<HeaderValue>() {
                        Ok(hv) => {
                            tracing::info!("CORS: Allowing origin: {}", trimmed);
                            Some(hv)
                        }
                        Err(e) => {
                            tracing::warn!("CORS: Invalid origin '{}': {}", trimmed, e);
                            None
                        }
                    }
                })
                .collect();

            if allowed_origins.is_empty() {
                tracing::warn!(
                    "CORS: No valid origins in LEXGATE_CORS_ORIGINS, defaulting to localhost only"
                );
                build_localhost_cors()
            } else {
                CorsLayer::new()
                    .allow_origin(allowed_origins)
                    .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
                    .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
            }
        }
        None => {
            tracing::info!("CORS: No LEXGATE_CORS_ORIGINS set, defaulting to localhost only");
            build_localhost_cors()
        }
    }
}

/// Build a restrictive CORS layer that only allows localhost origins.
fn build_localhost_cors() -> CorsLayer {
    let localhost_origins = vec![
        "http://localhost:3000".parse::<HeaderValue>().ok(),
        "http://localhost:8080".parse::<HeaderValue>().ok(),
        "http://127.0.0.1:3000".parse::<HeaderValue>().ok(),
        "http://127.0.0.1:8080".parse::<HeaderValue>().ok(),
    ];
    let origins: Vec<HeaderValue> = localhost_origins.into_iter().flatten().collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
}

// =============================================================================
// ROUTER CREATION
// =============================================================================

/// Create the axum router with all endpoints and middleware.
///
/// Middleware stack (outer to inner):
/// 1. Tracing - logs all requests
/// 2. CORS - handles preflight requests
/// 3. Body limit - bounds buffered payloads
/// 4. Rate Limiting - protects against DoS (if enabled)
/// 5. Route Gate - redirects or passes page traffic
///
/// The `/gate/*` operator endpoints additionally require the API key
/// when one is configured; page traffic never does.
pub fn create_router(state: AppState) -> Router {
    let cors = build_cors_layer();

    // Check if rate limiting is enabled
    let rate_limit = get_rate_limit_from_env();
    let rate_limiter = if rate_limit > 0 {
        tracing::info!("Rate limiting enabled: {} requests/second", rate_limit);
        Some(create_rate_limiter(rate_limit))
    } else {
        tracing::info!("Rate limiting disabled");
        None
    };

    // Check if operator authentication is enabled
    let has_auth = get_api_key_from_env().is_some();
    if has_auth {
        tracing::info!("Operator API key authentication enabled");
    } else {
        tracing::warn!(
            "⚠️  Operator API key authentication DISABLED - /gate endpoints are publicly accessible! \
             Set LEXGATE_API_KEY environment variable to enable authentication."
        );
    }

    // Operator endpoints, optionally API-key protected
    let mut control = Router::new()
        .route("/gate/decide", post(handlers::decide_handler))
        .route("/gate/routes", get(handlers::routes_handler));
    if has_auth {
        control = control.layer(axum_middleware::from_fn(auth::api_key_auth_middleware));
    }

    // Page traffic: gated, then forwarded upstream. The gate consults
    // the bypass table itself, so layering it over /health and /gate
    // is harmless.
    let router = Router::new()
        .route("/health", get(handlers::health_handler))
        .merge(control)
        .fallback(proxy::forward_handler)
        .layer(axum_middleware::from_fn(gate::route_gate_middleware));

    // Apply rate limiting middleware
    let router = if let Some(limiter) = rate_limiter {
        router.layer(axum_middleware::from_fn_with_state(
            limiter,
            middleware::rate_limit_middleware,
        ))
    } else {
        router
    };

    // Apply tracing, CORS, and body limit (outermost layers)
    router
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors)
                .layer(axum::extract::DefaultBodyLimit::max(2 * 1024 * 1024)),
        )
        .with_state(state)
}

// =============================================================================
// SERVER STARTUP
// =============================================================================

/// Start the HTTP edge server.
pub async fn run_server(addr: &str, state: AppState) -> Result<(), LexgateError> {
    let router = create_router(state);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| LexgateError::IoError(format!("Bind failed: {}", e)))?;

    tracing::info!("Lexgate edge listening on {}", addr);

    axum::serve(listener, router)
        .await
        .map_err(|e| LexgateError::IoError(format!("Server error: {}", e)))
}
