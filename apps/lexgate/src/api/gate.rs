//! # Route Gate Middleware
//!
//! Applies the access gate to every page-bound request: bypassed paths
//! pass straight through, redirect decisions are answered here, and
//! allowed requests continue to the upstream forwarder with the
//! negotiated locale attached.

use axum::{
    body::Body,
    http::{HeaderMap, HeaderName, HeaderValue, Request, StatusCode, header},
    middleware::Next,
    response::Response,
};
use lexgate_core::{evaluate, is_bypassed, primitives::SESSION_COOKIE};

/// Header carrying the negotiated locale to the upstream localization
/// layer.
pub const HEADER_APP_LOCALE: &str = "x-app-locale";

// =============================================================================
// GATE MIDDLEWARE
// =============================================================================

/// Route gate middleware.
///
/// A pure per-request decision: no locks, no I/O, no state across
/// invocations. The session cookie's presence is the only credential
/// signal; the token itself is never inspected.
pub async fn route_gate_middleware(mut request: Request<Body>, next: Next) -> Response {
    let path = request.uri().path().to_string();

    if is_bypassed(&path) {
        return next.run(request).await;
    }

    let authenticated = has_session_cookie(request.headers());
    let decision = evaluate(&path, authenticated);

    match decision.location() {
        None => {
            // Locale negotiation is delegated upstream; the edge only
            // reports which locale the path resolved to. Always
            // overwrite so clients cannot smuggle their own value.
            request.headers_mut().insert(
                HeaderName::from_static(HEADER_APP_LOCALE),
                HeaderValue::from_static(decision.locale().as_str()),
            );
            next.run(request).await
        }
        Some(target) => {
            tracing::debug!(
                path = %path,
                authenticated,
                target = %target,
                "Gated request redirected"
            );
            redirect_response(&target)
        }
    }
}

/// Build the 307 answer for a redirect decision.
fn redirect_response(target: &str) -> Response {
    let mut response = Response::new(Body::empty());
    *response.status_mut() = StatusCode::TEMPORARY_REDIRECT;
    if let Ok(value) = HeaderValue::from_str(target) {
        response.headers_mut().insert(header::LOCATION, value);
    }
    response
}

// =============================================================================
// SESSION COOKIE
// =============================================================================

/// True when the session cookie is present with a non-empty value.
pub fn has_session_cookie(headers: &HeaderMap) -> bool {
    let Some(cookies) = headers.get(header::COOKIE).and_then(|v| v.to_str().ok()) else {
        return false;
    };
    let prefix = format!("{}=", SESSION_COOKIE);
    cookies
        .split(';')
        .map(str::trim)
        .any(|cookie| {
            cookie
                .strip_prefix(prefix.as_str())
                .is_some_and(|value| !value.is_empty())
        })
}

// =============================================================================
// TESTS
// =============================================================================
