//! # Upstream Forwarder
//!
//! Relays gated page traffic and API calls to the upstream origin.
//!
//! Write payloads for the known API endpoints are validated against the
//! boundary policy before they leave the edge: unparseable JSON is 400,
//! rule violations are 422 with the complete violation list. Everything
//! else is forwarded byte for byte; the edge does not re-model the API's
//! resources.

use super::AppState;
use super::types::{ErrorResponse, ValidationErrorResponse};
use axum::{
    Json,
    body::{Body, Bytes},
    extract::State,
    http::{HeaderMap, HeaderName, Method, Request, StatusCode, Uri, header},
    response::{IntoResponse, Response},
};
use lexgate_core::{
    LexgateError, Violation, validate_category, validate_forgot_password, validate_login,
    validate_reset_password, validate_sign_up, validate_word,
};

/// Request bodies above this size are rejected before validation.
const MAX_FORWARD_BODY: usize = 2 * 1024 * 1024;

// =============================================================================
// FORWARD HANDLER
// =============================================================================

/// Fallback handler: validate when applicable, then forward upstream.
pub async fn forward_handler(State(state): State<AppState>, request: Request<Body>) -> Response {
    let (parts, body) = request.into_parts();

    let bytes = match axum::body::to_bytes(body, MAX_FORWARD_BODY).await {
        Ok(bytes) => bytes,
        Err(_) => {
            return (
                StatusCode::PAYLOAD_TOO_LARGE,
                Json(ErrorResponse::new("Request body too large")),
            )
                .into_response();
        }
    };

    if let Some(rejection) = validate_payload(&parts.method, parts.uri.path(), &bytes) {
        return rejection;
    }

    match forward(&state, &parts.method, &parts.uri, &parts.headers, bytes).await {
        Ok(response) => response,
        Err(e) => {
            tracing::error!(error = %e, path = %parts.uri.path(), "Upstream forwarding failed");
            (
                StatusCode::BAD_GATEWAY,
                Json(ErrorResponse::new(format!("Upstream unavailable: {}", e))),
            )
                .into_response()
        }
    }
}

// =============================================================================
// BOUNDARY VALIDATION
// =============================================================================

/// Run boundary validation for the known write endpoints.
///
/// Returns the ready rejection response, or `None` when the request may
/// proceed upstream. Endpoints outside the table (including the
/// category/word membership sub-resources) are never validated here.
fn validate_payload(method: &Method, path: &str, body: &Bytes) -> Option<Response> {
    if *method != Method::POST && *method != Method::PUT {
        return None;
    }

    let checked: Result<Vec<Violation>, serde_json::Error> = match path {
        "/api/auth/login" if *method == Method::POST => {
            serde_json::from_slice(body).map(|input| validate_login(&input))
        }
        "/api/auth/register" if *method == Method::POST => {
            serde_json::from_slice(body).map(|input| validate_sign_up(&input))
        }
        "/api/auth/forgot-password" if *method == Method::POST => {
            serde_json::from_slice(body).map(|input| validate_forgot_password(&input))
        }
        "/api/auth/reset-password" if *method == Method::POST => {
            serde_json::from_slice(body).map(|input| validate_reset_password(&input))
        }
        _ if is_collection_write(method, path, "/api/categories") => {
            serde_json::from_slice(body).map(|input| validate_category(&input))
        }
        _ if is_collection_write(method, path, "/api/words") => {
            serde_json::from_slice(body).map(|input| validate_word(&input))
        }
        _ => return None,
    };

    match checked {
        Err(e) => Some(
            (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::new(format!("Invalid JSON body: {}", e))),
            )
                .into_response(),
        ),
        Ok(violations) if violations.is_empty() => None,
        Ok(violations) => Some(
            (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(ValidationErrorResponse::from_violations(&violations)),
            )
                .into_response(),
        ),
    }
}

/// POST on the collection itself, or PUT on a single item.
fn is_collection_write(method: &Method, path: &str, base: &str) -> bool {
    if *method == Method::POST {
        path == base
    } else if *method == Method::PUT {
        is_item_path(path, base)
    } else {
        false
    }
}

/// `{base}/{id}` with a single non-empty trailing segment.
fn is_item_path(path: &str, base: &str) -> bool {
    path.strip_prefix(base)
        .and_then(|rest| rest.strip_prefix('/'))
        .is_some_and(|id| !id.is_empty() && !id.contains('/'))
}

// =============================================================================
// UPSTREAM EXCHANGE
// =============================================================================

/// Forward one request to the upstream origin and relay its response.
async fn forward(
    state: &AppState,
    method: &Method,
    uri: &Uri,
    headers: &HeaderMap,
    body: Bytes,
) -> Result<Response, LexgateError> {
    let path_and_query = uri
        .path_and_query()
        .map_or_else(|| uri.path().to_string(), |pq| pq.as_str().to_string());

    let target = state
        .upstream
        .join(&path_and_query)
        .map_err(|e| LexgateError::UpstreamError(format!("Invalid target path: {}", e)))?;

    let mut upstream_request = state.client.request(method.clone(), target);
    for (name, value) in headers {
        if !is_hop_by_hop(name) && *name != header::HOST {
            upstream_request = upstream_request.header(name.clone(), value.clone());
        }
    }

    let upstream_response = upstream_request
        .body(body)
        .send()
        .await
        .map_err(|e| LexgateError::UpstreamError(e.to_string()))?;

    let status = upstream_response.status();
    let response_headers = upstream_response.headers().clone();
    let response_body = upstream_response
        .bytes()
        .await
        .map_err(|e| LexgateError::UpstreamError(e.to_string()))?;

    let mut response = Response::new(Body::from(response_body));
    *response.status_mut() = status;
    for (name, value) in &response_headers {
        // Content-length is recomputed from the relayed body.
        if !is_hop_by_hop(name) && *name != header::CONTENT_LENGTH {
            response.headers_mut().append(name.clone(), value.clone());
        }
    }
    Ok(response)
}

/// Hop-by-hop headers are never forwarded in either direction.
fn is_hop_by_hop(name: &HeaderName) -> bool {
    matches!(
        name.as_str(),
        "connection"
            | "keep-alive"
            | "proxy-authenticate"
            | "proxy-authorization"
            | "te"
            | "trailer"
            | "transfer-encoding"
            | "upgrade"
    )
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_path_matching() {
        assert!(is_item_path("/api/words/42", "/api/words"));
        assert!(!is_item_path("/api/words", "/api/words"));
        assert!(!is_item_path("/api/words/", "/api/words"));
        assert!(!is_item_path("/api/words/42/extra", "/api/words"));
        assert!(!is_item_path("/api/wordsmith/42", "/api/words"));
    }

    #[test]
    fn collection_write_matching() {
        assert!(is_collection_write(&Method::POST, "/api/categories", "/api/categories"));
        assert!(is_collection_write(&Method::PUT, "/api/categories/7", "/api/categories"));
        assert!(!is_collection_write(&Method::PUT, "/api/categories", "/api/categories"));
        assert!(!is_collection_write(&Method::POST, "/api/categories/7", "/api/categories"));
        assert!(!is_collection_write(&Method::DELETE, "/api/categories/7", "/api/categories"));
        // Membership sub-resources are not shaped like the collection payloads.
        assert!(!is_collection_write(&Method::POST, "/api/categories/7/words", "/api/categories"));
    }

    #[test]
    fn unknown_endpoints_skip_validation() {
        let body = Bytes::from_static(b"not json at all");
        assert!(validate_payload(&Method::POST, "/api/auth/logout", &body).is_none());
        assert!(validate_payload(&Method::GET, "/api/words", &body).is_none());
        assert!(validate_payload(&Method::POST, "/api/categories/7/words", &body).is_none());
    }

    #[test]
    fn malformed_json_is_rejected() {
        let body = Bytes::from_static(b"{");
        let response = validate_payload(&Method::POST, "/api/auth/login", &body)
            .expect("rejection expected");
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn valid_payload_passes() {
        let body = Bytes::from_static(br#"{"email":"a@b.co","password":"hunter2"}"#);
        assert!(validate_payload(&Method::POST, "/api/auth/login", &body).is_none());
    }

    #[test]
    fn rule_violations_are_unprocessable() {
        let body = Bytes::from_static(br#"{"email":"nope","password":""}"#);
        let response = validate_payload(&Method::POST, "/api/auth/login", &body)
            .expect("rejection expected");
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn hop_by_hop_headers_are_filtered() {
        assert!(is_hop_by_hop(&HeaderName::from_static("connection")));
        assert!(is_hop_by_hop(&HeaderName::from_static("transfer-encoding")));
        assert!(!is_hop_by_hop(&HeaderName::from_static("content-type")));
        assert!(!is_hop_by_hop(&HeaderName::from_static("cookie")));
    }
}
