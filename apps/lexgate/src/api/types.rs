//! # API Request/Response Types
//!
//! This module defines the JSON structures for the edge's control
//! endpoints and error bodies.

use lexgate_core::primitives::{AUTH_PREFIXES, PROTECTED_PREFIXES, SUPPORTED_LOCALES};
use lexgate_core::{AccessClass, Decision, Locale, Violation};
use serde::{Deserialize, Serialize};

// =============================================================================
// HEALTH RESPONSE
// =============================================================================

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self {
            status: "ok".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

// =============================================================================
// DECIDE REQUEST/RESPONSE
// =============================================================================

/// Dry-run request for the decision endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecideRequest {
    /// Request path to evaluate, locale prefix included.
    pub path: String,
    /// Treat the visitor as holding a session credential.
    #[serde(default)]
    pub authenticated: bool,
}

/// Decision dry-run response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecideResponse {
    /// "allow", "login", or "home".
    pub decision: String,
    /// The locale the path resolved to.
    pub locale: Locale,
    /// Redirect target when the decision is not "allow".
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub location: Option<String>,
}

impl DecideResponse {
    /// Map a gate decision into its wire form.
    #[must_use]
    pub fn from_decision(decision: &Decision) -> Self {
        Self {
            decision: decision.kind().to_string(),
            locale: decision.locale(),
            location: decision.location(),
        }
    }
}

// =============================================================================
// ROUTES RESPONSE
// =============================================================================

/// One route-table entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteJson {
    pub prefix: String,
    pub access: AccessClass,
}

/// The compiled-in route table and locale configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoutesResponse {
    pub default_locale: Locale,
    pub locales: Vec<String>,
    pub routes: Vec<RouteJson>,
}

impl RoutesResponse {
    /// Snapshot of the compiled-in route configuration.
    #[must_use]
    pub fn current() -> Self {
        let mut routes: Vec<RouteJson> = PROTECTED_PREFIXES
            .iter()
            .map(|prefix| RouteJson {
                prefix: (*prefix).to_string(),
                access: AccessClass::Protected,
            })
            .collect();
        routes.extend(AUTH_PREFIXES.iter().map(|prefix| RouteJson {
            prefix: (*prefix).to_string(),
            access: AccessClass::AuthOnly,
        }));
        routes.push(RouteJson {
            prefix: "/".to_string(),
            access: AccessClass::Entry,
        });

        Self {
            default_locale: Locale::default(),
            locales: SUPPORTED_LOCALES.iter().map(|s| (*s).to_string()).collect(),
            routes,
        }
    }
}

// =============================================================================
// ERROR RESPONSES
// =============================================================================

/// Simple error body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(msg: impl Into<String>) -> Self {
        Self { error: msg.into() }
    }
}

/// One field-level violation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViolationJson {
    pub field: String,
    pub message: String,
}

/// 422 body listing every violated rule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationErrorResponse {
    pub error: String,
    pub violations: Vec<ViolationJson>,
}

impl ValidationErrorResponse {
    /// Build from boundary policy violations.
    #[must_use]
    pub fn from_violations(violations: &[Violation]) -> Self {
        Self {
            error: "validation failed".to_string(),
            violations: violations
                .iter()
                .map(|violation| ViolationJson {
                    field: violation.field().to_string(),
                    message: violation.to_string(),
                })
                .collect(),
        }
    }
}
