//! # Route Classification
//!
//! Maps locale-stripped paths onto access classes.
//!
//! The route tables are hand-maintained configuration (`primitives`); a
//! path belongs to a class when it exactly equals, or is a sub-path of,
//! a listed prefix. Matching is on segment boundaries: `/dashboard/stats`
//! is under `/dashboard`, `/dashboard-x` is not.

use crate::primitives::{AUTH_PREFIXES, BYPASS_PREFIXES, PROTECTED_PREFIXES};
use serde::{Deserialize, Serialize};

// =============================================================================
// ACCESS CLASS
// =============================================================================

/// Access class of a locale-stripped path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AccessClass {
    /// No access rules; the gate always passes these through.
    Public,
    /// Requires a signed-in visitor.
    Protected,
    /// Sign-in and recovery screens; signed-in visitors are sent home.
    AuthOnly,
    /// The bare root or a bare locale code. The app has no landing page,
    /// so these resolve to login or home depending on the session.
    Entry,
}

impl AccessClass {
    /// Stable lowercase name, as used in JSON output.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            AccessClass::Public => "public",
            AccessClass::Protected => "protected",
            AccessClass::AuthOnly => "auth-only",
            AccessClass::Entry => "entry",
        }
    }
}

// =============================================================================
// CLASSIFICATION
// =============================================================================

/// True when `path` equals `prefix` or sits below it on a segment
/// boundary.
fn matches_prefix(path: &str, prefix: &str) -> bool {
    match path.strip_prefix(prefix) {
        Some("") => true,
        Some(rest) => rest.starts_with('/'),
        None => false,
    }
}

/// Classify a locale-stripped path.
///
/// Total: anything not recognized is `Public`.
#[must_use]
pub fn classify(stripped: &str) -> AccessClass {
    if stripped.is_empty() || stripped == "/" {
        return AccessClass::Entry;
    }
    if PROTECTED_PREFIXES
        .iter()
        .any(|prefix| matches_prefix(stripped, prefix))
    {
        return AccessClass::Protected;
    }
    if AUTH_PREFIXES
        .iter()
        .any(|prefix| matches_prefix(stripped, prefix))
    {
        return AccessClass::AuthOnly;
    }
    AccessClass::Public
}

/// True when the raw request path is exempt from gating entirely:
/// API calls, static assets, and the edge's own control endpoints.
#[must_use]
pub fn is_bypassed(path: &str) -> bool {
    BYPASS_PREFIXES
        .iter()
        .any(|prefix| matches_prefix(path, prefix))
}

// =============================================================================
// TESTS
// =============================================================================
