//! # Gate Primitives
//!
//! Hardcoded configuration constants for the Lexgate edge gate.
//!
//! The supported locale set, the route tables, and the redirect targets
//! are fixed configuration compiled into the binary: not
//! environment-driven, not persisted.

/// Locale codes the app ships translations for (two-letter, lowercase).
pub const SUPPORTED_LOCALES: [&str; 2] = ["en", "vi"];

/// Locale used when a path carries no recognizable locale prefix.
pub const DEFAULT_LOCALE: &str = "en";

/// Route prefixes that require a signed-in visitor.
pub const PROTECTED_PREFIXES: [&str; 6] = [
    "/dashboard",
    "/profile",
    "/settings",
    "/vocabulary",
    "/flashcards",
    "/categories",
];

/// Route prefixes that establish or recover a session.
///
/// Showing these to an already-signed-in visitor is nonsensical, so the
/// gate sends them home instead.
pub const AUTH_PREFIXES: [&str; 4] = [
    "/login",
    "/register",
    "/forgot-password",
    "/reset-password",
];

/// Path prefixes the gate never evaluates: API traffic, static assets,
/// and the edge's own control endpoints.
pub const BYPASS_PREFIXES: [&str; 5] = ["/api", "/static", "/favicon.ico", "/health", "/gate"];

/// Name of the cookie whose presence marks a signed-in visitor.
///
/// The token is opaque to the gate; authenticity and expiry are the auth
/// service's concern.
pub const SESSION_COOKIE: &str = "access_token";

/// Locale-stripped path of the sign-in page.
pub const LOGIN_PATH: &str = "/login";

/// Locale-stripped path of the signed-in landing page.
pub const HOME_PATH: &str = "/dashboard";

/// Query parameter carrying the originally requested path through the
/// login flow.
pub const CALLBACK_PARAM: &str = "callbackUrl";

/// Longest path echoed back as a `callbackUrl`.
///
/// Longer paths still evaluate normally; only the callback is dropped.
/// This bounds how much attacker-chosen data a redirect can reflect.
pub const MAX_CALLBACK_LENGTH: usize = 2048;

// =============================================================================
// BOUNDARY VALIDATION LIMITS
// =============================================================================

/// Minimum password length accepted at the boundary.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Minimum first/last name length accepted at the boundary.
pub const MIN_NAME_LENGTH: usize = 2;

/// Maximum category name length.
pub const MAX_CATEGORY_NAME_LENGTH: usize = 255;

/// Maximum category description length.
pub const MAX_CATEGORY_DESCRIPTION_LENGTH: usize = 1000;

/// Maximum word length.
pub const MAX_WORD_LENGTH: usize = 255;

/// Upper bound (inclusive) for a word's frequency score.
pub const MAX_WORD_FREQUENCY: f64 = 10.0;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_locale_is_supported() {
        assert!(SUPPORTED_LOCALES.contains(&DEFAULT_LOCALE));
    }

    #[test]
    fn route_tables_are_disjoint() {
        for prefix in PROTECTED_PREFIXES {
            assert!(!AUTH_PREFIXES.contains(&prefix));
        }
    }

    #[test]
    fn redirect_targets_are_listed() {
        // The gate must never redirect onto a path it would gate again
        // into a loop: login is auth-only, home is protected.
        assert!(AUTH_PREFIXES.contains(&LOGIN_PATH));
        assert!(PROTECTED_PREFIXES.contains(&HOME_PATH));
    }
}
