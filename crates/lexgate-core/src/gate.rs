//! # Route Access Gate
//!
//! The per-request decision: allow, send to login, or send home.
//!
//! `evaluate` is a pure decision table over `(AccessClass,
//! credential-presence)`. It performs no I/O, holds no state across
//! invocations, and is total: malformed input degrades to the default
//! locale and the public class instead of failing.

use crate::locale::{Locale, normalize};
use crate::primitives::{CALLBACK_PARAM, HOME_PATH, LOGIN_PATH, MAX_CALLBACK_LENGTH};
use crate::routes::{AccessClass, classify};

// =============================================================================
// DECISION
// =============================================================================

/// Outcome of gating one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// Render normally. Carries the negotiated locale for the upstream
    /// localization layer.
    Allow {
        /// The locale the path resolved to.
        locale: Locale,
    },
    /// Send the visitor to the sign-in page, optionally remembering
    /// where they were headed.
    ToLogin {
        /// The locale the path resolved to.
        locale: Locale,
        /// The originally requested path, echoed through the login flow.
        callback: Option<String>,
    },
    /// The visitor is already signed in; send them home.
    ToHome {
        /// The locale the path resolved to.
        locale: Locale,
    },
}

impl Decision {
    /// The negotiated locale, regardless of outcome.
    #[must_use]
    pub const fn locale(&self) -> Locale {
        match self {
            Decision::Allow { locale }
            | Decision::ToLogin { locale, .. }
            | Decision::ToHome { locale } => *locale,
        }
    }

    /// Stable lowercase name, as used in JSON output.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Decision::Allow { .. } => "allow",
            Decision::ToLogin { .. } => "login",
            Decision::ToHome { .. } => "home",
        }
    }

    /// The redirect target, if any, as a locale-prefixed path.
    #[must_use]
    pub fn location(&self) -> Option<String> {
        match self {
            Decision::Allow { .. } => None,
            Decision::ToLogin { locale, callback } => {
                let mut target = format!("/{}{}", locale, LOGIN_PATH);
                if let Some(original) = callback {
                    target.push('?');
                    target.push_str(CALLBACK_PARAM);
                    target.push('=');
                    target.push_str(&urlencoding::encode(original));
                }
                Some(target)
            }
            Decision::ToHome { locale } => Some(format!("/{}{}", locale, HOME_PATH)),
        }
    }
}

// =============================================================================
// EVALUATION
// =============================================================================

/// Gate one request.
///
/// `authenticated` is presence of the session cookie; the token itself
/// is never inspected here.
#[must_use]
pub fn evaluate(path: &str, authenticated: bool) -> Decision {
    let normalized = normalize(path);
    let locale = normalized.locale;

    match (classify(normalized.stripped), authenticated) {
        (AccessClass::Protected, false) => Decision::ToLogin {
            locale,
            callback: callback_for(path),
        },
        (AccessClass::Entry, false) => Decision::ToLogin {
            locale,
            callback: None,
        },
        (AccessClass::Entry | AccessClass::AuthOnly, true) => Decision::ToHome { locale },
        (AccessClass::Protected, true)
        | (AccessClass::AuthOnly, false)
        | (AccessClass::Public, _) => Decision::Allow { locale },
    }
}

/// The original path, if it is small enough to echo into a redirect.
fn callback_for(path: &str) -> Option<String> {
    if path.len() > MAX_CALLBACK_LENGTH {
        None
    } else {
        Some(path.to_string())
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn protected_without_credential_goes_to_login_with_callback() {
        let decision = evaluate("/dashboard", false);
        assert_eq!(
            decision,
            Decision::ToLogin {
                locale: Locale::En,
                callback: Some("/dashboard".to_string()),
            }
        );
        assert_eq!(
            decision.location().as_deref(),
            Some("/en/login?callbackUrl=%2Fdashboard")
        );
    }

    #[test]
    fn locale_prefix_survives_into_redirect() {
        let decision = evaluate("/vi/dashboard", false);
        assert_eq!(decision.locale(), Locale::Vi);
        assert_eq!(
            decision.location().as_deref(),
            Some("/vi/login?callbackUrl=%2Fvi%2Fdashboard")
        );
    }

    #[test]
    fn protected_with_credential_is_allowed() {
        assert_eq!(
            evaluate("/vocabulary/42", true),
            Decision::Allow { locale: Locale::En }
        );
    }

    #[test]
    fn auth_route_with_credential_goes_home() {
        assert_eq!(
            evaluate("/login", true).location().as_deref(),
            Some("/en/dashboard")
        );
        assert_eq!(
            evaluate("/en/register", true).location().as_deref(),
            Some("/en/dashboard")
        );
    }

    #[test]
    fn auth_route_without_credential_is_allowed() {
        assert_eq!(
            evaluate("/login", false),
            Decision::Allow { locale: Locale::En }
        );
        assert_eq!(
            evaluate("/vi/reset-password", false),
            Decision::Allow { locale: Locale::Vi }
        );
    }

    #[test]
    fn root_without_credential_goes_to_login_without_callback() {
        let decision = evaluate("/", false);
        assert_eq!(
            decision,
            Decision::ToLogin {
                locale: Locale::En,
                callback: None,
            }
        );
        assert_eq!(decision.location().as_deref(), Some("/en/login"));
    }

    #[test]
    fn root_with_credential_goes_home() {
        assert_eq!(
            evaluate("/", true).location().as_deref(),
            Some("/en/dashboard")
        );
    }

    #[test]
    fn bare_locale_behaves_like_root() {
        assert_eq!(evaluate("/vi", false).location().as_deref(), Some("/vi/login"));
        assert_eq!(
            evaluate("/vi", true).location().as_deref(),
            Some("/vi/dashboard")
        );
    }

    #[test]
    fn public_paths_pass_regardless_of_credential() {
        assert_eq!(
            evaluate("/about", false),
            Decision::Allow { locale: Locale::En }
        );
        assert_eq!(
            evaluate("/about", true),
            Decision::Allow { locale: Locale::En }
        );
    }

    #[test]
    fn callback_is_percent_encoded() {
        let decision = evaluate("/vocabulary/a b?x=1", false);
        // The query string is part of the request target, not the path;
        // callers pass the path only. Whatever arrives is encoded whole.
        let location = decision.location().expect("redirect");
        assert!(location.starts_with("/en/login?callbackUrl="));
        assert!(!location.contains(' '));
    }

    #[test]
    fn oversized_paths_lose_the_callback_only() {
        let long = format!("/dashboard/{}", "x".repeat(4096));
        let decision = evaluate(&long, false);
        assert_eq!(
            decision,
            Decision::ToLogin {
                locale: Locale::En,
                callback: None,
            }
        );
    }
}
