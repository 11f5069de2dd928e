//! # Property-Based Tests
//!
//! The gate must be total, deterministic, and idempotent over arbitrary
//! path strings.

use lexgate_core::primitives::PROTECTED_PREFIXES;
use lexgate_core::{AccessClass, Decision, Locale, classify, evaluate, normalize};
use proptest::prelude::*;

// =============================================================================
// PROPERTY TESTS
// =============================================================================

proptest! {
    /// Evaluation never panics, whatever the path looks like.
    #[test]
    fn evaluation_is_total(path in ".{0,64}", authenticated: bool) {
        let _ = evaluate(&path, authenticated);
    }

    /// Same (path, credential) pair, same decision, every time.
    #[test]
    fn evaluation_is_idempotent(path in "/[a-z/.-]{0,32}", authenticated: bool) {
        prop_assert_eq!(
            evaluate(&path, authenticated),
            evaluate(&path, authenticated)
        );
    }

    /// Redirect targets are always locale-prefixed paths.
    #[test]
    fn redirects_are_locale_prefixed(path in ".{0,64}", authenticated: bool) {
        let decision = evaluate(&path, authenticated);
        if let Some(location) = decision.location() {
            let prefix = format!("/{}/", decision.locale());
            prop_assert!(location.starts_with(&prefix));
        }
    }

    /// A recognized locale prefix is stripped exactly once, and the
    /// remainder is preserved byte for byte.
    #[test]
    fn normalize_strips_exactly_one_prefix(rest in "/[a-z0-9/]{0,24}") {
        for locale in Locale::ALL {
            let path = format!("/{}{}", locale.as_str(), rest);
            let normalized = normalize(&path);
            prop_assert_eq!(normalized.locale, locale);
            prop_assert_eq!(normalized.stripped, rest.as_str());
        }
    }

    /// Protected paths without a credential always land on a login path
    /// that remembers where the visitor was headed.
    #[test]
    fn protected_paths_redirect_to_login(
        idx in 0usize..PROTECTED_PREFIXES.len(),
        sub in "[a-z0-9]{0,8}"
    ) {
        let prefix = PROTECTED_PREFIXES[idx];
        let path = if sub.is_empty() {
            prefix.to_string()
        } else {
            format!("{}/{}", prefix, sub)
        };
        match evaluate(&path, false) {
            Decision::ToLogin { callback, .. } => {
                prop_assert_eq!(callback, Some(path));
            }
            other => prop_assert!(false, "expected login redirect, got {:?}", other),
        }
    }

    /// Paths outside every table are public and always pass, signed in
    /// or not.
    #[test]
    fn unlisted_paths_pass(seg in "[a-z]{1,8}", authenticated: bool) {
        // The "zz-" prefix guarantees no table entry matches.
        let path = format!("/zz-{}", seg);
        prop_assert_eq!(classify(&path), AccessClass::Public);
        let decision = evaluate(&path, authenticated);
        prop_assert_eq!(decision.location(), None);
    }

    /// The credential bit never changes the negotiated locale.
    #[test]
    fn locale_is_credential_independent(path in ".{0,64}") {
        prop_assert_eq!(
            evaluate(&path, false).locale(),
            evaluate(&path, true).locale()
        );
    }
}
