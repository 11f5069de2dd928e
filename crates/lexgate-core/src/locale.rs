//! # Locale Normalization
//!
//! Strips the optional locale prefix from an incoming path and resolves
//! the active locale.
//!
//! Resolution is intentionally shallow: the gate only needs to know which
//! locale to prefix its redirects with. Rendering-language negotiation is
//! the upstream localization layer's concern.

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// LOCALE
// =============================================================================

/// A supported interface locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// English (the default).
    En,
    /// Vietnamese.
    Vi,
}

impl Locale {
    /// All supported locales, in declaration order.
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Vi];

    /// The two-letter code for this locale.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Vi => "vi",
        }
    }

    /// Parse a two-letter code. Returns `None` for unsupported codes.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|locale| locale.as_str() == code)
    }
}

impl Default for Locale {
    fn default() -> Self {
        Locale::En
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// NORMALIZATION
// =============================================================================

/// A request path with its locale prefix resolved and removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NormalizedPath<'a> {
    /// The active locale: the stripped prefix, or the default.
    pub locale: Locale,
    /// The path with the locale prefix removed. A bare locale segment
    /// normalizes to `/`.
    pub stripped: &'a str,
}

/// Split the optional locale prefix off a path.
///
/// Total over arbitrary strings: anything that does not start with a
/// supported `/{code}` segment resolves to the default locale with the
/// path untouched.
#[must_use]
pub fn normalize(path: &str) -> NormalizedPath<'_> {
    if let Some(rest) = path.strip_prefix('/') {
        let (head, tail) = match rest.find('/') {
            Some(idx) => (&rest[..idx], &rest[idx..]),
            None => (rest, ""),
        };
        if let Some(locale) = Locale::from_code(head) {
            let stripped = if tail.is_empty() { "/" } else { tail };
            return NormalizedPath { locale, stripped };
        }
    }

    NormalizedPath {
        locale: Locale::default(),
        stripped: path,
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::{DEFAULT_LOCALE, SUPPORTED_LOCALES};

    #[test]
    fn locale_enum_matches_primitives() {
        let codes: Vec<&str> = Locale::ALL.iter().map(|locale| locale.as_str()).collect();
        assert_eq!(codes, SUPPORTED_LOCALES);
        assert_eq!(Locale::default().as_str(), DEFAULT_LOCALE);
    }

    #[test]
    fn from_code_roundtrip() {
        for locale in Locale::ALL {
            assert_eq!(Locale::from_code(locale.as_str()), Some(locale));
        }
        assert_eq!(Locale::from_code("fr"), None);
        assert_eq!(Locale::from_code(""), None);
        assert_eq!(Locale::from_code("EN"), None);
    }

    #[test]
    fn normalize_strips_locale_prefix() {
        let normalized = normalize("/vi/dashboard");
        assert_eq!(normalized.locale, Locale::Vi);
        assert_eq!(normalized.stripped, "/dashboard");
    }

    #[test]
    fn normalize_bare_locale_becomes_root() {
        let normalized = normalize("/vi");
        assert_eq!(normalized.locale, Locale::Vi);
        assert_eq!(normalized.stripped, "/");

        let trailing = normalize("/en/");
        assert_eq!(trailing.locale, Locale::En);
        assert_eq!(trailing.stripped, "/");
    }

    #[test]
    fn normalize_without_prefix_uses_default() {
        let normalized = normalize("/dashboard");
        assert_eq!(normalized.locale, Locale::En);
        assert_eq!(normalized.stripped, "/dashboard");
    }

    #[test]
    fn normalize_ignores_locale_lookalikes() {
        // "/view" starts with "vi" but is not a locale segment.
        let normalized = normalize("/view");
        assert_eq!(normalized.locale, Locale::En);
        assert_eq!(normalized.stripped, "/view");

        // A locale code only counts as a leading segment.
        let inner = normalize("/docs/vi");
        assert_eq!(inner.locale, Locale::En);
        assert_eq!(inner.stripped, "/docs/vi");
    }

    #[test]
    fn normalize_is_total_on_malformed_input() {
        for path in ["", "no-slash", "//", "/../..", "/vi/vi/vi"] {
            let normalized = normalize(path);
            assert!(Locale::ALL.contains(&normalized.locale));
        }
        // Only one prefix is ever stripped.
        assert_eq!(normalize("/vi/vi/vi").stripped, "/vi/vi");
    }
}
