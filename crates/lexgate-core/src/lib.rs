//! # lexgate-core
//!
//! The deterministic route-access gate for Lexgate - THE LOGIC.
//!
//! This crate decides, for every page-bound request path, whether the
//! visitor may proceed, must be sent to the sign-in page, or must be sent
//! to the signed-in landing page. The decision is a pure function of the
//! path and the presence of a session credential.
//!
//! ## Architectural Constraints
//!
//! The CORE:
//! - Holds no state: every invocation reads only its arguments
//! - Is total: malformed paths degrade to the default locale and the
//!   public class, never to an error
//! - Is closed: the locale set and route tables are compiled in
//! - Has NO async, NO network dependencies (pure Rust)

// =============================================================================
// MODULES
// =============================================================================

pub mod error;
pub mod gate;
pub mod locale;
pub mod policy;
pub mod primitives;
pub mod routes;

// =============================================================================
// RE-EXPORTS: Gate
// =============================================================================

pub use error::LexgateError;
pub use gate::{Decision, evaluate};
pub use locale::{Locale, NormalizedPath, normalize};
pub use routes::{AccessClass, classify, is_bypassed};

// =============================================================================
// RE-EXPORTS: Boundary Policy
// =============================================================================

pub use policy::{
    CategoryInput, ForgotPasswordInput, LoginInput, ResetPasswordInput, SignUpInput, Violation,
    WordInput, validate_category, validate_forgot_password, validate_login,
    validate_reset_password, validate_sign_up, validate_word,
};
