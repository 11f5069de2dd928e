//! # Boundary Validation Policy
//!
//! Validation rules for the write payloads the edge forwards to the API:
//! sign-in, sign-up, password recovery, categories, and words.
//!
//! Validators return every violated rule rather than short-circuiting,
//! so a client sees the complete list in one round trip. The upstream
//! API remains the authority; these rules only stop requests that could
//! never succeed. Fields absent from a payload are left for the API to
//! judge (updates may be partial).

use crate::primitives::{
    MAX_CATEGORY_DESCRIPTION_LENGTH, MAX_CATEGORY_NAME_LENGTH, MAX_WORD_FREQUENCY,
    MAX_WORD_LENGTH, MIN_NAME_LENGTH, MIN_PASSWORD_LENGTH,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

// =============================================================================
// PAYLOADS
// =============================================================================

/// Sign-in payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginInput {
    pub email: String,
    pub password: String,
    /// Extends the session cookie lifetime; not validated here.
    #[serde(default)]
    pub remember_me: bool,
}

/// Sign-up payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignUpInput {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

/// Password-recovery request payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForgotPasswordInput {
    pub email: String,
}

/// Password-reset payload. The token comes from the recovery email and
/// is verified upstream.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetPasswordInput {
    pub password: String,
    pub confirm_password: String,
    pub token: String,
}

/// Category create/update payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryInput {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Word create/update payload. Updates may be partial, so every field is
/// optional; present fields are validated.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordInput {
    #[serde(default)]
    pub word: Option<String>,
    #[serde(default)]
    pub meaning: Option<String>,
    #[serde(default)]
    pub ipa: Option<String>,
    #[serde(default)]
    pub frequency: Option<f64>,
    #[serde(default)]
    pub category_ids: Option<Vec<u64>>,
}

// =============================================================================
// VIOLATIONS
// =============================================================================

/// A single validation rule failure.
///
/// Messages are terse and english-only: the browser app localizes its
/// own form errors, these surface in API error bodies and logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Violation {
    #[error("email address is not valid")]
    EmailInvalid,
    #[error("password is required")]
    PasswordRequired,
    #[error("password must be at least 8 characters")]
    PasswordTooShort,
    #[error("password must contain an uppercase letter")]
    PasswordNeedsUppercase,
    #[error("password must contain a digit")]
    PasswordNeedsDigit,
    #[error("passwords do not match")]
    PasswordMismatch,
    #[error("first name must be at least 2 characters")]
    FirstNameTooShort,
    #[error("last name must be at least 2 characters")]
    LastNameTooShort,
    #[error("reset token is required")]
    TokenRequired,
    #[error("category name is required")]
    CategoryNameRequired,
    #[error("category name must be at most 255 characters")]
    CategoryNameTooLong,
    #[error("category description must be at most 1000 characters")]
    CategoryDescriptionTooLong,
    #[error("word is required")]
    WordRequired,
    #[error("word must be at most 255 characters")]
    WordTooLong,
    #[error("frequency must be between 0 and 10")]
    FrequencyOutOfRange,
}

impl Violation {
    /// The payload field the rule applies to.
    #[must_use]
    pub const fn field(self) -> &'static str {
        match self {
            Violation::EmailInvalid => "email",
            Violation::PasswordRequired
            | Violation::PasswordTooShort
            | Violation::PasswordNeedsUppercase
            | Violation::PasswordNeedsDigit => "password",
            Violation::PasswordMismatch => "confirmPassword",
            Violation::FirstNameTooShort => "firstName",
            Violation::LastNameTooShort => "lastName",
            Violation::TokenRequired => "token",
            Violation::CategoryNameRequired | Violation::CategoryNameTooLong => "name",
            Violation::CategoryDescriptionTooLong => "description",
            Violation::WordRequired | Violation::WordTooLong => "word",
            Violation::FrequencyOutOfRange => "frequency",
        }
    }
}

// =============================================================================
// VALIDATORS
// =============================================================================

/// Validate a sign-in payload.
#[must_use]
pub fn validate_login(input: &LoginInput) -> Vec<Violation> {
    let mut violations = Vec::new();
    if !email_is_valid(&input.email) {
        violations.push(Violation::EmailInvalid);
    }
    if input.password.is_empty() {
        violations.push(Violation::PasswordRequired);
    }
    violations
}

/// Validate a sign-up payload.
#[must_use]
pub fn validate_sign_up(input: &SignUpInput) -> Vec<Violation> {
    let mut violations = Vec::new();
    if input.first_name.chars().count() < MIN_NAME_LENGTH {
        violations.push(Violation::FirstNameTooShort);
    }
    if input.last_name.chars().count() < MIN_NAME_LENGTH {
        violations.push(Violation::LastNameTooShort);
    }
    if !email_is_valid(&input.email) {
        violations.push(Violation::EmailInvalid);
    }
    password_strength(&input.password, &mut violations);
    violations
}

/// Validate a password-recovery request payload.
#[must_use]
pub fn validate_forgot_password(input: &ForgotPasswordInput) -> Vec<Violation> {
    if email_is_valid(&input.email) {
        Vec::new()
    } else {
        vec![Violation::EmailInvalid]
    }
}

/// Validate a password-reset payload.
#[must_use]
pub fn validate_reset_password(input: &ResetPasswordInput) -> Vec<Violation> {
    let mut violations = Vec::new();
    password_strength(&input.password, &mut violations);
    if input.password != input.confirm_password {
        violations.push(Violation::PasswordMismatch);
    }
    if input.token.is_empty() {
        violations.push(Violation::TokenRequired);
    }
    violations
}

/// Validate a category payload.
#[must_use]
pub fn validate_category(input: &CategoryInput) -> Vec<Violation> {
    let mut violations = Vec::new();
    if input.name.trim().is_empty() {
        violations.push(Violation::CategoryNameRequired);
    } else if input.name.chars().count() > MAX_CATEGORY_NAME_LENGTH {
        violations.push(Violation::CategoryNameTooLong);
    }
    if let Some(description) = &input.description {
        if description.chars().count() > MAX_CATEGORY_DESCRIPTION_LENGTH {
            violations.push(Violation::CategoryDescriptionTooLong);
        }
    }
    violations
}

/// Validate a word payload.
#[must_use]
pub fn validate_word(input: &WordInput) -> Vec<Violation> {
    let mut violations = Vec::new();
    if let Some(word) = &input.word {
        if word.trim().is_empty() {
            violations.push(Violation::WordRequired);
        } else if word.chars().count() > MAX_WORD_LENGTH {
            violations.push(Violation::WordTooLong);
        }
    }
    if let Some(frequency) = input.frequency {
        if !(0.0..=MAX_WORD_FREQUENCY).contains(&frequency) {
            violations.push(Violation::FrequencyOutOfRange);
        }
    }
    violations
}

// =============================================================================
// RULE HELPERS
// =============================================================================

/// Shared password strength rules: length, one uppercase, one digit.
fn password_strength(password: &str, violations: &mut Vec<Violation>) {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        violations.push(Violation::PasswordTooShort);
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        violations.push(Violation::PasswordNeedsUppercase);
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        violations.push(Violation::PasswordNeedsDigit);
    }
}

/// Structural email check: one `@`, non-empty local part, dotted domain,
/// no whitespace. The mail flow upstream is the real arbiter.
fn email_is_valid(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !host.is_empty() && !tld.is_empty()
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn login(email: &str, password: &str) -> LoginInput {
        LoginInput {
            email: email.to_string(),
            password: password.to_string(),
            remember_me: false,
        }
    }

    #[test]
    fn valid_login_has_no_violations() {
        assert!(validate_login(&login("alice@example.com", "hunter2")).is_empty());
    }

    #[test]
    fn login_collects_every_violation() {
        let violations = validate_login(&login("not-an-email", ""));
        assert_eq!(
            violations,
            vec![Violation::EmailInvalid, Violation::PasswordRequired]
        );
    }

    #[test]
    fn email_structural_rules() {
        for valid in ["a@b.co", "first.last@mail.example.org"] {
            assert!(email_is_valid(valid), "{valid}");
        }
        for invalid in [
            "",
            "plain",
            "@example.com",
            "a@",
            "a@nodot",
            "a b@example.com",
            "a@@example.com",
            "a@.com",
            "a@example.",
        ] {
            assert!(!email_is_valid(invalid), "{invalid}");
        }
    }

    #[test]
    fn sign_up_enforces_password_strength() {
        let input = SignUpInput {
            first_name: "Li".to_string(),
            last_name: "Tran".to_string(),
            email: "li@example.com".to_string(),
            password: "short".to_string(),
        };
        let violations = validate_sign_up(&input);
        assert!(violations.contains(&Violation::PasswordTooShort));
        assert!(violations.contains(&Violation::PasswordNeedsUppercase));
        assert!(violations.contains(&Violation::PasswordNeedsDigit));
    }

    #[test]
    fn sign_up_accepts_strong_payload() {
        let input = SignUpInput {
            first_name: "Li".to_string(),
            last_name: "Tran".to_string(),
            email: "li@example.com".to_string(),
            password: "Correct0Horse".to_string(),
        };
        assert!(validate_sign_up(&input).is_empty());
    }

    #[test]
    fn sign_up_checks_name_lengths() {
        let input = SignUpInput {
            first_name: "L".to_string(),
            last_name: String::new(),
            email: "li@example.com".to_string(),
            password: "Correct0Horse".to_string(),
        };
        let violations = validate_sign_up(&input);
        assert_eq!(
            violations,
            vec![Violation::FirstNameTooShort, Violation::LastNameTooShort]
        );
    }

    #[test]
    fn reset_password_requires_match_and_token() {
        let input = ResetPasswordInput {
            password: "Correct0Horse".to_string(),
            confirm_password: "Different0Horse".to_string(),
            token: String::new(),
        };
        let violations = validate_reset_password(&input);
        assert_eq!(
            violations,
            vec![Violation::PasswordMismatch, Violation::TokenRequired]
        );
    }

    #[test]
    fn category_name_rules() {
        let blank = CategoryInput {
            name: "   ".to_string(),
            description: None,
        };
        assert_eq!(
            validate_category(&blank),
            vec![Violation::CategoryNameRequired]
        );

        let long = CategoryInput {
            name: "x".repeat(256),
            description: Some("y".repeat(1001)),
        };
        assert_eq!(
            validate_category(&long),
            vec![
                Violation::CategoryNameTooLong,
                Violation::CategoryDescriptionTooLong
            ]
        );

        let ok = CategoryInput {
            name: "Phrasal verbs".to_string(),
            description: Some("Common phrasal verbs".to_string()),
        };
        assert!(validate_category(&ok).is_empty());
    }

    #[test]
    fn word_rules_apply_to_present_fields_only() {
        let partial = WordInput {
            word: None,
            meaning: Some("an update that only touches meaning".to_string()),
            ipa: None,
            frequency: None,
            category_ids: None,
        };
        assert!(validate_word(&partial).is_empty());

        let bad = WordInput {
            word: Some(" ".to_string()),
            meaning: None,
            ipa: None,
            frequency: Some(11.0),
            category_ids: None,
        };
        assert_eq!(
            validate_word(&bad),
            vec![Violation::WordRequired, Violation::FrequencyOutOfRange]
        );
    }

    #[test]
    fn word_frequency_bounds_are_inclusive() {
        for frequency in [0.0, 10.0, 4.5] {
            let input = WordInput {
                word: Some("ubiquitous".to_string()),
                meaning: None,
                ipa: None,
                frequency: Some(frequency),
                category_ids: None,
            };
            assert!(validate_word(&input).is_empty());
        }
    }

    #[test]
    fn violation_fields_are_stable() {
        assert_eq!(Violation::EmailInvalid.field(), "email");
        assert_eq!(Violation::PasswordMismatch.field(), "confirmPassword");
        assert_eq!(Violation::FrequencyOutOfRange.field(), "frequency");
    }

    #[test]
    fn payloads_deserialize_from_camel_case() {
        let input: LoginInput = serde_json::from_str(
            r#"{"email":"a@b.co","password":"pw","rememberMe":true}"#,
        )
        .expect("login json");
        assert!(input.remember_me);

        let word: WordInput = serde_json::from_str(
            r#"{"word":"lexicon","frequency":3.5,"categoryIds":[1,2]}"#,
        )
        .expect("word json");
        assert_eq!(word.category_ids, Some(vec![1, 2]));
    }
}
