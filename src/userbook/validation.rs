//! # Field Validation
//!
//! Two levels:
//!
//! - **Validators**: pure predicates, one per field, over an already trimmed value.
//! - **Controller**: [`check_field`] trims raw input and turns the predicate into an
//!   annotation, with the "required" check taking precedence over the pattern check.
//!   [`validate_draft`] runs the controller over a whole form in fixed field order.
//!
//! Digit and word classes are ASCII-only.

use crate::form::{Draft, FieldErrors};
use crate::model::Field;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const REQUIRED_MESSAGE: &str = "Field is required";
pub const MIN_PASSWORD_LEN: usize = 5;

static NAME_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Z][a-z]*$").expect("valid regex"));
static AGE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]+$").expect("valid regex"));
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\w.-]+@[\w.-]+\.[A-Za-z]{2,4}$").expect("valid regex"));
static PHONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\+380[0-9]{9}$").expect("valid regex"));
static CARD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{16}$").expect("valid regex"));

pub fn validate_name(value: &str) -> bool {
    NAME_RE.is_match(value)
}

/// Length is counted in UTF-16 code units, the way a browser input measures it.
pub fn validate_password(value: &str) -> bool {
    value.encode_utf16().count() >= MIN_PASSWORD_LEN
}

pub fn validate_age(value: &str) -> bool {
    AGE_RE.is_match(value)
}

/// Permissive `local@domain.tld` check, not RFC 5322.
pub fn validate_email(value: &str) -> bool {
    value.is_ascii() && EMAIL_RE.is_match(value)
}

pub fn validate_phone(value: &str) -> bool {
    PHONE_RE.is_match(value)
}

pub fn validate_card(value: &str) -> bool {
    CARD_RE.is_match(value)
}

impl Field {
    pub fn validator(&self) -> fn(&str) -> bool {
        match self {
            Field::Name => validate_name,
            Field::Password => validate_password,
            Field::Age => validate_age,
            Field::Email => validate_email,
            Field::Phone => validate_phone,
            Field::Card => validate_card,
        }
    }
}

/// Checks one raw input value. The error carries the message to display next
/// to the field.
pub fn check_field(field: Field, raw: &str) -> Result<(), String> {
    let value = raw.trim();
    if value.is_empty() {
        Err(REQUIRED_MESSAGE.to_string())
    } else if !(field.validator())(value) {
        Err(field.error_message().to_string())
    } else {
        Ok(())
    }
}

/// How a form submission walks its fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ValidationMode {
    /// Check every field and annotate all failures.
    #[default]
    Exhaustive,
    /// Stop at the first failure. Fields after it keep their previous annotation.
    ShortCircuit,
}

impl fmt::Display for ValidationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationMode::Exhaustive => f.write_str("exhaustive"),
            ValidationMode::ShortCircuit => f.write_str("short-circuit"),
        }
    }
}

impl FromStr for ValidationMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "exhaustive" => Ok(ValidationMode::Exhaustive),
            "short-circuit" | "short_circuit" => Ok(ValidationMode::ShortCircuit),
            other => Err(format!(
                "Unknown validation mode '{}' (expected exhaustive or short-circuit)",
                other
            )),
        }
    }
}

/// Validates a whole draft, updating `errors` in place. Returns true only if
/// every field passed.
pub fn validate_draft(draft: &Draft, mode: ValidationMode, errors: &mut FieldErrors) -> bool {
    let mut all_valid = true;
    for field in Field::ALL {
        match check_field(field, draft.get(field)) {
            Ok(()) => errors.clear(field),
            Err(message) => {
                errors.set(field, message);
                all_valid = false;
                if mode == ValidationMode::ShortCircuit {
                    break;
                }
            }
        }
    }
    all_valid
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_requires_single_capitalized_word() {
        assert!(validate_name("John"));
        assert!(validate_name("J"));
        assert!(!validate_name("john"));
        assert!(!validate_name("John Smith"));
        assert!(!validate_name("JOHN"));
        assert!(!validate_name("Jöhn"));
    }

    #[test]
    fn password_counts_utf16_units() {
        assert!(validate_password("12345"));
        assert!(!validate_password("1234"));
        assert!(validate_password("ééééé"));
        assert!(validate_password("🙂🙂🙂"));
        assert!(!validate_password("🙂🙂"));
    }

    #[test]
    fn age_is_digits_only() {
        assert!(validate_age("30"));
        assert!(validate_age("007"));
        assert!(!validate_age("-1"));
        assert!(!validate_age("3.5"));
        assert!(!validate_age("٣"));
    }

    #[test]
    fn email_is_permissive() {
        assert!(validate_email("a@b.co"));
        assert!(validate_email("first.last-x@mail.example.info"));
        assert!(!validate_email("a@b.c"));
        assert!(!validate_email("a@b.museum"));
        assert!(!validate_email("no-at-sign.com"));
        assert!(!validate_email("a b@c.de"));
    }

    #[test]
    fn phone_needs_prefix_and_nine_digits() {
        assert!(validate_phone("+380123456789"));
        assert!(!validate_phone("+38012345678"));
        assert!(!validate_phone("+3801234567890"));
        assert!(!validate_phone("380123456789"));
    }

    #[test]
    fn card_needs_sixteen_digits() {
        assert!(validate_card("1234567890123456"));
        assert!(!validate_card("123456789012345"));
        assert!(!validate_card("1234 5678 9012 3456"));
    }

    #[test]
    fn empty_input_is_required_for_every_field() {
        for field in Field::ALL {
            assert_eq!(check_field(field, ""), Err(REQUIRED_MESSAGE.to_string()));
            assert_eq!(check_field(field, "   "), Err(REQUIRED_MESSAGE.to_string()));
        }
    }

    #[test]
    fn check_field_trims_before_matching() {
        assert_eq!(check_field(Field::Name, "  John  "), Ok(()));
        assert_eq!(
            check_field(Field::Name, "john"),
            Err("Enter name from capital letter".to_string())
        );
    }

    fn valid_draft() -> Draft {
        let mut draft = Draft::default();
        draft.set(Field::Name, "Anna");
        draft.set(Field::Password, "secret");
        draft.set(Field::Age, "30");
        draft.set(Field::Email, "a@b.co");
        draft.set(Field::Phone, "+380931234567");
        draft.set(Field::Card, "1111222233334444");
        draft
    }

    #[test]
    fn exhaustive_mode_annotates_every_failure() {
        let mut draft = valid_draft();
        draft.set(Field::Name, "anna");
        draft.set(Field::Card, "");
        let mut errors = FieldErrors::default();

        assert!(!validate_draft(&draft, ValidationMode::Exhaustive, &mut errors));
        assert_eq!(errors.get(Field::Name), Some("Enter name from capital letter"));
        assert_eq!(errors.get(Field::Card), Some(REQUIRED_MESSAGE));
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn short_circuit_mode_leaves_later_annotations_untouched() {
        let mut draft = valid_draft();
        draft.set(Field::Password, "123");
        let mut errors = FieldErrors::default();
        errors.set(Field::Name, "stale");
        errors.set(Field::Phone, "stale phone");

        assert!(!validate_draft(&draft, ValidationMode::ShortCircuit, &mut errors));
        assert_eq!(errors.get(Field::Name), None);
        assert_eq!(
            errors.get(Field::Password),
            Some("Password must be at least 5 characters")
        );
        assert_eq!(errors.get(Field::Phone), Some("stale phone"));
    }

    #[test]
    fn valid_draft_clears_annotations() {
        let mut errors = FieldErrors::default();
        errors.set(Field::Email, "old");
        assert!(validate_draft(
            &valid_draft(),
            ValidationMode::ShortCircuit,
            &mut errors
        ));
        assert!(errors.is_empty());
    }

    #[test]
    fn validation_mode_parses() {
        assert_eq!(
            "short-circuit".parse::<ValidationMode>().unwrap(),
            ValidationMode::ShortCircuit
        );
        assert!("lenient".parse::<ValidationMode>().is_err());
    }
}
