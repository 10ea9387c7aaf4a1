//! Draft validation rules.
//!
//! Three independent rules, one per field. Each field reports only its first
//! violation; a passing field reports an empty message.
//!
//! # Rules
//!
//! - Name: any string is accepted, including the empty string
//! - Email: required, then `local@domain` with at least one dot in the domain
//! - Phone: required, then exactly 10 ASCII digits ([`PhoneFormat::Digits`])

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::draft::Draft;
use super::field_errors::FieldErrors;
use super::phone::{digits_from_formatted, is_bare_phone};
use super::user::{UserField, UserRecord};

/// Message when the email field is empty.
pub const EMAIL_REQUIRED: &str = "email is required";
/// Message when the email does not match the address grammar.
pub const EMAIL_INVALID: &str = "email must be a valid email address";
/// Message when the email is already present and uniqueness is enforced.
pub const EMAIL_TAKEN: &str = "email is already in the list";
/// Message when the phone field is empty.
pub const PHONE_REQUIRED: &str = "phone is required";
/// Message when the phone is not exactly ten digits.
pub const PHONE_INVALID: &str = "phone must be exactly 10 digits";

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        // Local part per the HTML living standard; domain needs two or more labels.
        let pattern = concat!(
            r"^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~-]+@",
            r"[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?",
            r"(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?)+$",
        );
        Regex::new(pattern).unwrap_or_else(|error| panic!("email regex failed to compile: {error}"))
    })
}

/// Which phone shapes the validator accepts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PhoneFormat {
    /// Exactly ten bare digits.
    ///
    /// Values reformatted by [`Draft::update_field`] never pass this rule;
    /// the mismatch is long-standing behaviour and kept as the default.
    #[default]
    Digits,
    /// Bare digits or `(XXX) XXX-XXXX`; accepted records store bare digits.
    AcceptFormatted,
}

/// Tunable knobs applied on top of the fixed field rules.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationPolicy {
    /// Accepted phone shapes.
    pub phone_format: PhoneFormat,
    /// Reject a draft whose email already exists in the list.
    pub unique_emails: bool,
}

impl ValidationPolicy {
    /// Validate a draft against the field rules.
    ///
    /// Email uniqueness is not checked here because it depends on the list;
    /// see [`UserRoster::submit`](crate::domain::UserRoster::submit).
    ///
    /// # Errors
    ///
    /// Returns [`FieldErrors`] with at least one non-empty message when any
    /// rule fails.
    ///
    /// # Examples
    /// ```
    /// use roster::domain::{Draft, ValidationPolicy};
    ///
    /// let draft = Draft::new("Bob", "not-an-email", "5551234567");
    /// let errors = ValidationPolicy::default().validate(&draft).unwrap_err();
    /// assert!(!errors.email().is_empty());
    /// assert!(errors.phone().is_empty());
    /// ```
    pub fn validate(&self, draft: &Draft) -> Result<UserRecord, FieldErrors> {
        let mut errors = FieldErrors::default();

        if let Some(message) = check_name(draft.name()) {
            errors.set(UserField::Name, message);
        }
        if let Some(message) = check_email(draft.email()) {
            errors.set(UserField::Email, message);
        }
        let phone = match self.check_phone(draft.phone()) {
            Ok(phone) => phone,
            Err(message) => {
                errors.set(UserField::Phone, message);
                String::new()
            }
        };

        if errors.is_clear() {
            Ok(draft.to_record(phone))
        } else {
            Err(errors)
        }
    }

    /// Returns the canonical phone value or the first violation.
    fn check_phone(self, phone: &str) -> Result<String, &'static str> {
        if phone.is_empty() {
            return Err(PHONE_REQUIRED);
        }
        if is_bare_phone(phone) {
            return Ok(phone.to_owned());
        }
        match self.phone_format {
            PhoneFormat::Digits => Err(PHONE_INVALID),
            PhoneFormat::AcceptFormatted => digits_from_formatted(phone).ok_or(PHONE_INVALID),
        }
    }
}

/// Validate a draft with the default policy.
///
/// # Errors
///
/// Returns [`FieldErrors`] when the email or phone rule fails.
pub fn validate(draft: &Draft) -> Result<UserRecord, FieldErrors> {
    ValidationPolicy::default().validate(draft)
}

/// Names only have to be strings, which every draft value already is.
const fn check_name(_name: &str) -> Option<&'static str> {
    None
}

fn check_email(email: &str) -> Option<&'static str> {
    if email.is_empty() {
        Some(EMAIL_REQUIRED)
    } else if !email_regex().is_match(email) {
        Some(EMAIL_INVALID)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for the validation rules.

    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn valid_draft() -> Draft {
        Draft::new("Ann", "ann@example.com", "5551234567")
    }

    #[rstest]
    fn accepts_valid_draft(valid_draft: Draft) {
        let record = validate(&valid_draft).expect("valid draft");
        assert_eq!(record, UserRecord::new("Ann", "ann@example.com", "5551234567"));
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("x")]
    fn name_rule_never_rejects(valid_draft: Draft, #[case] name: &str) {
        let mut draft = valid_draft;
        draft.update_field(UserField::Name, name);
        let record = validate(&draft).expect("name is not constrained");
        assert_eq!(record.name(), name);
    }

    #[rstest]
    #[case("", EMAIL_REQUIRED)]
    #[case("not-an-email", EMAIL_INVALID)]
    #[case("ann@localhost", EMAIL_INVALID)]
    #[case("@example.com", EMAIL_INVALID)]
    #[case("ann@", EMAIL_INVALID)]
    #[case("ann@.com", EMAIL_INVALID)]
    #[case("ann@example..com", EMAIL_INVALID)]
    #[case("ann @example.com", EMAIL_INVALID)]
    #[case("ann@exa mple.com", EMAIL_INVALID)]
    fn rejects_bad_emails(valid_draft: Draft, #[case] email: &str, #[case] expected: &str) {
        let mut draft = valid_draft;
        draft.update_field(UserField::Email, email);
        let errors = validate(&draft).expect_err("email should fail");
        assert_eq!(errors.email(), expected);
        assert_eq!(errors.name(), "");
        assert_eq!(errors.phone(), "");
    }

    #[rstest]
    #[case("a@b.co")]
    #[case("first.last+tag@mail.example.org")]
    #[case("o'brien@example.ie")]
    fn accepts_good_emails(valid_draft: Draft, #[case] email: &str) {
        let mut draft = valid_draft;
        draft.update_field(UserField::Email, email);
        assert!(validate(&draft).is_ok());
    }

    #[rstest]
    #[case("", PHONE_REQUIRED)]
    #[case("555123456", PHONE_INVALID)]
    #[case("55512345678", PHONE_INVALID)]
    #[case("555-123-4567", PHONE_INVALID)]
    #[case("phone", PHONE_INVALID)]
    fn rejects_bad_phones(#[case] phone: &str, #[case] expected: &str) {
        let draft = Draft::new("Ann", "ann@example.com", phone);
        let errors = validate(&draft).expect_err("phone should fail");
        assert_eq!(errors.phone(), expected);
        assert_eq!(errors.email(), "");
    }

    #[test]
    fn default_policy_rejects_the_reformatted_phone() {
        let mut draft = Draft::new("Ann", "ann@example.com", "");
        draft.update_field(UserField::Phone, "5551234567");
        assert_eq!(draft.phone(), "(555) 123-4567");

        let errors = validate(&draft).expect_err("display form is not bare digits");
        assert_eq!(errors.phone(), PHONE_INVALID);
    }

    #[test]
    fn accept_formatted_policy_stores_bare_digits() {
        let policy = ValidationPolicy {
            phone_format: PhoneFormat::AcceptFormatted,
            ..ValidationPolicy::default()
        };
        let mut draft = Draft::new("Ann", "ann@example.com", "");
        draft.update_field(UserField::Phone, "5551234567");

        let record = policy.validate(&draft).expect("formatted phone accepted");
        assert_eq!(record.phone(), "5551234567");
    }

    #[test]
    fn accept_formatted_policy_still_rejects_other_shapes() {
        let policy = ValidationPolicy {
            phone_format: PhoneFormat::AcceptFormatted,
            ..ValidationPolicy::default()
        };
        let draft = Draft::new("Ann", "ann@example.com", "555-123-4567");
        let errors = policy.validate(&draft).expect_err("dashed form is rejected");
        assert_eq!(errors.phone(), PHONE_INVALID);
    }

    #[test]
    fn reports_every_failing_field_at_once() {
        let draft = Draft::default();
        let errors = validate(&draft).expect_err("empty draft fails");
        assert_eq!(errors.email(), EMAIL_REQUIRED);
        assert_eq!(errors.phone(), PHONE_REQUIRED);
        assert_eq!(errors.name(), "");
    }

    #[test]
    fn a_field_that_passes_later_reports_no_error() {
        let mut draft = Draft::new("Bob", "not-an-email", "123");
        let first = validate(&draft).expect_err("both fail");
        assert!(!first.email().is_empty());
        assert!(!first.phone().is_empty());

        draft.update_field(UserField::Email, "bob@example.com");
        let second = validate(&draft).expect_err("phone still fails");
        assert_eq!(second.email(), "");
        assert_eq!(second.phone(), PHONE_INVALID);
    }

    #[rstest]
    #[case(Draft::default())]
    #[case(Draft::new("", "", ""))]
    #[case(Draft::new("\u{0}", "\u{1F600}@\u{1F600}.com", "٥٥٥١٢٣٤٥٦٧"))]
    #[case(Draft::new("Ann", "ann@example.com", "(555) 123-4567"))]
    #[case(Draft::new("a".repeat(10_000), "b".repeat(10_000), "9".repeat(10_000)))]
    fn validation_errors_are_never_empty(#[case] draft: Draft) {
        if let Err(errors) = validate(&draft) {
            assert!(!errors.is_clear());
        }
    }
}
