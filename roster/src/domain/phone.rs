//! Phone number shapes.
//!
//! Two shapes exist: bare digits (`5551234567`) and the display form
//! `(555) 123-4567` produced while typing. The validator's default rule only
//! accepts bare digits, so a value reformatted by [`format_phone`] fails
//! validation unless the policy opts into
//! [`PhoneFormat::AcceptFormatted`](crate::domain::PhoneFormat).

use std::sync::OnceLock;

use regex::Regex;

static BARE_PHONE_RE: OnceLock<Regex> = OnceLock::new();
static FORMATTED_PHONE_RE: OnceLock<Regex> = OnceLock::new();

fn bare_phone_regex() -> &'static Regex {
    BARE_PHONE_RE.get_or_init(|| {
        // `[0-9]` rather than `\d`: only ASCII digits count.
        Regex::new("^([0-9]{3})([0-9]{3})([0-9]{4})$")
            .unwrap_or_else(|error| panic!("bare phone regex failed to compile: {error}"))
    })
}

fn formatted_phone_regex() -> &'static Regex {
    FORMATTED_PHONE_RE.get_or_init(|| {
        Regex::new(r"^\(([0-9]{3})\) ([0-9]{3})-([0-9]{4})$")
            .unwrap_or_else(|error| panic!("formatted phone regex failed to compile: {error}"))
    })
}

/// Reformat exactly ten consecutive ASCII digits as `(XXX) XXX-XXXX`.
///
/// Anything else, including partial input and already formatted values, is
/// returned unchanged.
///
/// # Examples
/// ```
/// use roster::domain::format_phone;
///
/// assert_eq!(format_phone("5551234567"), "(555) 123-4567");
/// assert_eq!(format_phone("555123456"), "555123456");
/// ```
#[must_use]
pub fn format_phone(raw: &str) -> String {
    bare_phone_regex().replace(raw, "($1) $2-$3").into_owned()
}

/// Whether `value` is exactly ten ASCII digits.
#[must_use]
pub fn is_bare_phone(value: &str) -> bool {
    bare_phone_regex().is_match(value)
}

/// Collapse an `(XXX) XXX-XXXX` value back to its ten digits.
///
/// Returns `None` for anything not in that exact shape.
#[must_use]
pub fn digits_from_formatted(value: &str) -> Option<String> {
    formatted_phone_regex()
        .captures(value)
        .map(|caps| caps.iter().skip(1).flatten().map(|m| m.as_str()).collect())
}
