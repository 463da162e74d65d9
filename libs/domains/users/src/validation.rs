//! Email format validation.

use once_cell::sync::Lazy;
use regex::Regex;

/// local-part@domain.tld, with a 2+ letter top-level segment.
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$")
        .expect("email pattern is valid")
});

/// Whether a string looks like an email address.
///
/// Pure format check; never errors, malformed input is simply `false`.
pub fn validate_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}
