use once_cell::sync::Lazy;
use regex::Regex;

static PHONE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?\d{9,15}$").expect("phone pattern compiles"));

/// Check a mobile number: digits with an optional leading `+`, 9-15 digits.
#[must_use]
pub fn is_valid_phone(raw: &str) -> bool {
    PHONE_PATTERN.is_match(raw)
}
