//! Field validators and the phone number formatter
//!
//! Every function here is pure: it looks at the raw input string and nothing
//! else, so the same input always produces the same outcome.

use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

/// Minimum password length accepted on sign-up
pub const MIN_PASSWORD_LEN: usize = 6;

/// Accepted digit count for phone numbers
pub const PHONE_MIN_DIGITS: usize = 10;
pub const PHONE_MAX_DIGITS: usize = 15;

/// Longest formatted phone value that is stored; longer keystrokes are dropped
pub const PHONE_MAX_LEN: usize = 15;

/// `local@domain.tld`, local part up to 256 chars, at least one dot in the domain
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9+._%\-]{1,256}@[a-zA-Z0-9][a-zA-Z0-9\-]{0,64}(\.[a-zA-Z0-9][a-zA-Z0-9\-]{0,25})+$",
    )
    .expect("email pattern is a valid regex")
});

/// Why a field value was refused.
///
/// The `Display` text describes the failure for logs. What the user sees is
/// the per-field message configured on the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("value is empty")]
    EmptyField,
    #[error("not an email address")]
    InvalidEmail,
    #[error("phone number needs {} to {} digits", PHONE_MIN_DIGITS, PHONE_MAX_DIGITS)]
    InvalidPhone,
    #[error("shorter than {min} characters")]
    TooShort { min: usize },
    #[error("does not match the password")]
    Mismatch,
}

/// Fails with `EmptyField` when the trimmed value is empty
pub fn validate_required(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::EmptyField);
    }
    Ok(())
}

/// Fails with `InvalidEmail` when the value is blank or not an email address
pub fn validate_email(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() || !EMAIL_PATTERN.is_match(value) {
        return Err(ValidationError::InvalidEmail);
    }
    Ok(())
}

/// Fails with `InvalidPhone` unless the value carries 10 to 15 digits.
///
/// Formatting characters are ignored, so `(123) 456-7890`, `1234567890` and
/// `+11234567890` are all accepted. Digits from any script count.
pub fn validate_phone(value: &str) -> Result<(), ValidationError> {
    let digits = value.chars().filter(|c| c.is_numeric()).count();
    if !(PHONE_MIN_DIGITS..=PHONE_MAX_DIGITS).contains(&digits) {
        return Err(ValidationError::InvalidPhone);
    }
    Ok(())
}

/// Fails with `TooShort` when the password has fewer than six characters
pub fn validate_password(value: &str) -> Result<(), ValidationError> {
    if value.chars().count() < MIN_PASSWORD_LEN {
        return Err(ValidationError::TooShort {
            min: MIN_PASSWORD_LEN,
        });
    }
    Ok(())
}

/// Fails with `Mismatch` unless `confirm` is exactly `password`
pub fn validate_confirm_password(confirm: &str, password: &str) -> Result<(), ValidationError> {
    if confirm != password {
        return Err(ValidationError::Mismatch);
    }
    Ok(())
}

/// Render raw phone input as `(DDD) DDD-DDDD`.
///
/// Non-digits are stripped first. Up to three digits are returned bare, four
/// to six become `(DDD) DDD`, seven and more become `(DDD) DDD-DDDD`. Digits
/// past the tenth are dropped.
pub fn format_phone(raw: &str) -> String {
    let digits: Vec<char> = raw
        .chars()
        .filter(|c| c.is_numeric())
        .take(PHONE_MIN_DIGITS)
        .collect();

    let part = |range: std::ops::Range<usize>| digits[range].iter().collect::<String>();
    match digits.len() {
        0..=3 => digits.iter().collect(),
        n @ 4..=6 => format!("({}) {}", part(0..3), part(3..n)),
        n => format!("({}) {}-{}", part(0..3), part(3..6), part(6..n)),
    }
}
