//! # Input Validation
//!
//! Client-side validation applied before any network call. A value that
//! fails validation here is never sent to the backend; the resulting
//! [`ValidationError`] carries the message shown inline to the user.

use thiserror::Error;

/// Length of a decryption code as issued by the backend.
pub const CODE_LENGTH: usize = 8;

/// Minimum password length accepted at login and registration.
pub const PASSWORD_MIN_LENGTH: usize = 8;

/// An input rejected before leaving the client.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct ValidationError(pub String);

/// Trim surrounding whitespace and lowercase an email address.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Check that an email has a `local@domain.tld` shape with no whitespace.
///
/// Mirrors the permissive shape the backend accepts: one `@`, a non-empty
/// local part, and a domain containing at least one dot.
pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    let email = email.trim();
    let mut parts = email.splitn(2, '@');
    let local = parts.next().unwrap_or_default();
    let domain = parts.next().unwrap_or_default();

    let shape_ok = !local.is_empty()
        && !domain.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !email.contains(char::is_whitespace);

    if shape_ok {
        Ok(())
    } else {
        Err(ValidationError("invalid email format".to_string()))
    }
}

/// Login only requires a non-empty password; strength was enforced at
/// registration time.
pub fn validate_login_password(password: &str) -> Result<(), ValidationError> {
    if password.is_empty() {
        Err(ValidationError("password required".to_string()))
    } else {
        Ok(())
    }
}

/// Enforce registration password strength: length, uppercase, lowercase,
/// digit. The error message lists every missing requirement so the user can
/// fix them all at once.
pub fn validate_registration_password(password: &str) -> Result<(), ValidationError> {
    let mut missing: Vec<&str> = Vec::new();

    if password.len() < PASSWORD_MIN_LENGTH {
        missing.push("at least 8 characters");
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        missing.push("an uppercase letter");
    }
    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        missing.push("a lowercase letter");
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        missing.push("a digit");
    }

    if missing.is_empty() {
        Ok(())
    } else {
        Err(ValidationError(format!(
            "password too weak: needs {}",
            missing.join(", ")
        )))
    }
}

/// Trim and uppercase a decryption code. Codes are case-insensitive on the
/// backend; the wire format is uppercase.
pub fn normalize_code(code: &str) -> String {
    code.trim().to_uppercase()
}

/// A decryption code is exactly [`CODE_LENGTH`] characters after
/// normalization.
pub fn validate_code(code: &str) -> Result<(), ValidationError> {
    if code.chars().count() == CODE_LENGTH {
        Ok(())
    } else {
        Err(ValidationError(format!(
            "code must be {} characters",
            CODE_LENGTH
        )))
    }
}
