//! Client-side validation rules
//!
//! These run before any network call; a failure here means no request is
//! issued at all.

/// Minimum length for a new password.
pub const MIN_PASSWORD_LEN: usize = 8;

/// Simple `text@text.text` email check, matching the backend's expectation.
///
/// Not an RFC 5322 validator: one `@`, a non-empty local part, and a domain
/// containing a `.` with non-empty labels on both sides.
pub fn email_is_valid(email: &str) -> bool {
    let mut parts = email.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    if local.is_empty() || local.contains(char::is_whitespace) {
        return false;
    }
    if domain.contains(char::is_whitespace) {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((name, tld)) => !name.is_empty() && !tld.is_empty(),
        None => false,
    }
}

/// Validate a new password against its confirmation field.
pub fn check_new_password(new_password: &str, confirmation: &str) -> Result<(), String> {
    if new_password.len() < MIN_PASSWORD_LEN {
        return Err(format!(
            "New password must be at least {} characters long.",
            MIN_PASSWORD_LEN
        ));
    }
    if new_password != confirmation {
        return Err("New passwords do not match.".to_string());
    }
    Ok(())
}
