//! Input validation helpers
//!
//! Centralized text length constants and validation functions.
//! SQLite TEXT has no built-in length enforcement, so handlers check
//! payloads before they reach the repository layer.

use crate::utils::AppError;

// ── Text length limits ──────────────────────────────────────────────

/// Entity names: product, brand, category, showroom, supplier, etc.
pub const MAX_NAME_LEN: usize = 200;

/// Short identifiers: phone numbers, item codes, showroom codes
pub const MAX_SHORT_TEXT_LEN: usize = 100;

/// Email addresses (RFC 5321)
pub const MAX_EMAIL_LEN: usize = 254;

/// Passwords (before hashing)
pub const MAX_PASSWORD_LEN: usize = 128;
/// Minimum password length accepted at registration
pub const MIN_PASSWORD_LEN: usize = 8;

/// Notes, descriptions, expense details
pub const MAX_NOTE_LEN: usize = 500;

/// Addresses
pub const MAX_ADDRESS_LEN: usize = 500;

// ── Validation helpers ──────────────────────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::validation(format!("{field} must not be empty")));
    }
    if value.len() > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            value.len()
        )));
    }
    Ok(())
}

/// Validate that an optional string, if present, is within the length limit.
pub fn validate_optional_text(
    value: &Option<String>,
    field: &str,
    max_len: usize,
) -> Result<(), AppError> {
    if let Some(v) = value
        && v.len() > max_len
    {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            v.len()
        )));
    }
    Ok(())
}

/// Validate that a monetary or quantity value is not negative.
pub fn validate_non_negative(value: f64, field: &str) -> Result<(), AppError> {
    if value < 0.0 {
        return Err(AppError::validation(format!("{field} must not be negative")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_required_text_is_rejected() {
        assert!(validate_required_text("  ", "name", MAX_NAME_LEN).is_err());
        assert!(validate_required_text("ok", "name", MAX_NAME_LEN).is_ok());
    }

    #[test]
    fn overlong_text_is_rejected() {
        let long = "x".repeat(MAX_NAME_LEN + 1);
        assert!(validate_required_text(&long, "name", MAX_NAME_LEN).is_err());
        assert!(validate_optional_text(&Some(long), "notes", MAX_NAME_LEN).is_err());
        assert!(validate_optional_text(&None, "notes", MAX_NAME_LEN).is_ok());
    }

    #[test]
    fn negative_amounts_are_rejected() {
        assert!(validate_non_negative(-0.01, "amount").is_err());
        assert!(validate_non_negative(0.0, "amount").is_ok());
    }
}
