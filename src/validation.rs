//! Field validation
//!
//! Syntactic checks applied to the user-supplied fields before any store
//! access. Checks run in a fixed order and the first failure wins, so a
//! request with several bad fields always reports the name failure first.
//! `address` is free-form and never validated.

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::customer::CustomerFields;

static NAME_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new("^[A-Za-z]+$").unwrap());
static PHONE_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new("^[0-9]{10}$").unwrap());
// Unanchored: a structural substring check, not full RFC address validation.
static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\S+@\S+\.\S+").unwrap());

/// A field that failed its syntactic check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Names must contain only letters.")]
    InvalidName,

    #[error("Phone number must be 10 digits.")]
    InvalidPhone,

    #[error("Invalid email format.")]
    InvalidEmail,
}

/// Validate the write payload for create and update
///
/// Pure; touches no storage.
pub fn validate(fields: &CustomerFields) -> Result<(), ValidationError> {
    if !NAME_PATTERN.is_match(&fields.first_name) || !NAME_PATTERN.is_match(&fields.last_name) {
        return Err(ValidationError::InvalidName);
    }
    if !PHONE_PATTERN.is_match(&fields.phone_number) {
        return Err(ValidationError::InvalidPhone);
    }
    if !EMAIL_PATTERN.is_match(&fields.email) {
        return Err(ValidationError::InvalidEmail);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_fields() -> CustomerFields {
        CustomerFields {
            first_name: "Ann".to_string(),
            last_name: "Lee".to_string(),
            phone_number: "5551234567".to_string(),
            email: "a@b.com".to_string(),
            address: "1 Main St".to_string(),
        }
    }

    #[test]
    fn test_valid_fields_pass() {
        assert!(validate(&valid_fields()).is_ok());
    }

    #[test]
    fn test_name_rejects_digits_spaces_punctuation() {
        for bad in ["Ann3", "Ann Lee", "O'Brien", "", " "] {
            let mut fields = valid_fields();
            fields.first_name = bad.to_string();
            assert_eq!(validate(&fields), Err(ValidationError::InvalidName), "{:?}", bad);
        }
    }

    #[test]
    fn test_last_name_checked_too() {
        let mut fields = valid_fields();
        fields.last_name = "Lee-Smith".to_string();
        assert_eq!(validate(&fields), Err(ValidationError::InvalidName));
    }

    #[test]
    fn test_phone_must_be_exactly_ten_digits() {
        for bad in ["555123456", "55512345678", "555123456a", "555-123-4567", ""] {
            let mut fields = valid_fields();
            fields.phone_number = bad.to_string();
            assert_eq!(validate(&fields), Err(ValidationError::InvalidPhone), "{:?}", bad);
        }
    }

    #[test]
    fn test_email_needs_at_and_dot_separators() {
        for bad in ["plainaddress", "a@b", "a.b.com", "@b.com", "a@.", ""] {
            let mut fields = valid_fields();
            fields.email = bad.to_string();
            assert_eq!(validate(&fields), Err(ValidationError::InvalidEmail), "{:?}", bad);
        }
    }

    #[test]
    fn test_email_check_is_unanchored() {
        let mut fields = valid_fields();
        fields.email = "  a@b.com  ".to_string();
        assert!(validate(&fields).is_ok());
    }

    #[test]
    fn test_first_failure_wins() {
        // Bad name and bad phone together report the name failure.
        let mut fields = valid_fields();
        fields.first_name = "Ann3".to_string();
        fields.phone_number = "123".to_string();
        assert_eq!(validate(&fields), Err(ValidationError::InvalidName));

        // Bad phone and bad email together report the phone failure.
        let mut fields = valid_fields();
        fields.phone_number = "123".to_string();
        fields.email = "nope".to_string();
        assert_eq!(validate(&fields), Err(ValidationError::InvalidPhone));
    }
}
