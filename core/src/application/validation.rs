//! Validation helpers shared by request types

use inv_shared::FieldErrors;
use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::Decimal;
use validator::{Validate, ValidationError};

use crate::errors::field_errors_from;

static UPPERCASE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[A-Z]").expect("valid regex"));
static LOWERCASE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[a-z]").expect("valid regex"));
static DIGIT: Lazy<Regex> = Lazy::new(|| Regex::new(r"[0-9]").expect("valid regex"));

/// Run `validator` rules and flatten the result
pub(crate) fn check<T: Validate>(value: &T) -> Result<(), FieldErrors> {
    value.validate().map_err(|errors| field_errors_from(&errors))
}

/// Price must be strictly positive
pub(crate) fn positive_price(price: &Decimal) -> Result<(), ValidationError> {
    if *price > Decimal::ZERO {
        Ok(())
    } else {
        let mut error = ValidationError::new("positive");
        error.message = Some("Price must be greater than 0".into());
        Err(error)
    }
}

/// Password needs an uppercase letter, a lowercase letter and a digit
pub(crate) fn password_strength(password: &str) -> Result<(), ValidationError> {
    let missing = if !UPPERCASE.is_match(password) {
        Some("Password must contain at least one uppercase letter")
    } else if !LOWERCASE.is_match(password) {
        Some("Password must contain at least one lowercase letter")
    } else if !DIGIT.is_match(password) {
        Some("Password must contain at least one digit")
    } else {
        None
    };

    match missing {
        Some(message) => {
            let mut error = ValidationError::new("password_strength");
            error.message = Some(message.into());
            Err(error)
        }
        None => Ok(()),
    }
}

/// Required text must contain something besides whitespace
pub(crate) fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("required");
        error.message = Some("Value is required".into());
        Err(error)
    } else {
        Ok(())
    }
}
