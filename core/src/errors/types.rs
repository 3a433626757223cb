//! Error types for authentication, tokens and input validation

use inv_shared::FieldErrors;
use thiserror::Error;
use validator::{ValidationErrors, ValidationErrorsKind};

/// Authentication-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Invalid or expired refresh token")]
    InvalidRefreshToken,

    #[error("Authentication required")]
    NotAuthenticated,

    #[error("Insufficient permissions")]
    InsufficientPermissions,

    #[error("User account is inactive")]
    AccountInactive,
}

/// Token-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token format")]
    InvalidTokenFormat,

    #[error("Token signature verification failed")]
    InvalidSignature,

    #[error("Token not yet valid")]
    TokenNotYetValid,

    #[error("Invalid token claims")]
    InvalidClaims,

    #[error("Token generation failed")]
    TokenGenerationFailed,
}

/// Flatten `validator` output into a field-keyed message map
///
/// Keys use the camelCase wire names; nested struct and list errors are
/// keyed with dotted paths.
pub fn field_errors_from(errors: &ValidationErrors) -> FieldErrors {
    let mut out = FieldErrors::new();
    collect(errors, None, &mut out);
    out
}

fn collect(errors: &ValidationErrors, prefix: Option<&str>, out: &mut FieldErrors) {
    for (field, kind) in errors.errors() {
        let key = match prefix {
            Some(prefix) => format!("{}.{}", prefix, camel_case(field)),
            None => camel_case(field),
        };
        match kind {
            ValidationErrorsKind::Field(field_errors) => {
                let messages = out.entry(key).or_default();
                for error in field_errors {
                    let message = error
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("{} is invalid ({})", field, error.code));
                    messages.push(message);
                }
            }
            ValidationErrorsKind::Struct(nested) => collect(nested, Some(&key), out),
            ValidationErrorsKind::List(items) => {
                for (index, nested) in items {
                    collect(nested, Some(&format!("{}[{}]", key, index)), out);
                }
            }
        }
    }
}

fn camel_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper = false;
    for c in field.chars() {
        if c == '_' {
            upper = true;
        } else if upper {
            out.extend(c.to_uppercase());
            upper = false;
        } else {
            out.push(c);
        }
    }
    out
}
