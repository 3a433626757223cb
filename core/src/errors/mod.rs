//! Domain-specific error types and error handling.

mod types;


pub use types::{field_errors_from, AuthError, TokenError};

use inv_shared::{FailureKind, FieldErrors};
use thiserror::Error;

/// Core domain errors (general purpose)
///
/// Validation, business rule, not-found, auth and forbidden variants are
/// ordinary request failures. `Storage` and `Internal` are faults: they are
/// logged in full and surfaced to callers with a generic message.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Validation failed")]
    Validation { errors: FieldErrors },

    #[error("{message}")]
    BusinessRule { message: String },

    #[error("{resource} not found")]
    NotFound { resource: String },

    #[error("{message}")]
    Forbidden { message: String },

    #[error("Storage error: {message}")]
    Storage { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    #[error("Request was cancelled")]
    Cancelled,

    // Bridge to specific error types
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Token(#[from] TokenError),
}

impl DomainError {
    /// Shorthand for a business rule failure
    pub fn business(message: impl Into<String>) -> Self {
        DomainError::BusinessRule {
            message: message.into(),
        }
    }

    /// Shorthand for a missing entity
    pub fn not_found(resource: impl Into<String>) -> Self {
        DomainError::NotFound {
            resource: resource.into(),
        }
    }

    /// Single-field validation failure
    pub fn invalid_field(field: &str, message: impl Into<String>) -> Self {
        let mut errors = FieldErrors::new();
        errors.insert(field.to_string(), vec![message.into()]);
        DomainError::Validation { errors }
    }

    /// Classify the error for status code mapping
    pub fn failure_kind(&self) -> FailureKind {
        match self {
            DomainError::Validation { .. } | DomainError::BusinessRule { .. } => FailureKind::Validation,
            DomainError::NotFound { .. } => FailureKind::NotFound,
            DomainError::Forbidden { .. } => FailureKind::Forbidden,
            DomainError::Auth(AuthError::InsufficientPermissions) => FailureKind::Forbidden,
            DomainError::Auth(_) | DomainError::Token(_) => FailureKind::Unauthorized,
            DomainError::Cancelled => FailureKind::Cancelled,
            DomainError::Storage { .. } | DomainError::Internal { .. } => FailureKind::Internal,
        }
    }

    /// Whether this is an unexpected fault rather than an ordinary failure
    pub fn is_fault(&self) -> bool {
        self.failure_kind() == FailureKind::Internal
    }

    /// Message safe to show to callers
    pub fn public_message(&self) -> String {
        if self.is_fault() {
            "An unexpected error occurred. Please try again later.".to_string()
        } else {
            self.to_string()
        }
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
