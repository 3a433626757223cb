//! Infrastructure-specific error types

use inv_core::errors::DomainError;

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// MongoDB driver error
    #[error("Database error: {0}")]
    Database(#[from] mongodb::error::Error),

    /// Stored document does not map onto the entity
    #[error("Mapping error: {0}")]
    Mapping(String),

    /// HTTP request error for external services
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    /// Mail relay rejected the message
    #[error("Email delivery error: {0}")]
    Email(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl InfrastructureError {
    /// Whether a write was rejected by a unique index
    pub fn is_duplicate_key(&self) -> bool {
        use mongodb::error::{ErrorKind, WriteFailure};

        match self {
            InfrastructureError::Database(e) => matches!(
                e.kind.as_ref(),
                ErrorKind::Write(WriteFailure::WriteError(write)) if write.code == 11000
            ),
            _ => false,
        }
    }
}

impl From<InfrastructureError> for DomainError {
    fn from(error: InfrastructureError) -> Self {
        if error.is_duplicate_key() {
            return DomainError::business("A record with the same unique value already exists");
        }

        match error {
            InfrastructureError::Database(_)
            | InfrastructureError::Mapping(_) => DomainError::Storage {
                message: error.to_string(),
            },
            other => DomainError::Internal {
                message: other.to_string(),
            },
        }
    }
}
