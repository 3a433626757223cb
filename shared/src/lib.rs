//! Shared utilities and common types for the inventory server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types loaded from the environment
//! - Error payloads and the uniform response envelope
//! - Pagination math shared by every list endpoint

pub mod config;
pub mod errors;
pub mod types;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, DatabaseConfig, EmailConfig, Environment, JwtConfig, LogFormat, LoggingConfig,
    PaginationConfig, ServerConfig, StorageBackend,
};
pub use errors::{error_codes, ErrorResponse, FieldErrors};
pub use types::{ApiResponse, FailureKind, PaginatedResponse, Pagination};
