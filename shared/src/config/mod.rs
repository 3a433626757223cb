//! Configuration module with business-specific sub-modules
//!
//! This module organizes configuration into logical areas:
//! - `auth` - JWT issuance and password hashing
//! - `database` - Document store connection
//! - `email` - Outbound mail relay
//! - `environment` - Environment detection and logging configuration
//! - `pagination` - Default and maximum page sizes
//! - `server` - HTTP server and CORS origins

pub mod auth;
pub mod database;
pub mod email;
pub mod environment;
pub mod pagination;
pub mod server;

use serde::{Deserialize, Serialize};
use std::str::FromStr;

// Re-export commonly used types
pub use auth::JwtConfig;
pub use database::{DatabaseConfig, StorageBackend};
pub use email::EmailConfig;
pub use environment::{Environment, LogFormat, LoggingConfig};
pub use pagination::PaginationConfig;
pub use server::ServerConfig;

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// Server configuration
    pub server: ServerConfig,

    /// Database configuration
    pub database: DatabaseConfig,

    /// JWT and password hashing configuration
    pub jwt: JwtConfig,

    /// Page size limits for list endpoints
    #[serde(default)]
    pub pagination: PaginationConfig,

    /// Outbound email configuration
    #[serde(default)]
    pub email: EmailConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        let env = Environment::default();
        Self {
            environment: env,
            server: ServerConfig::default(),
            database: DatabaseConfig::default(),
            jwt: JwtConfig::default(),
            pagination: PaginationConfig::default(),
            email: EmailConfig::default(),
            logging: LoggingConfig::for_environment(env),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let environment = Environment::from_env();
        Self {
            environment,
            server: ServerConfig::from_env(),
            database: DatabaseConfig::from_env(),
            jwt: JwtConfig::from_env(),
            pagination: PaginationConfig::from_env(),
            email: EmailConfig::from_env(),
            logging: LoggingConfig::from_env(environment),
        }
    }

    /// Check settings that must never reach production unchanged
    pub fn validate(&self) -> Result<(), String> {
        if self.environment.is_production() && self.jwt.is_using_default_secret() {
            return Err("JWT_SECRET must be set in production".to_string());
        }
        if self.jwt.secret.len() < 32 {
            return Err("JWT_SECRET must be at least 32 characters long".to_string());
        }
        if self.pagination.max_page_size == 0 {
            return Err("PAGINATION_MAX_PAGE_SIZE must be greater than zero".to_string());
        }
        Ok(())
    }
}

/// Read an environment variable and parse it, falling back to `default`
/// when the variable is missing or malformed
pub(crate) fn env_or<T: FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|value| value.trim().parse().ok())
        .unwrap_or(default)
}

/// Read a string environment variable with a default
pub(crate) fn env_string(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
