//! Authentication configuration

use serde::{Deserialize, Serialize};

use super::{env_or, env_string};

const DEFAULT_SECRET: &str = "development-secret-please-change-in-production";

/// JWT authentication configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// JWT secret key for signing tokens
    pub secret: String,

    /// JWT issuer claim
    pub issuer: String,

    /// JWT audience claim
    pub audience: String,

    /// Access token lifetime in minutes
    pub access_token_expiry_minutes: i64,

    /// Refresh token lifetime in days
    pub refresh_token_expiry_days: i64,

    /// bcrypt work factor for password hashes
    #[serde(default = "default_bcrypt_cost")]
    pub bcrypt_cost: u32,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: String::from(DEFAULT_SECRET),
            issuer: String::from("inventory-api"),
            audience: String::from("inventory-client"),
            access_token_expiry_minutes: 60,
            refresh_token_expiry_days: 7,
            bcrypt_cost: default_bcrypt_cost(),
        }
    }
}

impl JwtConfig {
    /// Create a new JWT configuration with secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            ..Default::default()
        }
    }

    /// Create from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            secret: env_string("JWT_SECRET", &defaults.secret),
            issuer: env_string("JWT_ISSUER", &defaults.issuer),
            audience: env_string("JWT_AUDIENCE", &defaults.audience),
            access_token_expiry_minutes: env_or(
                "JWT_ACCESS_TOKEN_EXPIRY_MINUTES",
                defaults.access_token_expiry_minutes,
            ),
            refresh_token_expiry_days: env_or(
                "JWT_REFRESH_TOKEN_EXPIRY_DAYS",
                defaults.refresh_token_expiry_days,
            ),
            bcrypt_cost: env_or("BCRYPT_COST", defaults.bcrypt_cost),
        }
    }

    /// Check if using default secret (security warning)
    pub fn is_using_default_secret(&self) -> bool {
        self.secret == DEFAULT_SECRET
    }
}

fn default_bcrypt_cost() -> u32 {
    12
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jwt_config_default() {
        let config = JwtConfig::default();
        assert_eq!(config.access_token_expiry_minutes, 60);
        assert_eq!(config.refresh_token_expiry_days, 7);
        assert!(config.is_using_default_secret());
    }

    #[test]
    fn test_jwt_config_custom_secret() {
        let config = JwtConfig::new("a-very-long-secret-value-for-signing-tokens");
        assert!(!config.is_using_default_secret());
        assert_eq!(config.issuer, "inventory-api");
    }
}
