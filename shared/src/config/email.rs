//! Outbound email configuration

use serde::{Deserialize, Serialize};

use super::{env_or, env_string};

/// Mail relay settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EmailConfig {
    /// When false, emails are only logged
    pub enabled: bool,

    /// HTTP endpoint of the mail relay
    pub api_url: String,

    /// Bearer key for the mail relay
    #[serde(default)]
    pub api_key: String,

    /// From address
    pub sender_email: String,

    /// From display name
    pub sender_name: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            api_url: String::from("http://localhost:8025/api/send"),
            api_key: String::new(),
            sender_email: String::from("noreply@inventory.local"),
            sender_name: String::from("Inventory System"),
            timeout_secs: 10,
        }
    }
}

impl EmailConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            enabled: env_or("EMAIL_ENABLED", defaults.enabled),
            api_url: env_string("EMAIL_API_URL", &defaults.api_url),
            api_key: env_string("EMAIL_API_KEY", &defaults.api_key),
            sender_email: env_string("EMAIL_SENDER_ADDRESS", &defaults.sender_email),
            sender_name: env_string("EMAIL_SENDER_NAME", &defaults.sender_name),
            timeout_secs: env_or("EMAIL_TIMEOUT_SECS", defaults.timeout_secs),
        }
    }
}
