//! Database configuration module

use serde::{Deserialize, Serialize};

use super::{env_or, env_string};

/// Which storage backend the server runs against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// MongoDB document store
    #[default]
    Mongo,
    /// Process-local store, data is lost on restart
    Memory,
}

impl std::str::FromStr for StorageBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mongo" | "mongodb" => Ok(StorageBackend::Mongo),
            "memory" | "in-memory" => Ok(StorageBackend::Memory),
            _ => Err(format!("Invalid storage backend: {}", s)),
        }
    }
}

/// Document store configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// Storage backend selection
    #[serde(default)]
    pub backend: StorageBackend,

    /// MongoDB connection string
    pub url: String,

    /// Database name
    pub database_name: String,

    /// Server selection / connect timeout in seconds
    pub connect_timeout_secs: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::Mongo,
            url: String::from("mongodb://localhost:27017"),
            database_name: String::from("inventory"),
            connect_timeout_secs: 10,
        }
    }
}

impl DatabaseConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            backend: env_or("STORAGE_BACKEND", defaults.backend),
            url: env_string("MONGODB_URL", &defaults.url),
            database_name: env_string("MONGODB_DATABASE", &defaults.database_name),
            connect_timeout_secs: env_or("MONGODB_CONNECT_TIMEOUT_SECS", defaults.connect_timeout_secs),
        }
    }

    /// Create a new database configuration with URL
    pub fn new(url: impl Into<String>, database_name: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            database_name: database_name.into(),
            ..Default::default()
        }
    }
}
