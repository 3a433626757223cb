//! Deployment environment and log output settings

use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::str::FromStr;

/// Deployment environment, read from `ENVIRONMENT`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    pub fn is_production(&self) -> bool {
        *self == Environment::Production
    }

    /// Development relaxes CORS to any origin
    pub fn is_development(&self) -> bool {
        *self == Environment::Development
    }

    /// Unset or unrecognised values fall back to development
    pub fn from_env() -> Self {
        env::var("ENVIRONMENT")
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or_default()
    }

    fn as_str(&self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Staging => "staging",
            Environment::Production => "production",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "development" | "dev" => Ok(Environment::Development),
            "staging" | "stage" => Ok(Environment::Staging),
            "production" | "prod" => Ok(Environment::Production),
            other => Err(format!("Unknown environment: {}", other)),
        }
    }
}

/// Subscriber output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Json,
    #[default]
    Pretty,
    Compact,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "json" => Ok(LogFormat::Json),
            "pretty" => Ok(LogFormat::Pretty),
            "compact" => Ok(LogFormat::Compact),
            other => Err(format!("Unknown log format: {}", other)),
        }
    }
}

/// Tracing subscriber settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Default filter directive when `RUST_LOG` is unset, e.g. "info" or "inv_core=debug"
    pub level: String,

    #[serde(default)]
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self::for_environment(Environment::default())
    }
}

impl LoggingConfig {
    /// Verbose human-readable output in development, JSON lines elsewhere
    pub fn for_environment(env: Environment) -> Self {
        if env.is_development() {
            Self {
                level: "debug".to_string(),
                format: LogFormat::Pretty,
            }
        } else {
            Self {
                level: "info".to_string(),
                format: LogFormat::Json,
            }
        }
    }

    /// Environment defaults overridden by `LOG_LEVEL` and `LOG_FORMAT`
    pub fn from_env(env: Environment) -> Self {
        let defaults = Self::for_environment(env);
        Self {
            level: env::var("LOG_LEVEL").unwrap_or(defaults.level),
            format: env::var("LOG_FORMAT")
                .ok()
                .and_then(|value| value.parse().ok())
                .unwrap_or(defaults.format),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_aliases() {
        assert_eq!("dev".parse::<Environment>().unwrap(), Environment::Development);
        assert_eq!(" Stage ".parse::<Environment>().unwrap(), Environment::Staging);
        assert_eq!("PROD".parse::<Environment>().unwrap(), Environment::Production);
        assert!("qa".parse::<Environment>().is_err());
    }

    #[test]
    fn display_parses_back() {
        for env in [Environment::Development, Environment::Staging, Environment::Production] {
            assert_eq!(env.to_string().parse::<Environment>().unwrap(), env);
        }
    }

    #[test]
    fn logging_defaults_follow_environment() {
        let dev = LoggingConfig::for_environment(Environment::Development);
        assert_eq!(dev.level, "debug");
        assert_eq!(dev.format, LogFormat::Pretty);

        let staging = LoggingConfig::for_environment(Environment::Staging);
        assert_eq!(staging.level, "info");
        assert_eq!(staging.format, LogFormat::Json);
    }

    #[test]
    fn log_format_is_case_insensitive() {
        assert_eq!("JSON".parse::<LogFormat>().unwrap(), LogFormat::Json);
        assert!("xml".parse::<LogFormat>().is_err());
    }
}
