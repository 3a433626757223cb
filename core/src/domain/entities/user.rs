//! User entity representing a registered user of the inventory system.

use chrono::{DateTime, Utc};
use constant_time_eq::constant_time_eq;
use serde::{Deserialize, Serialize};

use super::entity::{impl_entity, new_entity_id};

/// Access level of a user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum UserRole {
    /// Regular staff member
    #[default]
    Employee,
    /// Manages catalog, receives stock alerts, generates reports
    Administrator,
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserRole::Employee => write!(f, "Employee"),
            UserRole::Administrator => write!(f, "Administrator"),
        }
    }
}

impl std::str::FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "employee" => Ok(UserRole::Employee),
            "administrator" | "admin" => Ok(UserRole::Administrator),
            _ => Err(format!("Invalid role: {}", s)),
        }
    }
}

/// User entity
///
/// Holds at most one refresh token. A stored token means the user has an
/// active session; clearing it ends the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique identifier for the user
    pub id: String,

    /// Lower-cased email, unique case-insensitively
    pub email: String,

    /// bcrypt hash of the password
    pub password_hash: String,

    pub first_name: String,

    pub last_name: String,

    pub role: UserRole,

    /// Current refresh token, if a session is active
    pub refresh_token: Option<String>,

    /// Expiry of the current refresh token
    pub refresh_token_expires_at: Option<DateTime<Utc>>,

    pub created_at: DateTime<Utc>,

    pub updated_at: Option<DateTime<Utc>>,

    pub is_active: bool,
}

impl_entity!(User, "User");

impl User {
    /// Creates a new User instance without a session
    pub fn new(
        email: &str,
        password_hash: String,
        first_name: String,
        last_name: String,
        role: UserRole,
    ) -> Self {
        Self {
            id: new_entity_id(),
            email: email.trim().to_lowercase(),
            password_hash,
            first_name,
            last_name,
            role,
            refresh_token: None,
            refresh_token_expires_at: None,
            created_at: Utc::now(),
            updated_at: None,
            is_active: true,
        }
    }

    /// "First Last"
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Checks if the user is an administrator
    pub fn is_administrator(&self) -> bool {
        self.role == UserRole::Administrator
    }

    /// Store a freshly issued refresh token, overwriting any previous one
    pub fn start_session(&mut self, refresh_token: String, expires_at: DateTime<Utc>) {
        self.refresh_token = Some(refresh_token);
        self.refresh_token_expires_at = Some(expires_at);
        self.updated_at = Some(Utc::now());
    }

    /// Clear the stored refresh token
    pub fn end_session(&mut self) {
        self.refresh_token = None;
        self.refresh_token_expires_at = None;
        self.updated_at = Some(Utc::now());
    }

    /// Whether a refresh token is stored
    pub fn has_session(&self) -> bool {
        self.refresh_token.is_some()
    }

    /// The presented token matches the stored one exactly and has not expired
    pub fn session_accepts(&self, presented: &str, now: DateTime<Utc>) -> bool {
        match (&self.refresh_token, self.refresh_token_expires_at) {
            (Some(stored), Some(expires_at)) => {
                constant_time_eq(stored.as_bytes(), presented.as_bytes()) && now < expires_at
            }
            _ => false,
        }
    }
}
