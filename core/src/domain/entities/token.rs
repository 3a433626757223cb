//! Token entities for JWT-based authentication.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::user::{User, UserRole};

/// Claims structure for JWT payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,

    /// User email at issuance
    pub email: String,

    /// User role at issuance
    pub role: UserRole,

    /// Issued at timestamp
    pub iat: i64,

    /// Not before timestamp
    pub nbf: i64,

    /// Expiration timestamp
    pub exp: i64,

    /// Issuer
    pub iss: String,

    /// Audience
    pub aud: String,

    /// JWT ID (unique identifier for the token)
    pub jti: String,
}

impl Claims {
    /// Creates new claims for an access token
    ///
    /// # Arguments
    ///
    /// * `user` - The token subject
    /// * `issuer` - `iss` claim
    /// * `audience` - `aud` claim
    /// * `lifetime` - Time until `exp`
    ///
    /// # Returns
    ///
    /// A new `Claims` instance with a unique `jti`
    pub fn for_user(user: &User, issuer: &str, audience: &str, lifetime: Duration) -> Self {
        let now = Utc::now();
        let expiry = now + lifetime;

        Self {
            sub: user.id.clone(),
            email: user.email.clone(),
            role: user.role,
            iat: now.timestamp(),
            nbf: now.timestamp(),
            exp: expiry.timestamp(),
            iss: issuer.to_string(),
            aud: audience.to_string(),
            jti: Uuid::new_v4().to_string(),
        }
    }

    /// Checks if the claims have expired
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }
}

/// Tokens handed to a client after login, registration or refresh
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedSession {
    /// Signed JWT access token
    pub access_token: String,

    /// Expiry of the access token
    pub access_expires_at: DateTime<Utc>,

    /// Opaque refresh token
    pub refresh_token: String,

    /// Expiry of the refresh token
    pub refresh_expires_at: DateTime<Utc>,
}
