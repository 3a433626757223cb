//! Main token service implementation

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use chrono::{DateTime, Duration, TimeZone, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use rand::RngCore;

use crate::domain::entities::{Claims, IssuedSession, User};
use crate::errors::{DomainError, DomainResult, TokenError};

use super::config::TokenServiceConfig;

/// Refresh tokens are this many random bytes before encoding
const REFRESH_TOKEN_BYTES: usize = 64;

/// Issues and validates JWT access tokens and opaque refresh tokens
///
/// Stateless: storing the refresh token on the user record is the caller's job.
pub struct TokenService {
    config: TokenServiceConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    /// Full validation, used for authenticating requests
    validation: Validation,
    /// Signature, issuer and audience only, used when refreshing
    refresh_validation: Validation,
}

impl TokenService {
    /// Creates a new token service instance
    ///
    /// # Arguments
    ///
    /// * `config` - Token service configuration
    pub fn new(config: TokenServiceConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.jwt_secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[config.issuer.as_str()]);
        validation.set_audience(&[config.audience.as_str()]);
        validation.validate_exp = true;
        validation.validate_nbf = true;
        validation.leeway = 0;

        // Refreshing implies the access token may already be expired
        let mut refresh_validation = validation.clone();
        refresh_validation.validate_exp = false;
        refresh_validation.validate_nbf = false;

        Self {
            config,
            encoding_key,
            decoding_key,
            validation,
            refresh_validation,
        }
    }

    /// Issue a new access token and refresh token for a user
    ///
    /// # Returns
    ///
    /// * `Ok(IssuedSession)` - Both tokens with their expiries
    /// * `Err(DomainError)` - Signing failed
    pub fn issue_session(&self, user: &User) -> DomainResult<IssuedSession> {
        let claims = Claims::for_user(
            user,
            &self.config.issuer,
            &self.config.audience,
            Duration::minutes(self.config.access_token_expiry_minutes),
        );
        let access_token = self.encode_jwt(&claims)?;
        let access_expires_at = timestamp_to_datetime(claims.exp)?;

        Ok(IssuedSession {
            access_token,
            access_expires_at,
            refresh_token: generate_refresh_token(),
            refresh_expires_at: Utc::now() + Duration::days(self.config.refresh_token_expiry_days),
        })
    }

    /// Verifies an access token and returns the claims
    ///
    /// # Returns
    ///
    /// * `Ok(Claims)` - The decoded claims if valid and live
    /// * `Err(TokenError)` - Token is invalid, expired, or malformed
    pub fn verify_access_token(&self, token: &str) -> DomainResult<Claims> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(map_jwt_error)
    }

    /// Extract claims from an access token that may have expired
    ///
    /// Signature, issuer and audience are still checked; expiry is not.
    pub fn claims_from_expired_token(&self, token: &str) -> DomainResult<Claims> {
        decode::<Claims>(token, &self.decoding_key, &self.refresh_validation)
            .map(|data| data.claims)
            .map_err(map_jwt_error)
    }

    /// Encodes claims into a JWT
    pub(crate) fn encode_jwt(&self, claims: &Claims) -> DomainResult<String> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding_key)
            .map_err(|_| DomainError::Token(TokenError::TokenGenerationFailed))
    }
}

fn map_jwt_error(error: jsonwebtoken::errors::Error) -> DomainError {
    let token_error = match error.kind() {
        ErrorKind::ExpiredSignature => TokenError::TokenExpired,
        ErrorKind::ImmatureSignature => TokenError::TokenNotYetValid,
        ErrorKind::InvalidSignature => TokenError::InvalidSignature,
        ErrorKind::InvalidIssuer | ErrorKind::InvalidAudience | ErrorKind::MissingRequiredClaim(_) => {
            TokenError::InvalidClaims
        }
        _ => TokenError::InvalidTokenFormat,
    };
    DomainError::Token(token_error)
}

fn generate_refresh_token() -> String {
    let mut bytes = [0u8; REFRESH_TOKEN_BYTES];
    rand::thread_rng().fill_bytes(&mut bytes);
    BASE64.encode(bytes)
}

fn timestamp_to_datetime(timestamp: i64) -> DomainResult<DateTime<Utc>> {
    Utc.timestamp_opt(timestamp, 0)
        .single()
        .ok_or(DomainError::Token(TokenError::TokenGenerationFailed))
}
