//! Main authentication service implementation

use std::sync::Arc;

use chrono::Utc;

use crate::domain::entities::{IssuedSession, User, UserRole};
use crate::errors::{AuthError, DomainError, DomainResult};
use crate::repositories::UserRepository;
use crate::services::password::PasswordHasher;
use crate::services::token::TokenService;

/// New account details, already validated for shape
#[derive(Debug, Clone)]
pub struct Registration {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub role: UserRole,
}

/// Outcome of register, login or refresh
#[derive(Debug, Clone)]
pub struct AuthSession {
    /// The user as persisted, including the new refresh token
    pub user: User,
    /// Tokens to hand to the client
    pub session: IssuedSession,
}

/// Authentication service managing the session lifecycle
pub struct AuthService {
    /// User repository for session persistence
    user_repository: Arc<dyn UserRepository>,
    /// Service for JWT and refresh token issuance
    token_service: Arc<TokenService>,
    password_hasher: PasswordHasher,
}

impl AuthService {
    /// Create a new authentication service
    ///
    /// # Arguments
    ///
    /// * `user_repository` - Repository for user data persistence
    /// * `token_service` - Service for token issuance and verification
    /// * `password_hasher` - bcrypt hasher
    pub fn new(
        user_repository: Arc<dyn UserRepository>,
        token_service: Arc<TokenService>,
        password_hasher: PasswordHasher,
    ) -> Self {
        Self {
            user_repository,
            token_service,
            password_hasher,
        }
    }

    /// Create an account and open its first session
    ///
    /// # Returns
    ///
    /// * `Ok(AuthSession)` - The new user with issued tokens
    /// * `Err(DomainError::BusinessRule)` - Email already registered
    pub async fn register(&self, registration: Registration) -> DomainResult<AuthSession> {
        if self.user_repository.email_exists(&registration.email).await? {
            return Err(DomainError::business("Email is already registered"));
        }

        let password_hash = self.password_hasher.hash(&registration.password)?;
        let mut user = User::new(
            &registration.email,
            password_hash,
            registration.first_name.trim().to_string(),
            registration.last_name.trim().to_string(),
            registration.role,
        );

        let session = self.token_service.issue_session(&user)?;
        user.start_session(session.refresh_token.clone(), session.refresh_expires_at);
        let user = self.user_repository.add(user).await?;

        tracing::info!(user_id = %user.id, role = %user.role, "User registered");

        Ok(AuthSession { user, session })
    }

    /// Verify credentials and open a new session
    ///
    /// Unknown email, wrong password and inactive accounts all fail the same way.
    pub async fn login(&self, email: &str, password: &str) -> DomainResult<AuthSession> {
        let user = match self.user_repository.find_by_email(email).await? {
            Some(user) if user.is_active => user,
            _ => {
                tracing::debug!("Login attempt for unknown email");
                return Err(AuthError::InvalidCredentials.into());
            }
        };

        if !self.password_hasher.verify(password, &user.password_hash) {
            tracing::warn!(user_id = %user.id, "Login failed: wrong password");
            return Err(AuthError::InvalidCredentials.into());
        }

        let auth = self.rotate(user).await?;
        tracing::info!(user_id = %auth.user.id, "User logged in");
        Ok(auth)
    }

    /// Exchange an (expired) access token plus the current refresh token for new tokens
    ///
    /// A rejected refresh leaves the stored session untouched.
    ///
    /// # Returns
    ///
    /// * `Ok(AuthSession)` - Rotated tokens
    /// * `Err(DomainError::Token)` - Access token unreadable
    /// * `Err(AuthError::InvalidRefreshToken)` - Unknown user, mismatched or expired refresh token
    pub async fn refresh(&self, access_token: &str, refresh_token: &str) -> DomainResult<AuthSession> {
        let claims = self.token_service.claims_from_expired_token(access_token)?;

        let user = match self.user_repository.get_active(&claims.sub).await? {
            Some(user) => user,
            None => return Err(AuthError::InvalidRefreshToken.into()),
        };

        if !user.session_accepts(refresh_token, Utc::now()) {
            tracing::warn!(user_id = %user.id, "Refresh rejected: token mismatch or expired");
            return Err(AuthError::InvalidRefreshToken.into());
        }

        let auth = self.rotate(user).await?;
        tracing::debug!(user_id = %auth.user.id, "Session refreshed");
        Ok(auth)
    }

    /// End the user's session by clearing the stored refresh token
    ///
    /// Logging out without a session is a no-op.
    pub async fn logout(&self, user_id: &str) -> DomainResult<()> {
        let mut user = self
            .user_repository
            .get_active(user_id)
            .await?
            .ok_or_else(|| DomainError::not_found("User"))?;

        if user.has_session() {
            user.end_session();
            self.user_repository.update(user).await?;
        }

        tracing::info!(user_id = %user_id, "User logged out");
        Ok(())
    }

    async fn rotate(&self, mut user: User) -> DomainResult<AuthSession> {
        let session = self.token_service.issue_session(&user)?;
        user.start_session(session.refresh_token.clone(), session.refresh_expires_at);
        let user = self.user_repository.update(user).await?;
        Ok(AuthSession { user, session })
    }
}
