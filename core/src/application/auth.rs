//! Authentication commands

use async_trait::async_trait;
use inv_shared::FieldErrors;
use serde::Deserialize;
use validator::Validate;

use super::dto::AuthResponse;
use super::mediator::{Handler, Mediator, Reply};
use super::request::{AccessPolicy, Request, RequestContext};
use super::validation::{check, not_blank, password_strength};
use crate::domain::entities::UserRole;
use crate::errors::DomainResult;
use crate::services::Registration;

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Register {
    #[validate(email(message = "A valid email address is required"))]
    pub email: String,
    #[validate(
        length(min = 6, message = "Password must be at least 6 characters"),
        custom(function = "password_strength")
    )]
    pub password: String,
    #[validate(
        length(min = 1, max = 100, message = "First name is required and must not exceed 100 characters"),
        custom(function = "not_blank")
    )]
    pub first_name: String,
    #[validate(
        length(min = 1, max = 100, message = "Last name is required and must not exceed 100 characters"),
        custom(function = "not_blank")
    )]
    pub last_name: String,
    /// Defaults to Employee
    #[serde(default)]
    pub role: Option<UserRole>,
}

impl Request for Register {
    type Output = AuthResponse;
    const NAME: &'static str = "Register";
    const POLICY: AccessPolicy = AccessPolicy::Anonymous;

    fn validate_request(&self) -> Result<(), FieldErrors> {
        check(self)
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct Login {
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

impl Request for Login {
    type Output = AuthResponse;
    const NAME: &'static str = "Login";
    const POLICY: AccessPolicy = AccessPolicy::Anonymous;

    fn validate_request(&self) -> Result<(), FieldErrors> {
        check(self)
    }
}

/// Rotate a session; the access token may already be expired
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RefreshToken {
    #[validate(length(min = 1, message = "Access token is required"))]
    pub access_token: String,
    #[validate(length(min = 1, message = "Refresh token is required"))]
    pub refresh_token: String,
}

impl Request for RefreshToken {
    type Output = AuthResponse;
    const NAME: &'static str = "RefreshToken";
    const POLICY: AccessPolicy = AccessPolicy::Anonymous;

    fn validate_request(&self) -> Result<(), FieldErrors> {
        check(self)
    }
}

/// End the caller's session
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Logout;

impl Request for Logout {
    type Output = bool;
    const NAME: &'static str = "Logout";
    const POLICY: AccessPolicy = AccessPolicy::Authenticated;
}

#[async_trait]
impl Handler<Register> for Mediator {
    async fn handle(&self, request: Register, _ctx: &RequestContext) -> DomainResult<Reply<AuthResponse>> {
        let registration = Registration {
            email: request.email,
            password: request.password,
            first_name: request.first_name,
            last_name: request.last_name,
            role: request.role.unwrap_or_default(),
        };

        let auth = self.auth.register(registration).await?;
        Ok(Reply::new(
            AuthResponse::new(&auth.user, auth.session),
            "User registered successfully",
        ))
    }
}

#[async_trait]
impl Handler<Login> for Mediator {
    async fn handle(&self, request: Login, _ctx: &RequestContext) -> DomainResult<Reply<AuthResponse>> {
        let auth = self.auth.login(&request.email, &request.password).await?;
        Ok(Reply::new(AuthResponse::new(&auth.user, auth.session), "Login successful"))
    }
}

#[async_trait]
impl Handler<RefreshToken> for Mediator {
    async fn handle(&self, request: RefreshToken, _ctx: &RequestContext) -> DomainResult<Reply<AuthResponse>> {
        let auth = self
            .auth
            .refresh(&request.access_token, &request.refresh_token)
            .await?;
        Ok(Reply::new(
            AuthResponse::new(&auth.user, auth.session),
            "Token refreshed successfully",
        ))
    }
}

#[async_trait]
impl Handler<Logout> for Mediator {
    async fn handle(&self, _request: Logout, ctx: &RequestContext) -> DomainResult<Reply<bool>> {
        let user = ctx.require_user()?;
        self.auth.logout(&user.id).await?;
        Ok(Reply::new(true, "Logged out successfully"))
    }
}
