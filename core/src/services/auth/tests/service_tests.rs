//! Unit tests for the authentication service

use std::sync::Arc;

use crate::domain::entities::{User, UserRole};
use crate::errors::{AuthError, DomainError};
use crate::repositories::{InMemoryRepository, Repository};
use crate::services::auth::{AuthService, Registration};
use crate::services::password::PasswordHasher;
use crate::services::token::{TokenService, TokenServiceConfig};

struct Fixture {
    users: InMemoryRepository<User>,
    tokens: Arc<TokenService>,
    service: AuthService,
}

fn fixture() -> Fixture {
    let users = InMemoryRepository::<User>::new();
    let token_service = Arc::new(TokenService::new(TokenServiceConfig {
        jwt_secret: "test-secret-key-that-is-long-enough-for-hs256".to_string(),
        ..TokenServiceConfig::default()
    }));
    let service = AuthService::new(
        Arc::new(users.clone()),
        Arc::clone(&token_service),
        PasswordHasher::new(4),
    );
    Fixture {
        users,
        tokens: token_service,
        service,
    }
}

fn registration(email: &str) -> Registration {
    Registration {
        email: email.to_string(),
        password: "Secret123".to_string(),
        first_name: "Grace".to_string(),
        last_name: "Hopper".to_string(),
        role: UserRole::Employee,
    }
}

#[tokio::test]
async fn test_register_opens_session() {
    let f = fixture();

    let auth = f.service.register(registration("Grace@Example.com")).await.unwrap();

    assert_eq!(auth.user.email, "grace@example.com");
    assert_ne!(auth.user.password_hash, "Secret123");
    let stored = f.users.find_by_id(&auth.user.id).await.unwrap().unwrap();
    assert_eq!(stored.refresh_token.as_deref(), Some(auth.session.refresh_token.as_str()));
}

#[tokio::test]
async fn test_register_rejects_duplicate_email_ignoring_case() {
    let f = fixture();
    f.service.register(registration("grace@example.com")).await.unwrap();

    let result = f.service.register(registration("GRACE@example.com")).await;

    assert!(matches!(result, Err(DomainError::BusinessRule { .. })));
}

#[tokio::test]
async fn test_login_with_valid_and_invalid_credentials() {
    let f = fixture();
    f.service.register(registration("grace@example.com")).await.unwrap();

    assert!(f.service.login("grace@example.com", "Secret123").await.is_ok());

    let wrong_password = f.service.login("grace@example.com", "Wrong123").await;
    assert!(matches!(wrong_password, Err(DomainError::Auth(AuthError::InvalidCredentials))));

    let unknown = f.service.login("nobody@example.com", "Secret123").await;
    assert!(matches!(unknown, Err(DomainError::Auth(AuthError::InvalidCredentials))));
}

#[tokio::test]
async fn test_login_rejects_inactive_user() {
    let f = fixture();
    let auth = f.service.register(registration("grace@example.com")).await.unwrap();
    f.users.soft_delete(&auth.user.id).await.unwrap();

    let result = f.service.login("grace@example.com", "Secret123").await;
    assert!(matches!(result, Err(DomainError::Auth(AuthError::InvalidCredentials))));
}

#[tokio::test]
async fn test_refresh_rotates_both_tokens() {
    let f = fixture();
    let first = f.service.register(registration("grace@example.com")).await.unwrap();

    let second = f
        .service
        .refresh(&first.session.access_token, &first.session.refresh_token)
        .await
        .unwrap();

    assert_ne!(first.session.access_token, second.session.access_token);
    assert_ne!(first.session.refresh_token, second.session.refresh_token);

    // The old refresh token is single-use
    let replay = f
        .service
        .refresh(&second.session.access_token, &first.session.refresh_token)
        .await;
    assert!(matches!(replay, Err(DomainError::Auth(AuthError::InvalidRefreshToken))));
}

#[tokio::test]
async fn test_mismatched_refresh_leaves_session_intact() {
    let f = fixture();
    let auth = f.service.register(registration("grace@example.com")).await.unwrap();

    let rejected = f.service.refresh(&auth.session.access_token, "not-the-token").await;
    assert!(matches!(rejected, Err(DomainError::Auth(AuthError::InvalidRefreshToken))));

    let stored = f.users.find_by_id(&auth.user.id).await.unwrap().unwrap();
    assert_eq!(stored.refresh_token, auth.user.refresh_token);

    let retried = f
        .service
        .refresh(&auth.session.access_token, &auth.session.refresh_token)
        .await;
    assert!(retried.is_ok());
}

#[tokio::test]
async fn test_refresh_rejects_expired_refresh_token() {
    let f = fixture();
    let auth = f.service.register(registration("grace@example.com")).await.unwrap();

    let mut user = f.users.find_by_id(&auth.user.id).await.unwrap().unwrap();
    user.refresh_token_expires_at = Some(chrono::Utc::now() - chrono::Duration::seconds(1));
    f.users.update(user).await.unwrap();

    let result = f
        .service
        .refresh(&auth.session.access_token, &auth.session.refresh_token)
        .await;
    assert!(matches!(result, Err(DomainError::Auth(AuthError::InvalidRefreshToken))));
}

#[tokio::test]
async fn test_refresh_rejects_malformed_access_token() {
    let f = fixture();
    let auth = f.service.register(registration("grace@example.com")).await.unwrap();

    let result = f.service.refresh("garbage", &auth.session.refresh_token).await;
    assert!(matches!(result, Err(DomainError::Token(_))));
}

#[tokio::test]
async fn test_logout_clears_session() {
    let f = fixture();
    let auth = f.service.register(registration("grace@example.com")).await.unwrap();

    f.service.logout(&auth.user.id).await.unwrap();

    let stored = f.users.find_by_id(&auth.user.id).await.unwrap().unwrap();
    assert!(!stored.has_session());

    let result = f
        .service
        .refresh(&auth.session.access_token, &auth.session.refresh_token)
        .await;
    assert!(matches!(result, Err(DomainError::Auth(AuthError::InvalidRefreshToken))));
}

#[tokio::test]
async fn test_refresh_rejects_inactive_user() {
    let f = fixture();
    let auth = f.service.register(registration("grace@example.com")).await.unwrap();
    f.users.soft_delete(&auth.user.id).await.unwrap();

    let result = f
        .service
        .refresh(&auth.session.access_token, &auth.session.refresh_token)
        .await;

    assert!(matches!(result, Err(DomainError::Auth(AuthError::InvalidRefreshToken))));
}

#[tokio::test]
async fn test_refresh_rejects_unknown_subject() {
    let f = fixture();
    let stranger = User::new(
        "ghost@example.com",
        "hash".to_string(),
        "Ghost".to_string(),
        "User".to_string(),
        UserRole::Employee,
    );
    let session = f.tokens.issue_session(&stranger).unwrap();

    let result = f
        .service
        .refresh(&session.access_token, &session.refresh_token)
        .await;

    assert!(matches!(result, Err(DomainError::Auth(AuthError::InvalidRefreshToken))));
    assert!(f.users.find_by_id(&stranger.id).await.unwrap().is_none());
}
