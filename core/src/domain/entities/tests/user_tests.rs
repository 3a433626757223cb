//! Unit tests for the user entity and its session state

use chrono::{Duration, Utc};

use crate::domain::entities::{User, UserRole};

fn user() -> User {
    User::new(
        "  Jane.Doe@Example.COM ",
        "hash".to_string(),
        "Jane".to_string(),
        "Doe".to_string(),
        UserRole::Employee,
    )
}

#[test]
fn test_email_is_normalized() {
    assert_eq!(user().email, "jane.doe@example.com");
    assert_eq!(user().full_name(), "Jane Doe");
}

#[test]
fn test_new_user_has_no_session() {
    let user = user();
    assert!(!user.has_session());
    assert!(!user.session_accepts("anything", Utc::now()));
}

#[test]
fn test_session_accepts_exact_unexpired_token() {
    let mut user = user();
    user.start_session("token-a".to_string(), Utc::now() + Duration::days(7));

    assert!(user.session_accepts("token-a", Utc::now()));
    assert!(!user.session_accepts("token-b", Utc::now()));
    assert!(!user.session_accepts("token-a ", Utc::now()));
    assert!(!user.session_accepts("token-a", Utc::now() + Duration::days(8)));
}

#[test]
fn test_end_session_clears_token() {
    let mut user = user();
    user.start_session("token-a".to_string(), Utc::now() + Duration::days(7));
    user.end_session();
    assert!(!user.has_session());
    assert!(user.refresh_token_expires_at.is_none());
}

#[test]
fn test_role_parsing() {
    assert_eq!("admin".parse::<UserRole>().unwrap(), UserRole::Administrator);
    assert_eq!("Employee".parse::<UserRole>().unwrap(), UserRole::Employee);
    assert!("owner".parse::<UserRole>().is_err());
    assert_eq!(UserRole::Administrator.to_string(), "Administrator");
}
