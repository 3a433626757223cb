//! User repository trait.

use async_trait::async_trait;

use super::base::Repository;
use crate::domain::entities::User;
use crate::domain::specification::{user, SortOrder};
use crate::errors::DomainResult;
use crate::services::query;

/// User persistence with lookups used by authentication and alerts
#[async_trait]
pub trait UserRepository: Repository<User> {
    /// Find an active user by email, ignoring case
    ///
    /// # Returns
    /// * `Ok(Some(User))` - User found
    /// * `Ok(None)` - No active user with this email
    async fn find_by_email(&self, email: &str) -> DomainResult<Option<User>> {
        let matches = query::fetch_all(self, &user::with_email(email), SortOrder::NewestFirst).await?;
        Ok(matches.into_iter().next())
    }

    /// Whether an active user already registered `email`
    async fn email_exists(&self, email: &str) -> DomainResult<bool> {
        query::exists(self, &user::with_email(email)).await
    }

    /// Active administrators, oldest account first
    async fn find_administrators(&self) -> DomainResult<Vec<User>> {
        let mut admins = query::fetch_all(self, &user::administrators(), SortOrder::NewestFirst).await?;
        admins.reverse();
        Ok(admins)
    }
}

impl UserRepository for super::InMemoryRepository<User> {}
