//! Notification repository trait.

use async_trait::async_trait;
use inv_shared::{PaginatedResponse, Pagination};

use super::base::Repository;
use crate::domain::entities::Notification;
use crate::domain::specification::{notification, SortOrder};
use crate::errors::DomainResult;
use crate::services::query;

/// Notification persistence
#[async_trait]
pub trait NotificationRepository: Repository<Notification> {
    /// A user's notifications, newest first
    ///
    /// # Arguments
    /// * `user_id` - Owner
    /// * `only_unread` - Restrict to unread notifications
    /// * `pagination` - Page window
    async fn find_for_user(
        &self,
        user_id: &str,
        only_unread: bool,
        pagination: &Pagination,
    ) -> DomainResult<PaginatedResponse<Notification>> {
        let spec = if only_unread {
            notification::unread_for_user(user_id)
        } else {
            notification::for_user(user_id)
        };
        query::fetch_page(self, &spec, SortOrder::NewestFirst, pagination).await
    }

    /// Number of unread notifications for a user
    async fn unread_count(&self, user_id: &str) -> DomainResult<u64> {
        query::count(self, &notification::unread_for_user(user_id)).await
    }

    /// Mark every unread notification of a user as read
    ///
    /// # Returns
    /// * `Ok(n)` - Number of notifications that changed
    async fn mark_all_as_read(&self, user_id: &str) -> DomainResult<u64> {
        let unread =
            query::fetch_all(self, &notification::unread_for_user(user_id), SortOrder::NewestFirst).await?;
        let mut marked = 0;
        for mut item in unread {
            item.mark_as_read();
            self.update(item).await?;
            marked += 1;
        }
        Ok(marked)
    }
}

impl NotificationRepository for super::InMemoryRepository<Notification> {}
