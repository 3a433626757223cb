//! Notification queries and read-state commands for the calling user

use async_trait::async_trait;
use inv_shared::{PaginatedResponse, Pagination};
use serde::Deserialize;

use super::dto::NotificationDto;
use super::mediator::{Handler, Mediator, Reply};
use super::request::{AccessPolicy, Request, RequestContext};
use crate::errors::{DomainError, DomainResult};

/// The caller's notifications, newest first
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetNotifications {
    pub page: Option<i64>,
    pub page_size: Option<i64>,
    #[serde(default)]
    pub only_unread: bool,
}

impl Request for GetNotifications {
    type Output = PaginatedResponse<NotificationDto>;
    const NAME: &'static str = "GetNotifications";
    const POLICY: AccessPolicy = AccessPolicy::Authenticated;
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GetUnreadCount;

impl Request for GetUnreadCount {
    type Output = u64;
    const NAME: &'static str = "GetUnreadCount";
    const POLICY: AccessPolicy = AccessPolicy::Authenticated;
}

#[derive(Debug, Clone, Deserialize)]
pub struct MarkNotificationAsRead {
    pub id: String,
}

impl Request for MarkNotificationAsRead {
    type Output = bool;
    const NAME: &'static str = "MarkNotificationAsRead";
    const POLICY: AccessPolicy = AccessPolicy::Authenticated;
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MarkAllNotificationsAsRead;

impl Request for MarkAllNotificationsAsRead {
    /// Notifications that changed
    type Output = u64;
    const NAME: &'static str = "MarkAllNotificationsAsRead";
    const POLICY: AccessPolicy = AccessPolicy::Authenticated;
}

#[async_trait]
impl Handler<GetNotifications> for Mediator {
    async fn handle(
        &self,
        request: GetNotifications,
        ctx: &RequestContext,
    ) -> DomainResult<Reply<PaginatedResponse<NotificationDto>>> {
        let user = ctx.require_user()?;
        let pagination = Pagination::from_request(request.page, request.page_size, &self.pagination);

        let page = self
            .notifications
            .find_for_user(&user.id, request.only_unread, &pagination)
            .await?;
        let message = format!("{} notifications found", page.total_count);

        Ok(Reply::new(page.map(NotificationDto::from), message))
    }
}

#[async_trait]
impl Handler<GetUnreadCount> for Mediator {
    async fn handle(&self, _request: GetUnreadCount, ctx: &RequestContext) -> DomainResult<Reply<u64>> {
        let user = ctx.require_user()?;
        let count = self.notifications.unread_count(&user.id).await?;
        Ok(Reply::new(count, "Unread notifications counted"))
    }
}

#[async_trait]
impl Handler<MarkNotificationAsRead> for Mediator {
    async fn handle(&self, request: MarkNotificationAsRead, ctx: &RequestContext) -> DomainResult<Reply<bool>> {
        let user = ctx.require_user()?;
        let mut notification = self
            .notifications
            .get_active(&request.id)
            .await?
            .ok_or_else(|| DomainError::not_found("Notification"))?;

        if notification.user_id != user.id {
            return Err(DomainError::Forbidden {
                message: "You do not have permission to access this notification".to_string(),
            });
        }

        if !notification.is_read {
            notification.mark_as_read();
            self.notifications.update(notification).await?;
        }

        Ok(Reply::new(true, "Notification marked as read"))
    }
}

#[async_trait]
impl Handler<MarkAllNotificationsAsRead> for Mediator {
    async fn handle(&self, _request: MarkAllNotificationsAsRead, ctx: &RequestContext) -> DomainResult<Reply<u64>> {
        let user = ctx.require_user()?;
        let marked = self.notifications.mark_all_as_read(&user.id).await?;
        tracing::debug!(user_id = %user.id, marked, "Notifications marked as read");
        Ok(Reply::new(marked, "All notifications marked as read"))
    }
}
