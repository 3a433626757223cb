//! In-app notification addressed to a single user.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::entity::{impl_entity, new_entity_id};

/// Type tag of stock alerts
pub const LOW_STOCK_NOTIFICATION_TYPE: &str = "LowStock";

/// Notification entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: String,

    /// Owning user
    pub user_id: String,

    pub title: String,

    pub message: String,

    /// Free-form type tag, e.g. "LowStock"
    pub notification_type: String,

    pub is_read: bool,

    pub read_at: Option<DateTime<Utc>>,

    /// Id of the entity the notification is about
    pub related_entity_id: Option<String>,

    /// Kind of the related entity, e.g. "Product"
    pub related_entity_type: Option<String>,

    pub created_at: DateTime<Utc>,

    pub updated_at: Option<DateTime<Utc>>,

    pub is_active: bool,
}

impl_entity!(Notification, "Notification");

impl Notification {
    /// Creates an unread notification
    pub fn new(
        user_id: impl Into<String>,
        title: impl Into<String>,
        message: impl Into<String>,
        notification_type: impl Into<String>,
    ) -> Self {
        Self {
            id: new_entity_id(),
            user_id: user_id.into(),
            title: title.into(),
            message: message.into(),
            notification_type: notification_type.into(),
            is_read: false,
            read_at: None,
            related_entity_id: None,
            related_entity_type: None,
            created_at: Utc::now(),
            updated_at: None,
            is_active: true,
        }
    }

    /// Attach the entity this notification refers to
    pub fn with_related_entity(mut self, entity_type: impl Into<String>, entity_id: impl Into<String>) -> Self {
        self.related_entity_type = Some(entity_type.into());
        self.related_entity_id = Some(entity_id.into());
        self
    }

    /// Mark as read; reading twice keeps the first read timestamp
    pub fn mark_as_read(&mut self) {
        if self.is_read {
            return;
        }
        let now = Utc::now();
        self.is_read = true;
        self.read_at = Some(now);
        self.updated_at = Some(now);
    }
}
