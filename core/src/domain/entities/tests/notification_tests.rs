//! Unit tests for the notification entity

use crate::domain::entities::{Notification, LOW_STOCK_NOTIFICATION_TYPE};

#[test]
fn test_new_notification_is_unread() {
    let notification = Notification::new("user-1", "Low Stock Alert", "Widget is low", LOW_STOCK_NOTIFICATION_TYPE)
        .with_related_entity("Product", "product-1");

    assert!(!notification.is_read);
    assert!(notification.read_at.is_none());
    assert_eq!(notification.related_entity_type.as_deref(), Some("Product"));
    assert_eq!(notification.related_entity_id.as_deref(), Some("product-1"));
}

#[test]
fn test_mark_as_read_is_idempotent() {
    let mut notification = Notification::new("user-1", "t", "m", "Info");
    notification.mark_as_read();
    let first_read = notification.read_at;
    assert!(notification.is_read);

    notification.mark_as_read();
    assert_eq!(notification.read_at, first_read);
}
