//! Unit tests for low stock fan-out

use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;
use rust_decimal::Decimal;
use tokio::sync::Mutex;

use crate::domain::entities::{
    Notification, Product, ProductDetails, User, UserRole, LOW_STOCK_NOTIFICATION_TYPE,
};
use crate::errors::{DomainError, DomainResult};
use crate::repositories::{InMemoryRepository, Repository};
use crate::services::email::EmailSender;
use crate::services::notification::NotificationService;

/// Records sent emails; fails for addresses in `failing`
#[derive(Default)]
struct RecordingEmailSender {
    sent: Mutex<Vec<(String, String)>>,
    failing: HashSet<String>,
}

#[async_trait]
impl EmailSender for RecordingEmailSender {
    async fn send(&self, to: &str, subject: &str, _html_body: &str) -> DomainResult<()> {
        if self.failing.contains(to) {
            return Err(DomainError::Internal {
                message: "relay unavailable".to_string(),
            });
        }
        self.sent.lock().await.push((to.to_string(), subject.to_string()));
        Ok(())
    }
}

fn user(email: &str, role: UserRole) -> User {
    User::new(email, "hash".to_string(), "Test".to_string(), "User".to_string(), role)
}

fn widget() -> Product {
    Product::new(
        ProductDetails {
            name: "Widget".to_string(),
            description: None,
            price: Decimal::new(1000, 2),
            category_id: None,
            sku: Some("W-1".to_string()),
            image_url: None,
        },
        3,
    )
    .unwrap()
}

#[tokio::test]
async fn test_every_administrator_is_notified() {
    let users = InMemoryRepository::with_records(vec![
        user("a1@example.com", UserRole::Administrator),
        user("a2@example.com", UserRole::Administrator),
        user("e1@example.com", UserRole::Employee),
    ]);
    let notifications = InMemoryRepository::<Notification>::new();
    let sender = Arc::new(RecordingEmailSender::default());
    let service = NotificationService::new(Arc::new(users), Arc::new(notifications.clone()), sender.clone());
    let product = widget();

    let stored = service.notify_low_stock(&product).await.unwrap();

    assert_eq!(stored, 2);
    let all = notifications.find_all().await.unwrap();
    assert_eq!(all.len(), 2);
    for n in &all {
        assert_eq!(n.title, "Low Stock Alert");
        assert_eq!(n.notification_type, LOW_STOCK_NOTIFICATION_TYPE);
        assert_eq!(n.related_entity_id.as_deref(), Some(product.id.as_str()));
        assert_eq!(n.related_entity_type.as_deref(), Some("Product"));
        assert!(!n.is_read);
    }

    let sent = sender.sent.lock().await;
    let recipients: HashSet<_> = sent.iter().map(|(to, _)| to.as_str()).collect();
    assert_eq!(recipients, HashSet::from(["a1@example.com", "a2@example.com"]));
}

#[tokio::test]
async fn test_email_failure_does_not_stop_fan_out() {
    let users = InMemoryRepository::with_records(vec![
        user("broken@example.com", UserRole::Administrator),
        user("ok@example.com", UserRole::Administrator),
    ]);
    let notifications = InMemoryRepository::<Notification>::new();
    let sender = Arc::new(RecordingEmailSender {
        failing: HashSet::from(["broken@example.com".to_string()]),
        ..Default::default()
    });
    let service = NotificationService::new(Arc::new(users), Arc::new(notifications.clone()), sender.clone());

    let stored = service.notify_low_stock(&widget()).await.unwrap();

    assert_eq!(stored, 2);
    assert_eq!(sender.sent.lock().await.len(), 1);
}

#[tokio::test]
async fn test_inactive_administrators_are_skipped() {
    let mut retired = user("retired@example.com", UserRole::Administrator);
    retired.is_active = false;
    let users = InMemoryRepository::with_records(vec![retired]);
    let notifications = InMemoryRepository::<Notification>::new();
    let service = NotificationService::new(
        Arc::new(users),
        Arc::new(notifications.clone()),
        Arc::new(RecordingEmailSender::default()),
    );

    assert_eq!(service.notify_low_stock(&widget()).await.unwrap(), 0);
    assert!(notifications.is_empty().await);
}
