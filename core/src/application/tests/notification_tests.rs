//! Notification handler tests

use inv_shared::FailureKind;

use super::TestApp;
use crate::application::notifications::{
    GetNotifications, GetUnreadCount, MarkAllNotificationsAsRead, MarkNotificationAsRead,
};
use crate::domain::entities::Notification;
use crate::repositories::Repository;

async fn seed(app: &TestApp, user_id: &str, count: usize) -> Vec<Notification> {
    let mut created = Vec::new();
    for i in 0..count {
        let n = Notification::new(user_id, format!("Title {}", i), "Body", "LowStock");
        created.push(app.notifications.add(n).await.unwrap());
    }
    created
}

fn user_id(app: &TestApp, admin: bool) -> String {
    let ctx = if admin { &app.admin } else { &app.employee };
    ctx.user().unwrap().id.clone()
}

#[tokio::test]
async fn test_only_own_notifications_are_listed() {
    let app = TestApp::new().await;
    seed(&app, &user_id(&app, true), 3).await;
    seed(&app, &user_id(&app, false), 1).await;

    let page = app
        .send(GetNotifications::default(), &app.admin)
        .await
        .data
        .unwrap();

    assert_eq!(page.total_count, 3);
    assert!(page.items.iter().all(|n| !n.is_read));
}

#[tokio::test]
async fn test_mark_as_read_updates_unread_count() {
    let app = TestApp::new().await;
    let seeded = seed(&app, &user_id(&app, true), 2).await;

    let response = app
        .send(MarkNotificationAsRead { id: seeded[0].id.clone() }, &app.admin)
        .await;
    assert_eq!(response.data, Some(true));

    assert_eq!(app.send(GetUnreadCount, &app.admin).await.data, Some(1));

    let unread = app
        .send(
            GetNotifications {
                only_unread: true,
                ..Default::default()
            },
            &app.admin,
        )
        .await
        .data
        .unwrap();
    assert_eq!(unread.items.len(), 1);
    assert_eq!(unread.items[0].id, seeded[1].id);
}

#[tokio::test]
async fn test_cannot_mark_someone_elses_notification() {
    let app = TestApp::new().await;
    let seeded = seed(&app, &user_id(&app, true), 1).await;

    let response = app
        .send(MarkNotificationAsRead { id: seeded[0].id.clone() }, &app.employee)
        .await;

    assert_eq!(response.failure, Some(FailureKind::Forbidden));
    let stored = app.notifications.find_by_id(&seeded[0].id).await.unwrap().unwrap();
    assert!(!stored.is_read);
}

#[tokio::test]
async fn test_mark_unknown_notification_is_not_found() {
    let app = TestApp::new().await;

    let response = app
        .send(MarkNotificationAsRead { id: "missing".to_string() }, &app.admin)
        .await;
    assert_eq!(response.failure, Some(FailureKind::NotFound));
}

#[tokio::test]
async fn test_mark_all_returns_changed_count() {
    let app = TestApp::new().await;
    seed(&app, &user_id(&app, true), 4).await;

    assert_eq!(app.send(MarkAllNotificationsAsRead, &app.admin).await.data, Some(4));
    assert_eq!(app.send(MarkAllNotificationsAsRead, &app.admin).await.data, Some(0));
    assert_eq!(app.send(GetUnreadCount, &app.admin).await.data, Some(0));
}
