//! Notification route handlers; callers only ever see their own notifications

use actix_web::{web, HttpResponse};

use inv_core::application::notifications::{
    GetNotifications, GetUnreadCount, MarkAllNotificationsAsRead, MarkNotificationAsRead,
};

use crate::middleware::AuthContext;
use crate::response::{dispatch, ok};
use crate::state::AppState;

/// Handler for GET /api/notifications?page=&pageSize=&onlyUnread=
pub async fn list_notifications(
    state: web::Data<AppState>,
    auth: AuthContext,
    query: web::Query<GetNotifications>,
) -> HttpResponse {
    ok(dispatch(&state.mediator, query.into_inner(), auth.context()).await)
}

/// Handler for GET /api/notifications/unread-count
pub async fn unread_count(state: web::Data<AppState>, auth: AuthContext) -> HttpResponse {
    ok(dispatch(&state.mediator, GetUnreadCount, auth.context()).await)
}

/// Handler for PUT /api/notifications/{id}/read
pub async fn mark_as_read(state: web::Data<AppState>, auth: AuthContext, path: web::Path<String>) -> HttpResponse {
    let request = MarkNotificationAsRead { id: path.into_inner() };
    ok(dispatch(&state.mediator, request, auth.context()).await)
}

/// Handler for PUT /api/notifications/read-all
pub async fn mark_all_as_read(state: web::Data<AppState>, auth: AuthContext) -> HttpResponse {
    ok(dispatch(&state.mediator, MarkAllNotificationsAsRead, auth.context()).await)
}
