//! Notification specifications.

use super::{fields as common, Criterion, FieldSource, FieldValue, Specification};
use crate::domain::entities::Notification;

/// Notification field names as stored
pub mod fields {
    pub const USER_ID: &str = "userId";
    pub const IS_READ: &str = "isRead";
}

impl FieldSource for Notification {
    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            common::ID => Some(FieldValue::Text(self.id.clone())),
            common::IS_ACTIVE => Some(FieldValue::Bool(self.is_active)),
            fields::USER_ID => Some(FieldValue::Text(self.user_id.clone())),
            fields::IS_READ => Some(FieldValue::Bool(self.is_read)),
            _ => None,
        }
    }
}

/// Notifications addressed to `user_id`
pub fn for_user(user_id: &str) -> Specification<Notification> {
    let wanted = user_id.to_string();
    Specification::new(Criterion::eq(fields::USER_ID, user_id), move |n: &Notification| {
        n.user_id == wanted
    })
}

/// Not yet read
pub fn unread() -> Specification<Notification> {
    Specification::new(Criterion::eq(fields::IS_READ, false), |n: &Notification| !n.is_read)
}

/// Unread notifications of one user
pub fn unread_for_user(user_id: &str) -> Specification<Notification> {
    for_user(user_id).and(&unread())
}
