//! User specifications.

use super::{fields as common, Criterion, FieldSource, FieldValue, Specification};
use crate::domain::entities::{User, UserRole};

/// User field names as stored
pub mod fields {
    pub const EMAIL: &str = "email";
    pub const ROLE: &str = "role";
}

impl FieldSource for User {
    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            common::ID => Some(FieldValue::Text(self.id.clone())),
            common::IS_ACTIVE => Some(FieldValue::Bool(self.is_active)),
            fields::EMAIL => Some(FieldValue::Text(self.email.clone())),
            fields::ROLE => Some(FieldValue::Text(self.role.to_string())),
            _ => None,
        }
    }
}

/// Email equals `email`, ignoring case and surrounding whitespace
pub fn with_email(email: &str) -> Specification<User> {
    let wanted = email.trim().to_lowercase();
    Specification::new(Criterion::eq_ignore_case(fields::EMAIL, &wanted), {
        let wanted = wanted.clone();
        move |u: &User| u.email.to_lowercase() == wanted
    })
}

/// Users holding `role`
pub fn with_role(role: UserRole) -> Specification<User> {
    Specification::new(Criterion::eq(fields::ROLE, role.to_string()), move |u: &User| u.role == role)
}

/// Active administrators
pub fn administrators() -> Specification<User> {
    Specification::active().and(&with_role(UserRole::Administrator))
}
