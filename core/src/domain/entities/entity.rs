//! Behaviour shared by every persisted entity.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A persisted record with an opaque id, audit timestamps and a soft-delete flag
///
/// Entities are created active with a server-assigned creation timestamp.
/// Once deactivated they are never reactivated by this crate.
pub trait Entity: Clone + Send + Sync + 'static {
    /// Human readable resource name used in not-found messages
    const RESOURCE: &'static str;

    /// Opaque identifier
    fn id(&self) -> &str;

    /// Creation timestamp
    fn created_at(&self) -> DateTime<Utc>;

    /// Last update timestamp, if the record was ever modified
    fn updated_at(&self) -> Option<DateTime<Utc>>;

    /// Soft-delete flag
    fn is_active(&self) -> bool;

    /// Soft delete: clear the active flag and stamp the update time
    fn deactivate(&mut self);

    /// Key used when the entity is listed alphabetically
    fn name_key(&self) -> Option<&str> {
        None
    }
}

/// Generate a new opaque entity id
pub fn new_entity_id() -> String {
    Uuid::new_v4().to_string()
}

/// Implements [`Entity`] for structs carrying the standard audit fields
macro_rules! impl_entity {
    (@base $ty:ty, $resource:literal, { $($extra:tt)* }) => {
        impl $crate::domain::entities::Entity for $ty {
            const RESOURCE: &'static str = $resource;

            fn id(&self) -> &str {
                &self.id
            }

            fn created_at(&self) -> chrono::DateTime<chrono::Utc> {
                self.created_at
            }

            fn updated_at(&self) -> Option<chrono::DateTime<chrono::Utc>> {
                self.updated_at
            }

            fn is_active(&self) -> bool {
                self.is_active
            }

            fn deactivate(&mut self) {
                self.is_active = false;
                self.updated_at = Some(chrono::Utc::now());
            }

            $($extra)*
        }
    };
    ($ty:ty, $resource:literal, name = $field:ident) => {
        impl_entity!(@base $ty, $resource, {
            fn name_key(&self) -> Option<&str> {
                Some(self.$field.as_str())
            }
        });
    };
    ($ty:ty, $resource:literal) => {
        impl_entity!(@base $ty, $resource, {});
    };
}

pub(crate) use impl_entity;
