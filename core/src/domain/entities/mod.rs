//! Domain entities representing core business objects.

pub mod category;
pub mod entity;
pub mod notification;
pub mod product;
pub mod token;
pub mod user;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use category::Category;
pub use entity::{new_entity_id, Entity};
pub use notification::{Notification, LOW_STOCK_NOTIFICATION_TYPE};
pub use product::{is_low_stock, Product, ProductDetails, LOW_STOCK_THRESHOLD};
pub use token::{Claims, IssuedSession};
pub use user::{User, UserRole};
