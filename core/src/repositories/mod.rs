//! Repository interfaces and the in-memory implementation.
//!
//! [`Repository`] is the raw storage contract shared by every entity. The
//! entity traits add queries expressed as specifications in provided
//! methods, so any backend that implements [`Repository`] gets them for free
//! and can override the ones it can push down more efficiently.

mod base;
mod category;
mod memory;
mod notification;
mod product;
mod user;

#[cfg(test)]
mod tests;

pub use base::{EntityPredicate, Repository};
pub use category::CategoryRepository;
pub use memory::InMemoryRepository;
pub use notification::NotificationRepository;
pub use product::{ProductFilter, ProductRepository};
pub use user::UserRepository;
