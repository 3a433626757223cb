//! Database module - MongoDB implementations
//!
//! This module provides the document store access layer:
//! - Client connection and index management
//! - Document types mirroring the domain entities
//! - Translation of specification criteria into BSON filters
//! - A generic repository implementing the core storage contract

mod connection;
mod documents;
mod filter;
mod repository;

#[cfg(test)]
mod tests;

pub use connection::MongoContext;
pub use documents::{CategoryDocument, EntityDocument, NotificationDocument, ProductDocument, UserDocument};
pub use filter::{criterion_to_filter, sort_document};
pub use repository::MongoRepository;
