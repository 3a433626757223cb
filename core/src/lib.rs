//! # Inventory Core
//!
//! Core business logic and domain layer for the inventory backend.
//! This crate contains domain entities, the specification engine, repository
//! interfaces with an in-memory implementation, business services, the
//! request/handler dispatch layer, and error types.

pub mod application;
pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use application::{Mediator, RequestContext};
pub use domain::entities::{
    Category, Claims, Entity, IssuedSession, Notification, Product, ProductDetails, User, UserRole,
    LOW_STOCK_THRESHOLD,
};
pub use domain::specification::{Criterion, SortOrder, Specification};
pub use errors::{AuthError, DomainError, DomainResult, TokenError};
pub use repositories::{
    CategoryRepository, InMemoryRepository, NotificationRepository, ProductRepository, Repository,
    UserRepository,
};
pub use services::{EmailSender, ReportGenerator, ReportKind, TokenService};
