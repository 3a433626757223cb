//! Request dispatch layer.
//!
//! Every use case is a request type implementing [`Request`]. The
//! [`Mediator`] implements [`Handler`] once per request type, so routing a
//! request to its handler is resolved at compile time. [`Mediator::send`]
//! wraps each handler with the access policy check, input validation,
//! cancellation and result shaping.

mod mediator;
mod request;
mod validation;

pub mod auth;
pub mod categories;
pub mod dto;
pub mod notifications;
pub mod products;
pub mod reports;

#[cfg(test)]
mod tests;

pub use dto::{AuthResponse, CategoryDto, NotificationDto, ProductDto, UserDto};
pub use mediator::{Handler, Mediator, MediatorDependencies, Reply};
pub use request::{AccessPolicy, CurrentUser, Request, RequestContext};
