//! Common type definitions used across the application

pub mod pagination;
pub mod response;

pub use pagination::{PaginatedResponse, Pagination};
pub use response::{ApiResponse, FailureKind};
