//! Domain layer containing business entities and the specification engine.

pub mod entities;
pub mod specification;

// Re-export commonly used domain types
pub use entities::*;
pub use specification::{Criterion, FieldSource, FieldValue, SortOrder, Specification};
