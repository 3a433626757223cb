//! Composable predicates over entities.
//!
//! A [`Specification`] carries two equivalent forms of the same predicate:
//! a closure that can be called on an entity in memory, and a declarative
//! [`Criterion`] that storage backends translate into a native filter so
//! that filtering, counting and paging happen in the database.
//!
//! Combinators never mutate their operands; they return a new specification
//! that shares the operands' closures.

mod criterion;
pub mod category;
pub mod notification;
pub mod product;
pub mod user;

#[cfg(test)]
mod tests;

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

pub use criterion::{Criterion, FieldSource, FieldValue};

use crate::domain::entities::Entity;

/// Field names shared by every entity
pub mod fields {
    pub const ID: &str = "id";
    pub const IS_ACTIVE: &str = "isActive";
    pub const CREATED_AT: &str = "createdAt";
}

type Predicate<T> = Arc<dyn Fn(&T) -> bool + Send + Sync>;

/// A named, reusable boolean predicate over `T`
pub struct Specification<T> {
    predicate: Predicate<T>,
    criterion: Criterion,
}

impl<T> Clone for Specification<T> {
    fn clone(&self) -> Self {
        Self {
            predicate: Arc::clone(&self.predicate),
            criterion: self.criterion.clone(),
        }
    }
}

impl<T> fmt::Debug for Specification<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Specification")
            .field("criterion", &self.criterion)
            .finish()
    }
}

impl<T: 'static> Specification<T> {
    /// Pair a storage criterion with the equivalent in-memory predicate
    pub fn new<F>(criterion: Criterion, predicate: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        Self {
            predicate: Arc::new(predicate),
            criterion,
        }
    }

    /// Matches everything
    pub fn all() -> Self {
        Self::new(Criterion::All, |_| true)
    }

    /// Evaluate against a single candidate
    pub fn is_satisfied_by(&self, candidate: &T) -> bool {
        (self.predicate)(candidate)
    }

    /// Declarative form for storage push-down
    pub fn criterion(&self) -> &Criterion {
        &self.criterion
    }

    /// Both must hold; `other` is only evaluated when `self` holds
    pub fn and(&self, other: &Specification<T>) -> Specification<T> {
        let (left, right) = (Arc::clone(&self.predicate), Arc::clone(&other.predicate));
        Self {
            predicate: Arc::new(move |candidate| left(candidate) && right(candidate)),
            criterion: self.criterion.clone().and(other.criterion.clone()),
        }
    }

    /// Either holds; `other` is only evaluated when `self` does not hold
    pub fn or(&self, other: &Specification<T>) -> Specification<T> {
        let (left, right) = (Arc::clone(&self.predicate), Arc::clone(&other.predicate));
        Self {
            predicate: Arc::new(move |candidate| left(candidate) || right(candidate)),
            criterion: self.criterion.clone().or(other.criterion.clone()),
        }
    }

    /// Negation
    pub fn not(&self) -> Specification<T> {
        let inner = Arc::clone(&self.predicate);
        Self {
            predicate: Arc::new(move |candidate| !inner(candidate)),
            criterion: self.criterion.clone().negate(),
        }
    }

    /// `self AND other` when `other` is present, otherwise `self`
    pub fn and_maybe(&self, other: Option<Specification<T>>) -> Specification<T> {
        match other {
            Some(other) => self.and(&other),
            None => self.clone(),
        }
    }
}

impl<T: Entity> Specification<T> {
    /// Active (not soft-deleted) records only
    pub fn active() -> Self {
        Self::new(Criterion::eq(fields::IS_ACTIVE, true), |entity: &T| entity.is_active())
    }

    /// The record with this id
    pub fn by_id(id: &str) -> Self {
        let wanted = id.to_string();
        Self::new(Criterion::eq(fields::ID, id), move |entity: &T| entity.id() == wanted)
    }
}

/// Result ordering for list queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Most recently created first
    #[default]
    NewestFirst,
    /// Alphabetical by name
    NameAscending,
}

impl SortOrder {
    /// In-memory comparison matching the storage sort; ties break on id
    pub fn compare<T: Entity>(&self, a: &T, b: &T) -> Ordering {
        let primary = match self {
            SortOrder::NewestFirst => b.created_at().cmp(&a.created_at()),
            SortOrder::NameAscending => a.name_key().cmp(&b.name_key()),
        };
        primary.then_with(|| a.id().cmp(b.id()))
    }
}
