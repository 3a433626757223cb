//! Declarative filter tree consumed by storage backends.

use std::cmp::Ordering;

/// Scalar value a criterion compares against
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Bool(bool),
    Int(i64),
    Text(String),
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Bool(value)
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        FieldValue::Int(i64::from(value))
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Int(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl FieldValue {
    fn partial_cmp_same_kind(&self, other: &FieldValue) -> Option<Ordering> {
        match (self, other) {
            (FieldValue::Int(a), FieldValue::Int(b)) => Some(a.cmp(b)),
            (FieldValue::Text(a), FieldValue::Text(b)) => Some(a.cmp(b)),
            (FieldValue::Bool(a), FieldValue::Bool(b)) => Some(a.cmp(b)),
            _ => None,
        }
    }
}

/// Field lookup by storage name, used to evaluate a [`Criterion`] in memory
///
/// Returns `None` for unknown fields and for optional fields that are unset.
pub trait FieldSource {
    fn field(&self, name: &str) -> Option<FieldValue>;
}

/// Storage-neutral filter tree
///
/// A missing or unset field never satisfies a comparison or substring leaf.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Criterion {
    /// Matches everything
    All,
    /// Field equals value
    Eq { field: &'static str, value: FieldValue },
    /// Field strictly less than value
    Lt { field: &'static str, value: FieldValue },
    /// Text field equals value, ignoring case
    EqIgnoreCase { field: &'static str, value: String },
    /// Text field contains value, ignoring case
    ContainsIgnoreCase { field: &'static str, value: String },
    And(Box<Criterion>, Box<Criterion>),
    Or(Box<Criterion>, Box<Criterion>),
    Not(Box<Criterion>),
}

impl Criterion {
    pub fn eq(field: &'static str, value: impl Into<FieldValue>) -> Self {
        Criterion::Eq {
            field,
            value: value.into(),
        }
    }

    pub fn lt(field: &'static str, value: impl Into<FieldValue>) -> Self {
        Criterion::Lt {
            field,
            value: value.into(),
        }
    }

    pub fn eq_ignore_case(field: &'static str, value: &str) -> Self {
        Criterion::EqIgnoreCase {
            field,
            value: value.to_string(),
        }
    }

    pub fn contains_ignore_case(field: &'static str, value: &str) -> Self {
        Criterion::ContainsIgnoreCase {
            field,
            value: value.to_string(),
        }
    }

    /// Conjunction; `All` is the identity
    pub fn and(self, other: Criterion) -> Self {
        match (self, other) {
            (Criterion::All, other) => other,
            (this, Criterion::All) => this,
            (this, other) => Criterion::And(Box::new(this), Box::new(other)),
        }
    }

    /// Disjunction; `All` absorbs
    pub fn or(self, other: Criterion) -> Self {
        match (self, other) {
            (Criterion::All, _) | (_, Criterion::All) => Criterion::All,
            (this, other) => Criterion::Or(Box::new(this), Box::new(other)),
        }
    }

    /// Negation; double negation collapses
    pub fn negate(self) -> Self {
        match self {
            Criterion::Not(inner) => *inner,
            other => Criterion::Not(Box::new(other)),
        }
    }

    /// Reference evaluation of the tree against a field source
    pub fn matches<S: FieldSource + ?Sized>(&self, source: &S) -> bool {
        match self {
            Criterion::All => true,
            Criterion::Eq { field, value } => source.field(field).as_ref() == Some(value),
            Criterion::Lt { field, value } => source
                .field(field)
                .and_then(|actual| actual.partial_cmp_same_kind(value))
                .map_or(false, |ordering| ordering == Ordering::Less),
            Criterion::EqIgnoreCase { field, value } => match source.field(field) {
                Some(FieldValue::Text(actual)) => actual.to_lowercase() == value.to_lowercase(),
                _ => false,
            },
            Criterion::ContainsIgnoreCase { field, value } => match source.field(field) {
                Some(FieldValue::Text(actual)) => {
                    actual.to_lowercase().contains(&value.to_lowercase())
                }
                _ => false,
            },
            Criterion::And(left, right) => left.matches(source) && right.matches(source),
            Criterion::Or(left, right) => left.matches(source) || right.matches(source),
            Criterion::Not(inner) => !inner.matches(source),
        }
    }
}
