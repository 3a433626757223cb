//! Translation of storage-neutral criteria into MongoDB filters

use bson::{doc, Bson, Document, Regex};

use inv_core::domain::specification::{fields, Criterion, FieldValue, SortOrder};

/// Build the BSON filter equivalent to `criterion`
///
/// Missing or null fields never satisfy a comparison or regex leaf, which
/// matches the in-memory evaluation.
pub fn criterion_to_filter(criterion: &Criterion) -> Document {
    match criterion {
        Criterion::All => Document::new(),
        Criterion::Eq { field, value } => doc! { field_name(field): to_bson(value) },
        Criterion::Lt { field, value } => doc! { field_name(field): { "$lt": to_bson(value) } },
        Criterion::EqIgnoreCase { field, value } => doc! {
            field_name(field): case_insensitive(format!("^{}$", regex::escape(value))),
        },
        Criterion::ContainsIgnoreCase { field, value } => doc! {
            field_name(field): case_insensitive(regex::escape(value)),
        },
        Criterion::And(left, right) => doc! {
            "$and": [criterion_to_filter(left), criterion_to_filter(right)],
        },
        Criterion::Or(left, right) => doc! {
            "$or": [criterion_to_filter(left), criterion_to_filter(right)],
        },
        Criterion::Not(inner) => doc! { "$nor": [criterion_to_filter(inner)] },
    }
}

/// Sort specification for `order`; ties break on `_id`
pub fn sort_document(order: SortOrder) -> Document {
    match order {
        SortOrder::NewestFirst => doc! { "createdAt": -1, "_id": 1 },
        SortOrder::NameAscending => doc! { "name": 1, "_id": 1 },
    }
}

fn field_name(field: &str) -> &str {
    if field == fields::ID {
        "_id"
    } else {
        field
    }
}

fn to_bson(value: &FieldValue) -> Bson {
    match value {
        FieldValue::Bool(b) => Bson::Boolean(*b),
        FieldValue::Int(i) => Bson::Int64(*i),
        FieldValue::Text(s) => Bson::String(s.clone()),
    }
}

fn case_insensitive(pattern: String) -> Bson {
    Bson::RegularExpression(Regex {
        pattern,
        options: "i".to_string(),
    })
}
