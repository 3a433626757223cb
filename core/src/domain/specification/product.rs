//! Product specifications.

use super::{fields as common, Criterion, FieldSource, FieldValue, Specification};
use crate::domain::entities::{Product, LOW_STOCK_THRESHOLD};

/// Product field names as stored
pub mod fields {
    pub const NAME: &str = "name";
    pub const DESCRIPTION: &str = "description";
    pub const CATEGORY_ID: &str = "categoryId";
    pub const STOCK_QUANTITY: &str = "stockQuantity";
    pub const SKU: &str = "sku";
}

impl FieldSource for Product {
    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            common::ID => Some(FieldValue::Text(self.id.clone())),
            common::IS_ACTIVE => Some(FieldValue::Bool(self.is_active)),
            fields::NAME => Some(FieldValue::Text(self.name.clone())),
            fields::DESCRIPTION => self.description.clone().map(FieldValue::Text),
            fields::CATEGORY_ID => self.category_id.clone().map(FieldValue::Text),
            fields::STOCK_QUANTITY => Some(FieldValue::from(self.stock_quantity)),
            fields::SKU => self.sku.clone().map(FieldValue::Text),
            _ => None,
        }
    }
}

/// Products belonging to a category
pub fn by_category(category_id: &str) -> Specification<Product> {
    let wanted = category_id.to_string();
    Specification::new(Criterion::eq(fields::CATEGORY_ID, category_id), move |p: &Product| {
        p.category_id.as_deref() == Some(wanted.as_str())
    })
}

/// Name contains `term`, ignoring case
pub fn name_contains(term: &str) -> Specification<Product> {
    let needle = term.to_lowercase();
    Specification::new(Criterion::contains_ignore_case(fields::NAME, term), move |p: &Product| {
        p.name.to_lowercase().contains(&needle)
    })
}

/// Description contains `term`, ignoring case; products without a description never match
pub fn description_contains(term: &str) -> Specification<Product> {
    let needle = term.to_lowercase();
    Specification::new(
        Criterion::contains_ignore_case(fields::DESCRIPTION, term),
        move |p: &Product| {
            p.description
                .as_ref()
                .map_or(false, |description| description.to_lowercase().contains(&needle))
        },
    )
}

/// Free-text search over name OR description
pub fn search(term: &str) -> Specification<Product> {
    name_contains(term).or(&description_contains(term))
}

/// Name equals `name`, ignoring case
pub fn named(name: &str) -> Specification<Product> {
    let wanted = name.to_lowercase();
    Specification::new(Criterion::eq_ignore_case(fields::NAME, name), move |p: &Product| {
        p.name.to_lowercase() == wanted
    })
}

/// Stock strictly below `threshold`
pub fn stock_below(threshold: i32) -> Specification<Product> {
    Specification::new(Criterion::lt(fields::STOCK_QUANTITY, threshold), move |p: &Product| {
        p.stock_quantity < threshold
    })
}

/// Active products below the fixed low-stock threshold
pub fn low_stock() -> Specification<Product> {
    stock_below(LOW_STOCK_THRESHOLD).and(&Specification::active())
}

/// Active products sharing `name` (case-insensitive), optionally ignoring one record
pub fn name_taken(name: &str, exclude_id: Option<&str>) -> Specification<Product> {
    let spec = Specification::active().and(&named(name));
    match exclude_id {
        Some(id) => spec.and(&Specification::by_id(id).not()),
        None => spec,
    }
}

