//! Category specifications.

use super::{fields as common, Criterion, FieldSource, FieldValue, Specification};
use crate::domain::entities::Category;

/// Category field names as stored
pub mod fields {
    pub const NAME: &str = "name";
}

impl FieldSource for Category {
    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            common::ID => Some(FieldValue::Text(self.id.clone())),
            common::IS_ACTIVE => Some(FieldValue::Bool(self.is_active)),
            fields::NAME => Some(FieldValue::Text(self.name.clone())),
            _ => None,
        }
    }
}

/// Name equals `name`, ignoring case
pub fn named(name: &str) -> Specification<Category> {
    let wanted = name.to_lowercase();
    Specification::new(Criterion::eq_ignore_case(fields::NAME, name), move |c: &Category| {
        c.name.to_lowercase() == wanted
    })
}

/// Active categories sharing `name` (case-insensitive), optionally ignoring one record
pub fn name_taken(name: &str, exclude_id: Option<&str>) -> Specification<Category> {
    let spec = Specification::active().and(&named(name));
    match exclude_id {
        Some(id) => spec.and(&Specification::by_id(id).not()),
        None => spec,
    }
}
