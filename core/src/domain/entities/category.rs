//! Category entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::entity::{impl_entity, new_entity_id};

/// Product grouping, unique by name among active categories
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    pub is_active: bool,
}

impl_entity!(Category, "Category", name = name);

impl Category {
    /// Creates a new active category
    pub fn new(name: impl Into<String>, description: Option<String>) -> Self {
        Self {
            id: new_entity_id(),
            name: name.into(),
            description,
            created_at: Utc::now(),
            updated_at: None,
            is_active: true,
        }
    }

    /// Rename and/or redescribe the category
    pub fn update(&mut self, name: impl Into<String>, description: Option<String>) {
        self.name = name.into();
        self.description = description;
        self.updated_at = Some(Utc::now());
    }
}
