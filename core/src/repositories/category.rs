//! Category repository trait.

use async_trait::async_trait;

use super::base::Repository;
use crate::domain::entities::Category;
use crate::domain::specification::{category, SortOrder, Specification};
use crate::errors::DomainResult;
use crate::services::query;

/// Category persistence
#[async_trait]
pub trait CategoryRepository: Repository<Category> {
    /// Whether another active category already uses `name` (case-insensitive)
    async fn name_exists(&self, name: &str, exclude_id: Option<&str>) -> DomainResult<bool> {
        query::exists(self, &category::name_taken(name, exclude_id)).await
    }

    /// Every active category sorted by name
    async fn find_active_sorted(&self) -> DomainResult<Vec<Category>> {
        query::fetch_all(self, &Specification::all(), SortOrder::NameAscending).await
    }
}

impl CategoryRepository for super::InMemoryRepository<Category> {}
