//! Product repository trait.

use async_trait::async_trait;
use inv_shared::{PaginatedResponse, Pagination};

use super::base::Repository;
use crate::domain::entities::Product;
use crate::domain::specification::{product, SortOrder, Specification};
use crate::errors::DomainResult;
use crate::services::query;

/// Raw list filters accepted by the product listing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductFilter {
    /// Case-insensitive substring over name or description
    pub search_term: Option<String>,
    /// Exact category id
    pub category_id: Option<String>,
}

impl ProductFilter {
    /// Combine the present filters with AND; blank values are ignored
    pub fn to_specification(&self) -> Specification<Product> {
        let search = non_blank(&self.search_term).map(product::search);
        let category = non_blank(&self.category_id).map(product::by_category);
        Specification::all().and_maybe(search).and_maybe(category)
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

/// Product persistence with catalog-specific queries
#[async_trait]
pub trait ProductRepository: Repository<Product> {
    /// Active products matching `filter`, newest first, one page at a time
    async fn find_filtered(
        &self,
        filter: &ProductFilter,
        pagination: &Pagination,
    ) -> DomainResult<PaginatedResponse<Product>> {
        query::fetch_page(self, &filter.to_specification(), SortOrder::NewestFirst, pagination).await
    }

    /// Whether another active product already uses `name` (case-insensitive)
    ///
    /// # Arguments
    /// * `name` - Candidate name
    /// * `exclude_id` - Product being renamed, ignored by the check
    async fn name_exists(&self, name: &str, exclude_id: Option<&str>) -> DomainResult<bool> {
        query::exists(self, &product::name_taken(name, exclude_id)).await
    }

    /// Active products with stock below `threshold`, alphabetical
    async fn find_low_stock(&self, threshold: i32) -> DomainResult<Vec<Product>> {
        query::fetch_all(self, &product::stock_below(threshold), SortOrder::NameAscending).await
    }

    /// Every active product, alphabetical
    async fn find_active(&self) -> DomainResult<Vec<Product>> {
        query::fetch_all(self, &Specification::all(), SortOrder::NameAscending).await
    }

    /// Whether any active product references the category
    async fn any_in_category(&self, category_id: &str) -> DomainResult<bool> {
        query::exists(self, &product::by_category(category_id)).await
    }
}

impl ProductRepository for super::InMemoryRepository<Product> {}
