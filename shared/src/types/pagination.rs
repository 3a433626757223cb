//! Pagination related types for list endpoints

use serde::{Deserialize, Serialize};

use crate::config::PaginationConfig;

/// Normalized page window for list endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    /// Current page number (1-indexed)
    pub page: u32,

    /// Number of items per page
    pub page_size: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        let limits = PaginationConfig::default();
        Self {
            page: 1,
            page_size: limits.default_page_size,
        }
    }
}

impl Pagination {
    /// Create a new pagination, clamping page to at least 1 and page size to at least 1
    pub fn new(page: u32, page_size: u32) -> Self {
        Self {
            page: page.max(1),
            page_size: page_size.max(1),
        }
    }

    /// Normalize raw query parameters against the configured limits
    ///
    /// Pages below 1 become 1, a missing or non-positive page size falls back
    /// to the default, and oversized requests are capped at the maximum.
    pub fn from_request(page: Option<i64>, page_size: Option<i64>, limits: &PaginationConfig) -> Self {
        let page = page.unwrap_or(1).clamp(1, u32::MAX as i64) as u32;
        let max = limits.max_page_size.max(1);
        let page_size = match page_size {
            Some(size) if size > 0 => size.min(max as i64) as u32,
            _ => limits.default_page_size.clamp(1, max),
        };
        Self { page, page_size }
    }

    /// Number of records to skip
    pub fn offset(&self) -> u64 {
        u64::from(self.page.saturating_sub(1)) * u64::from(self.page_size)
    }

    /// Maximum number of records in the page
    pub fn limit(&self) -> u64 {
        u64::from(self.page_size)
    }
}

/// Paginated response wrapper with metadata
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedResponse<T> {
    /// The page of items
    pub items: Vec<T>,

    /// Current page number
    pub page_number: u32,

    /// Items per page
    pub page_size: u32,

    /// Number of items matching the query across all pages
    pub total_count: u64,

    /// Total number of pages
    pub total_pages: u64,

    /// Whether there's a previous page
    pub has_previous_page: bool,

    /// Whether there's a next page
    pub has_next_page: bool,
}

impl<T> PaginatedResponse<T> {
    /// Create a new paginated response
    pub fn new(items: Vec<T>, pagination: &Pagination, total_count: u64) -> Self {
        let total_pages = Self::calculate_total_pages(total_count, pagination.page_size);
        Self {
            items,
            page_number: pagination.page,
            page_size: pagination.page_size,
            total_count,
            total_pages,
            has_previous_page: pagination.page > 1,
            has_next_page: u64::from(pagination.page) < total_pages,
        }
    }

    /// Create an empty paginated response
    pub fn empty(pagination: &Pagination) -> Self {
        Self::new(Vec::new(), pagination, 0)
    }

    /// `ceil(total / page_size)` in integer arithmetic
    fn calculate_total_pages(total: u64, page_size: u32) -> u64 {
        let size = u64::from(page_size.max(1));
        (total + size - 1) / size
    }

    /// Transform the items using a function, keeping the metadata
    pub fn map<U, F>(self, f: F) -> PaginatedResponse<U>
    where
        F: FnMut(T) -> U,
    {
        PaginatedResponse {
            items: self.items.into_iter().map(f).collect(),
            page_number: self.page_number,
            page_size: self.page_size,
            total_count: self.total_count,
            total_pages: self.total_pages,
            has_previous_page: self.has_previous_page,
            has_next_page: self.has_next_page,
        }
    }

    /// Check if the page is empty
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
