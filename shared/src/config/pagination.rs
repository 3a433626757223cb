//! Page size limits

use serde::{Deserialize, Serialize};

use super::env_or;

/// Page size limits applied to every list endpoint
#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
pub struct PaginationConfig {
    /// Page size used when the caller omits one (or sends a non-positive value)
    pub default_page_size: u32,

    /// Oversized requests are capped to this value
    pub max_page_size: u32,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            default_page_size: 10,
            max_page_size: 100,
        }
    }
}

impl PaginationConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            default_page_size: env_or("PAGINATION_DEFAULT_PAGE_SIZE", defaults.default_page_size),
            max_page_size: env_or("PAGINATION_MAX_PAGE_SIZE", defaults.max_page_size),
        }
    }
}
