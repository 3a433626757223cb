//! Report rendering port.

use crate::domain::entities::Product;
use crate::errors::DomainResult;

/// Which product report is being rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    /// Products below a stock threshold
    LowStock { threshold: i32 },
    /// Every active product
    Inventory,
}

impl ReportKind {
    /// Report title
    pub fn title(&self) -> String {
        match self {
            ReportKind::LowStock { threshold } => format!("Low Stock Report (below {} units)", threshold),
            ReportKind::Inventory => "Inventory Report".to_string(),
        }
    }

    /// Download file name prefix
    pub fn file_stem(&self) -> &'static str {
        match self {
            ReportKind::LowStock { .. } => "low-stock-report",
            ReportKind::Inventory => "inventory-report",
        }
    }
}

/// Renders a product listing to a document
pub trait ReportGenerator: Send + Sync {
    /// Render `products` and return the document bytes
    ///
    /// # Arguments
    /// * `kind` - Report type, drives the title
    /// * `products` - Rows, already filtered and ordered
    /// * `generated_by` - Requesting user's email, or "System"
    fn render(&self, kind: ReportKind, products: &[Product], generated_by: &str) -> DomainResult<Vec<u8>>;
}
