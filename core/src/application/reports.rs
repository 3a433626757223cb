//! PDF report queries

use async_trait::async_trait;
use inv_shared::FieldErrors;
use serde::Deserialize;
use validator::Validate;

use super::mediator::{Handler, Mediator, Reply};
use super::request::{AccessPolicy, Request, RequestContext};
use super::validation::check;
use crate::domain::entities::LOW_STOCK_THRESHOLD;
use crate::errors::DomainResult;
use crate::services::ReportKind;

/// Name recorded on reports requested without a caller
const SYSTEM_AUTHOR: &str = "System";

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct GenerateLowStockReport {
    #[validate(range(min = 0, message = "Threshold cannot be negative"))]
    pub threshold: Option<i32>,
}

impl GenerateLowStockReport {
    pub fn kind(&self) -> ReportKind {
        ReportKind::LowStock {
            threshold: self.threshold.unwrap_or(LOW_STOCK_THRESHOLD),
        }
    }
}

impl Request for GenerateLowStockReport {
    /// PDF bytes
    type Output = Vec<u8>;
    const NAME: &'static str = "GenerateLowStockReport";
    const POLICY: AccessPolicy = AccessPolicy::AdminOnly;

    fn validate_request(&self) -> Result<(), FieldErrors> {
        check(self)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenerateInventoryReport;

impl GenerateInventoryReport {
    pub fn kind(&self) -> ReportKind {
        ReportKind::Inventory
    }
}

impl Request for GenerateInventoryReport {
    /// PDF bytes
    type Output = Vec<u8>;
    const NAME: &'static str = "GenerateInventoryReport";
    const POLICY: AccessPolicy = AccessPolicy::AdminOnly;
}

fn generated_by(ctx: &RequestContext) -> &str {
    ctx.user().map(|u| u.email.as_str()).unwrap_or(SYSTEM_AUTHOR)
}

#[async_trait]
impl Handler<GenerateLowStockReport> for Mediator {
    async fn handle(&self, request: GenerateLowStockReport, ctx: &RequestContext) -> DomainResult<Reply<Vec<u8>>> {
        let kind = request.kind();
        let threshold = request.threshold.unwrap_or(LOW_STOCK_THRESHOLD);
        let products = self.products.find_low_stock(threshold).await?;

        let document = self.reports.render(kind, &products, generated_by(ctx))?;
        tracing::info!(rows = products.len(), bytes = document.len(), "Low stock report generated");

        Ok(Reply::new(document, "Report generated successfully"))
    }
}

#[async_trait]
impl Handler<GenerateInventoryReport> for Mediator {
    async fn handle(&self, request: GenerateInventoryReport, ctx: &RequestContext) -> DomainResult<Reply<Vec<u8>>> {
        let products = self.products.find_active().await?;

        let document = self.reports.render(request.kind(), &products, generated_by(ctx))?;
        tracing::info!(rows = products.len(), bytes = document.len(), "Inventory report generated");

        Ok(Reply::new(document, "Report generated successfully"))
    }
}
