//! Report download handlers

use actix_web::{web, HttpResponse};

use inv_core::application::reports::{GenerateInventoryReport, GenerateLowStockReport};

use crate::middleware::AuthContext;
use crate::response::{dispatch, pdf_attachment};
use crate::state::AppState;

/// Handler for GET /api/reports/low-stock/pdf?threshold=
pub async fn low_stock_report(
    state: web::Data<AppState>,
    auth: AuthContext,
    query: web::Query<GenerateLowStockReport>,
) -> HttpResponse {
    let request = query.into_inner();
    let file_stem = request.kind().file_stem();
    pdf_attachment(dispatch(&state.mediator, request, auth.context()).await, file_stem)
}

/// Handler for GET /api/reports/inventory/pdf
pub async fn inventory_report(state: web::Data<AppState>, auth: AuthContext) -> HttpResponse {
    let file_stem = GenerateInventoryReport.kind().file_stem();
    pdf_attachment(dispatch(&state.mediator, GenerateInventoryReport, auth.context()).await, file_stem)
}
