//! Product route handlers

use actix_web::{web, HttpResponse};

use inv_core::application::products::{
    AdjustStock, CreateProduct, DeleteProduct, GetLowStockProducts, GetProductById, GetProducts,
    ReportLowStock, UpdateProduct,
};

use crate::middleware::AuthContext;
use crate::response::{created, dispatch, ok};
use crate::state::AppState;

/// Handler for GET /api/products?page=&pageSize=&searchTerm=&categoryId=
pub async fn list_products(
    state: web::Data<AppState>,
    auth: AuthContext,
    query: web::Query<GetProducts>,
) -> HttpResponse {
    ok(dispatch(&state.mediator, query.into_inner(), auth.context()).await)
}

/// Handler for GET /api/products/low-stock?threshold=
pub async fn low_stock_products(
    state: web::Data<AppState>,
    auth: AuthContext,
    query: web::Query<GetLowStockProducts>,
) -> HttpResponse {
    ok(dispatch(&state.mediator, query.into_inner(), auth.context()).await)
}

/// Handler for GET /api/products/{id}
pub async fn get_product(state: web::Data<AppState>, auth: AuthContext, path: web::Path<String>) -> HttpResponse {
    let request = GetProductById { id: path.into_inner() };
    ok(dispatch(&state.mediator, request, auth.context()).await)
}

/// Handler for POST /api/products
pub async fn create_product(
    state: web::Data<AppState>,
    auth: AuthContext,
    body: web::Json<CreateProduct>,
) -> HttpResponse {
    created(dispatch(&state.mediator, body.into_inner(), auth.context()).await)
}

/// Handler for PUT /api/products/{id}
///
/// The id in the path wins over any id in the body.
pub async fn update_product(
    state: web::Data<AppState>,
    auth: AuthContext,
    path: web::Path<String>,
    body: web::Json<UpdateProduct>,
) -> HttpResponse {
    let mut request = body.into_inner();
    request.id = path.into_inner();
    ok(dispatch(&state.mediator, request, auth.context()).await)
}

/// Handler for DELETE /api/products/{id}
pub async fn delete_product(state: web::Data<AppState>, auth: AuthContext, path: web::Path<String>) -> HttpResponse {
    let request = DeleteProduct { id: path.into_inner() };
    ok(dispatch(&state.mediator, request, auth.context()).await)
}

/// Handler for POST /api/products/{id}/stock
///
/// Body: `{ "quantity": -3 }`; positive adds stock, negative removes it.
pub async fn adjust_stock(
    state: web::Data<AppState>,
    auth: AuthContext,
    path: web::Path<String>,
    body: web::Json<AdjustStock>,
) -> HttpResponse {
    let mut request = body.into_inner();
    request.id = path.into_inner();
    ok(dispatch(&state.mediator, request, auth.context()).await)
}

/// Handler for POST /api/products/{id}/report-low-stock
pub async fn report_low_stock(state: web::Data<AppState>, auth: AuthContext, path: web::Path<String>) -> HttpResponse {
    let request = ReportLowStock { id: path.into_inner() };
    ok(dispatch(&state.mediator, request, auth.context()).await)
}
