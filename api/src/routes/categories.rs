//! Category route handlers

use actix_web::{web, HttpResponse};

use inv_core::application::categories::{
    CreateCategory, DeleteCategory, GetCategories, GetCategoryById, UpdateCategory,
};

use crate::middleware::AuthContext;
use crate::response::{created, dispatch, ok};
use crate::state::AppState;

/// Handler for GET /api/categories
pub async fn list_categories(state: web::Data<AppState>, auth: AuthContext) -> HttpResponse {
    ok(dispatch(&state.mediator, GetCategories, auth.context()).await)
}

/// Handler for GET /api/categories/{id}
pub async fn get_category(state: web::Data<AppState>, auth: AuthContext, path: web::Path<String>) -> HttpResponse {
    let request = GetCategoryById { id: path.into_inner() };
    ok(dispatch(&state.mediator, request, auth.context()).await)
}

/// Handler for POST /api/categories
pub async fn create_category(
    state: web::Data<AppState>,
    auth: AuthContext,
    body: web::Json<CreateCategory>,
) -> HttpResponse {
    created(dispatch(&state.mediator, body.into_inner(), auth.context()).await)
}

/// Handler for PUT /api/categories/{id}
pub async fn update_category(
    state: web::Data<AppState>,
    auth: AuthContext,
    path: web::Path<String>,
    body: web::Json<UpdateCategory>,
) -> HttpResponse {
    let mut request = body.into_inner();
    request.id = path.into_inner();
    ok(dispatch(&state.mediator, request, auth.context()).await)
}

/// Handler for DELETE /api/categories/{id}
///
/// Fails with 400 while active products still reference the category.
pub async fn delete_category(state: web::Data<AppState>, auth: AuthContext, path: web::Path<String>) -> HttpResponse {
    let request = DeleteCategory { id: path.into_inner() };
    ok(dispatch(&state.mediator, request, auth.context()).await)
}
