//! Authentication route handlers

use actix_web::{web, HttpResponse};

use inv_core::application::auth::{Login, Logout, RefreshToken, Register};
use inv_core::application::RequestContext;

use crate::middleware::AuthContext;
use crate::response::{created, dispatch, ok};
use crate::state::AppState;

/// Handler for POST /api/auth/register
///
/// # Request Body
///
/// ```json
/// {
///     "email": "jane@example.com",
///     "password": "Secret1",
///     "firstName": "Jane",
///     "lastName": "Doe",
///     "role": "Employee"
/// }
/// ```
///
/// # Response
/// - 201 Created: `AuthResponse` with tokens and the new user
/// - 400 Bad Request: validation failure or email already registered
pub async fn register(state: web::Data<AppState>, body: web::Json<Register>) -> HttpResponse {
    created(dispatch(&state.mediator, body.into_inner(), RequestContext::anonymous()).await)
}

/// Handler for POST /api/auth/login
///
/// # Response
/// - 200 OK: `AuthResponse`
/// - 401 Unauthorized: unknown email, wrong password or inactive user
pub async fn login(state: web::Data<AppState>, body: web::Json<Login>) -> HttpResponse {
    ok(dispatch(&state.mediator, body.into_inner(), RequestContext::anonymous()).await)
}

/// Handler for POST /api/auth/refresh-token
///
/// Exchanges an access token (possibly expired) and the current refresh
/// token for a new pair. The presented refresh token stops working.
///
/// # Response
/// - 200 OK: `AuthResponse`
/// - 401 Unauthorized: token mismatch, expiry or malformed access token
pub async fn refresh_token(state: web::Data<AppState>, body: web::Json<RefreshToken>) -> HttpResponse {
    ok(dispatch(&state.mediator, body.into_inner(), RequestContext::anonymous()).await)
}

/// Handler for POST /api/auth/logout
pub async fn logout(state: web::Data<AppState>, auth: AuthContext) -> HttpResponse {
    ok(dispatch(&state.mediator, Logout, auth.context()).await)
}
