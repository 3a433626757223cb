//! JWT authentication middleware for protecting API endpoints.
//!
//! This middleware extracts the bearer token from the Authorization header,
//! verifies it with the core `TokenService` held in the application state,
//! and stores the caller in the request extensions. Handlers read it back
//! through the [`AuthContext`] extractor.

use std::future::{ready, Ready};
use std::rc::Rc;
use std::task::{Context, Poll};

use actix_web::{
    body::EitherBody,
    dev::{Payload, Service, ServiceRequest, ServiceResponse, Transform},
    error::InternalError,
    http::header::AUTHORIZATION,
    web, Error, FromRequest, HttpMessage, HttpRequest, HttpResponse,
};
use futures_util::future::LocalBoxFuture;
use tracing::debug;

use inv_core::application::{CurrentUser, RequestContext};
use inv_core::errors::{DomainError, TokenError};
use inv_shared::{error_codes, ErrorResponse};

use crate::state::AppState;

/// Authenticated caller injected into requests
#[derive(Debug, Clone)]
pub struct AuthContext(pub CurrentUser);

impl AuthContext {
    /// Request context handed to the mediator
    pub fn context(&self) -> RequestContext {
        RequestContext::authenticated(self.0.clone())
    }
}

/// JWT authentication middleware factory
#[derive(Debug, Clone, Copy, Default)]
pub struct JwtAuth;

impl JwtAuth {
    pub fn new() -> Self {
        Self
    }
}

impl<S, B> Transform<S, ServiceRequest> for JwtAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = JwtAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(JwtAuthMiddleware {
            service: Rc::new(service),
        }))
    }
}

/// JWT authentication middleware service
pub struct JwtAuthMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for JwtAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);

        Box::pin(async move {
            let token = match extract_bearer_token(&req) {
                Some(token) => token,
                None => {
                    return Ok(reject(req, error_codes::UNAUTHORIZED, "Missing or invalid Authorization header"));
                }
            };

            let state = match req.app_data::<web::Data<AppState>>() {
                Some(state) => state.clone(),
                None => return Ok(reject(req, error_codes::UNAUTHORIZED, "JWT verification not configured")),
            };

            match state.token_service.verify_access_token(&token) {
                Ok(claims) => {
                    req.extensions_mut().insert(AuthContext(CurrentUser::from(claims)));
                }
                Err(e) => {
                    debug!(error = %e, "Access token rejected");
                    let code = match e {
                        DomainError::Token(TokenError::TokenExpired) => error_codes::TOKEN_EXPIRED,
                        _ => error_codes::TOKEN_INVALID,
                    };
                    return Ok(reject(req, code, &format!("Token verification failed: {}", e)));
                }
            }

            service.call(req).await.map(ServiceResponse::map_into_left_body)
        })
    }
}

fn unauthorized_response(code: &str, message: &str) -> HttpResponse {
    HttpResponse::Unauthorized().json(ErrorResponse::new(401, code, message))
}

/// Short-circuit the request with a 401
fn reject<B>(req: ServiceRequest, code: &str, message: &str) -> ServiceResponse<EitherBody<B>> {
    req.into_response(unauthorized_response(code, message))
        .map_into_right_body()
}

/// 401 error for extractors
fn unauthorized(code: &str, message: &str) -> Error {
    InternalError::from_response(message.to_string(), unauthorized_response(code, message)).into()
}

/// Extracts Bearer token from Authorization header
fn extract_bearer_token(req: &ServiceRequest) -> Option<String> {
    req.headers()
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Extractor for required authentication
impl FromRequest for AuthContext {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let result = req
            .extensions()
            .get::<AuthContext>()
            .cloned()
            .ok_or_else(|| unauthorized(error_codes::UNAUTHORIZED, "Authentication required"));

        ready(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test;

    #[::core::prelude::v1::test]
    fn test_extract_bearer_token() {
        let req = test::TestRequest::default()
            .insert_header((AUTHORIZATION, "Bearer test_token_123"))
            .to_srv_request();
        assert_eq!(extract_bearer_token(&req), Some("test_token_123".to_string()));

        let req_no_bearer = test::TestRequest::default()
            .insert_header((AUTHORIZATION, "test_token_123"))
            .to_srv_request();
        assert_eq!(extract_bearer_token(&req_no_bearer), None);

        let req_empty = test::TestRequest::default()
            .insert_header((AUTHORIZATION, "Bearer "))
            .to_srv_request();
        assert_eq!(extract_bearer_token(&req_empty), None);

        let req_no_header = test::TestRequest::default().to_srv_request();
        assert_eq!(extract_bearer_token(&req_no_header), None);
    }
}
