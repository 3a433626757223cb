//! Application factory
//!
//! Builds the actix-web `App` from the shared state: request tracing, CORS,
//! JSON error payloads for malformed input, the `/api` routes and a 404
//! fallback.

use actix_cors::Cors;
use actix_web::{
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    error::InternalError,
    web, App, Error,
};
use tracing_actix_web::TracingLogger;

use crate::response::{bad_request, not_found};
use crate::routes;
use crate::state::AppState;

/// Create and configure the application
///
/// # Arguments
///
/// * `state` - Shared state, cloned into every worker
/// * `cors` - CORS policy for the environment
pub fn create_app(
    state: web::Data<AppState>,
    cors: Cors,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl actix_web::body::MessageBody>,
        Error = Error,
        InitError = (),
    >,
> {
    let json_config = web::JsonConfig::default().error_handler(|err, req| {
        let response = bad_request("body", err.to_string(), req);
        InternalError::from_response(err, response).into()
    });
    let query_config = web::QueryConfig::default().error_handler(|err, req| {
        let response = bad_request("query", err.to_string(), req);
        InternalError::from_response(err, response).into()
    });

    App::new()
        .app_data(state)
        .app_data(json_config)
        .app_data(query_config)
        .wrap(cors)
        .wrap(TracingLogger::default())
        .service(web::scope("/api").configure(routes::configure))
        .default_service(web::route().to(not_found))
}
