//! CORS middleware configuration for cross-origin requests.
//!
//! Development allows any origin so the single-page front end can run from
//! its own dev server. Other environments only accept the configured origins.

use actix_cors::Cors;
use actix_web::http::{header, Method};

use inv_shared::Environment;

const MAX_AGE_SECS: usize = 3600;

/// Creates a CORS middleware instance configured for the environment
///
/// # Arguments
///
/// * `environment` - Deployment environment
/// * `allowed_origins` - Origins accepted outside development
pub fn create_cors(environment: Environment, allowed_origins: &[String]) -> Cors {
    if environment.is_development() {
        create_development_cors()
    } else {
        create_restricted_cors(allowed_origins)
    }
}

fn create_development_cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .allowed_methods(allowed_methods())
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
            header::ORIGIN,
            header::HeaderName::from_static("x-requested-with"),
        ])
        .expose_headers(vec![header::CONTENT_DISPOSITION])
        .max_age(MAX_AGE_SECS)
        .supports_credentials()
}

fn create_restricted_cors(allowed_origins: &[String]) -> Cors {
    let mut cors = Cors::default()
        .allowed_methods(allowed_methods())
        .allowed_headers(vec![header::AUTHORIZATION, header::ACCEPT, header::CONTENT_TYPE])
        .expose_headers(vec![header::CONTENT_DISPOSITION])
        .max_age(MAX_AGE_SECS);

    for origin in allowed_origins.iter().map(|o| o.trim()).filter(|o| !o.is_empty()) {
        tracing::info!("Adding allowed origin: {}", origin);
        cors = cors.allowed_origin(origin);
    }

    cors
}

fn allowed_methods() -> Vec<Method> {
    vec![Method::GET, Method::POST, Method::PUT, Method::DELETE, Method::OPTIONS]
}
