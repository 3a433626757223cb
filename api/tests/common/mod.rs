//! Shared setup for the HTTP integration tests

#![allow(dead_code)]

use actix_cors::Cors;
use actix_web::{http::header, web};
use serde_json::{json, Value};

use inv_api::middleware::create_cors;
use inv_api::{AppState, Repositories};
use inv_shared::{AppConfig, Environment};

pub const PASSWORD: &str = "Secret123";

/// In-memory state with a cheap bcrypt cost
pub fn test_state() -> web::Data<AppState> {
    let mut config = AppConfig::default();
    config.jwt.bcrypt_cost = 4;
    web::Data::new(AppState::new(&config, Repositories::in_memory()))
}

pub fn test_cors() -> Cors {
    create_cors(Environment::Development, &[])
}

pub fn register_body(email: &str, role: &str) -> Value {
    json!({
        "email": email,
        "password": PASSWORD,
        "firstName": "Test",
        "lastName": "User",
        "role": role,
    })
}

pub fn bearer(token: &str) -> (header::HeaderName, String) {
    (header::AUTHORIZATION, format!("Bearer {}", token))
}

/// Register a user and return the `data` of the auth response
macro_rules! register {
    ($app:expr, $email:expr, $role:expr) => {{
        let request = actix_web::test::TestRequest::post()
            .uri("/api/auth/register")
            .set_json(common::register_body($email, $role))
            .to_request();
        let body: serde_json::Value = actix_web::test::call_and_read_body_json($app, request).await;
        assert_eq!(body["isSuccess"], true, "registration failed: {}", body);
        body["data"].clone()
    }};
}

/// Register a user and return its access token
macro_rules! token_for {
    ($app:expr, $email:expr, $role:expr) => {{
        let data = register!($app, $email, $role);
        data["accessToken"].as_str().unwrap().to_string()
    }};
}
