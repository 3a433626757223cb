//! Integration tests for routing, error payloads and the JWT middleware

#[macro_use]
mod common;

use actix_web::{http::header, test};
use serde_json::{json, Value};

use common::{bearer, test_cors, test_state};
use inv_api::create_app;

#[actix_web::test]
async fn test_health_check() {
    let app = test::init_service(create_app(test_state(), test_cors())).await;

    let req = test::TestRequest::get().uri("/api/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "healthy");
}

#[actix_web::test]
async fn test_unknown_route_returns_error_payload() {
    let app = test::init_service(create_app(test_state(), test_cors())).await;

    let req = test::TestRequest::get().uri("/nowhere").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["statusCode"], 404);
    assert_eq!(body["error"], "NOT_FOUND");
}

#[actix_web::test]
async fn test_malformed_json_is_bad_request() {
    let app = test::init_service(create_app(test_state(), test_cors())).await;

    let req = test::TestRequest::post()
        .uri("/api/auth/login")
        .insert_header((header::CONTENT_TYPE, "application/json"))
        .set_payload("{not json")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["statusCode"], 400);
    assert!(body["errors"]["body"].is_array());
}

#[actix_web::test]
async fn test_protected_route_requires_token() {
    let app = test::init_service(create_app(test_state(), test_cors())).await;

    let req = test::TestRequest::get().uri("/api/products").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 401);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "UNAUTHORIZED");
}

#[actix_web::test]
async fn test_garbage_token_is_rejected() {
    let app = test::init_service(create_app(test_state(), test_cors())).await;

    let req = test::TestRequest::get()
        .uri("/api/categories")
        .insert_header(bearer("not.a.jwt"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 401);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "TOKEN_INVALID");
}

#[actix_web::test]
async fn test_validation_failure_envelope() {
    let app = test::init_service(create_app(test_state(), test_cors())).await;

    let req = test::TestRequest::post()
        .uri("/api/auth/register")
        .set_json(json!({
            "email": "not-an-email",
            "password": "short",
            "firstName": "A",
            "lastName": "B",
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["isSuccess"], false);
    assert!(body["data"].is_null());
    assert!(body["errors"]["email"].is_array());
    assert!(body["errors"]["password"].is_array());
}

#[actix_web::test]
async fn test_bad_query_string_is_bad_request() {
    let app = test::init_service(create_app(test_state(), test_cors())).await;
    let token = token_for!(&app, "viewer@example.com", "Employee");

    let req = test::TestRequest::get()
        .uri("/api/products?page=abc")
        .insert_header(bearer(&token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
}
