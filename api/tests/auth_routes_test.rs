//! Integration tests for the authentication endpoints

#[macro_use]
mod common;

use actix_web::test;
use serde_json::{json, Value};

use common::{bearer, register_body, test_cors, test_state, PASSWORD};
use inv_api::create_app;

#[actix_web::test]
async fn test_register_returns_session_and_user() {
    let app = test::init_service(create_app(test_state(), test_cors())).await;

    let req = test::TestRequest::post()
        .uri("/api/auth/register")
        .set_json(register_body("Jane@Example.com", "Administrator"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 201);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["isSuccess"], true);
    assert!(body["data"]["accessToken"].is_string());
    assert!(body["data"]["refreshToken"].is_string());
    assert_eq!(body["data"]["user"]["email"], "jane@example.com");
    assert_eq!(body["data"]["user"]["fullName"], "Test User");
    assert_eq!(body["data"]["user"]["role"], "Administrator");
}

#[actix_web::test]
async fn test_duplicate_email_is_rejected() {
    let app = test::init_service(create_app(test_state(), test_cors())).await;
    register!(&app, "dup@example.com", "Employee");

    let req = test::TestRequest::post()
        .uri("/api/auth/register")
        .set_json(register_body("DUP@example.com", "Employee"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
}

#[actix_web::test]
async fn test_login() {
    let app = test::init_service(create_app(test_state(), test_cors())).await;
    register!(&app, "login@example.com", "Employee");

    let req = test::TestRequest::post()
        .uri("/api/auth/login")
        .set_json(json!({ "email": "login@example.com", "password": PASSWORD }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let req = test::TestRequest::post()
        .uri("/api/auth/login")
        .set_json(json!({ "email": "login@example.com", "password": "Wrong123" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 401);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Invalid credentials");
}

#[actix_web::test]
async fn test_refresh_rotates_tokens() {
    let app = test::init_service(create_app(test_state(), test_cors())).await;
    let session = register!(&app, "rotate@example.com", "Employee");
    let old = json!({
        "accessToken": session["accessToken"],
        "refreshToken": session["refreshToken"],
    });

    let req = test::TestRequest::post()
        .uri("/api/auth/refresh-token")
        .set_json(&old)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
    let body: Value = test::read_body_json(resp).await;
    assert_ne!(body["data"]["refreshToken"], session["refreshToken"]);

    // The rotated-out refresh token no longer works
    let req = test::TestRequest::post()
        .uri("/api/auth/refresh-token")
        .set_json(&old)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 401);
}

#[actix_web::test]
async fn test_logout_ends_session() {
    let app = test::init_service(create_app(test_state(), test_cors())).await;
    let session = register!(&app, "bye@example.com", "Employee");
    let access = session["accessToken"].as_str().unwrap();

    let req = test::TestRequest::post()
        .uri("/api/auth/logout")
        .insert_header(bearer(access))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Logged out successfully");

    let req = test::TestRequest::post()
        .uri("/api/auth/refresh-token")
        .set_json(json!({
            "accessToken": session["accessToken"],
            "refreshToken": session["refreshToken"],
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 401);
}

#[actix_web::test]
async fn test_logout_without_auth() {
    let app = test::init_service(create_app(test_state(), test_cors())).await;

    let req = test::TestRequest::post().uri("/api/auth/logout").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 401);
}
