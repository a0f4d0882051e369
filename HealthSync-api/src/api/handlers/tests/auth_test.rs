use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
};
use serde_json::{json, Value};
use tower::ServiceExt;

use super::{send, sign_in, test_app};

#[tokio::test]
async fn test_otp_requires_email_and_phone() {
    let app = test_app();
    let (status, body) = send(
        &app,
        Method::POST,
        "/auth/otp",
        None,
        Some(json!({ "email": "ada@example.com", "phone": "  " })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "bad_request");
    assert_eq!(body["message"], "Please provide email and phone.");
}

#[tokio::test]
async fn test_otp_response_carries_demo_code() {
    let app = test_app();
    let (status, body) = send(
        &app,
        Method::POST,
        "/auth/otp",
        None,
        Some(json!({ "email": "ada@example.com", "phone": "555-0100" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let code = body["otp"].as_str().unwrap();
    assert_eq!(code.len(), 6);
    assert_eq!(body["message"], format!("Demo OTP (sent to email): {}", code));
}

#[tokio::test]
async fn test_register_with_wrong_otp_is_rejected() {
    let app = test_app();
    send(
        &app,
        Method::POST,
        "/auth/otp",
        None,
        Some(json!({ "email": "ada@example.com", "phone": "555-0100" })),
    )
    .await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/auth/register",
        None,
        Some(json!({
            "full_name": "Ada",
            "email": "ada@example.com",
            "phone": "555-0100",
            "password": "secret",
            "otp": "not-a-code"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Invalid or missing OTP.");
}

#[tokio::test]
async fn test_login_with_bad_password() {
    let app = test_app();
    sign_in(&app, "Ada Lovelace").await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/auth/login",
        None,
        Some(json!({ "username": "Ada Lovelace", "password": "wrong" })),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "unauthorized");
    assert_eq!(body["message"], "Invalid credentials. Please check username/password.");
}

#[tokio::test]
async fn test_login_greets_user() {
    let app = test_app();
    sign_in(&app, "Grace Hopper").await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/auth/login",
        None,
        Some(json!({ "username": "Grace Hopper", "password": "secret" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["token_type"], "Bearer");
    assert_eq!(body["message"], "Welcome back, Grace Hopper ✅");
    assert_eq!(body["user"]["email"], "grace.hopper@example.com");
}

#[tokio::test]
async fn test_auth_info_and_logout() {
    let app = test_app();
    let token = sign_in(&app, "Ada Lovelace").await;

    let (status, body) = send(&app, Method::GET, "/auth/info", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["username"], "Ada Lovelace");

    let (status, body) = send(&app, Method::POST, "/auth/logout", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "You are logged out.");

    let (status, _) = send(&app, Method::GET, "/auth/info", Some(&token), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_auth_info_requires_token() {
    let (status, body) = send(&test_app(), Method::GET, "/auth/info", None, None).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Missing Authorization header");
}

#[tokio::test]
async fn test_malformed_json_gets_error_body() {
    let app = test_app();
    let request = Request::builder()
        .method(Method::POST)
        .uri("/auth/login")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"username\": "))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["error"], "bad_request");
}

#[tokio::test]
async fn test_login_missing_password_is_a_validation_error() {
    let (status, body) = send(
        &test_app(),
        Method::POST,
        "/auth/login",
        None,
        Some(json!({ "username": "Ada Lovelace" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "validation_error");
}

#[tokio::test]
async fn test_lowercase_bearer_scheme_is_accepted() {
    let app = test_app();
    let token = sign_in(&app, "Ada Lovelace").await;

    let request = Request::builder()
        .uri("/auth/info")
        .header(header::AUTHORIZATION, format!("bearer {}", token))
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}
