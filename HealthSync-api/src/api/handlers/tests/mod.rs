mod auth_test;

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use crate::api::{create_application, AppState};

/// Router over fresh in-memory services
pub(crate) fn test_app() -> Router {
    create_application(AppState::default())
}

/// Send one request and decode the JSON body (Null when empty)
pub(crate) async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, value)
}

/// Run the code, register and login flow, returning the session token
pub(crate) async fn sign_in(app: &Router, full_name: &str) -> String {
    let email = format!("{}@example.com", full_name.to_lowercase().replace(' ', "."));

    let (status, otp) = send(
        app,
        Method::POST,
        "/auth/otp",
        None,
        Some(json!({ "email": email, "phone": "555-0100" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(
        app,
        Method::POST,
        "/auth/register",
        None,
        Some(json!({
            "full_name": full_name,
            "email": email,
            "phone": "555-0100",
            "password": "secret",
            "otp": otp["otp"],
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, login) = send(
        app,
        Method::POST,
        "/auth/login",
        None,
        Some(json!({ "username": full_name, "password": "secret" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    login["access_token"].as_str().unwrap().to_string()
}

/// Readings that classify as all normal
pub(crate) fn normal_readings() -> Value {
    json!({
        "temperature": 98.6,
        "heart_rate": 75.0,
        "blood_sugar": 100.0,
        "bp_systolic": 120.0,
        "bp_diastolic": 80.0
    })
}
