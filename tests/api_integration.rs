//! Integration tests for the HTTP dispatcher: health, CORS policy, the fixed
//! route table, and the catch-all error conversion.
//!
//! The test state points at an unreachable MongoDB so database-backed routes
//! fail fast; that is deliberate, since the dispatcher's contract (health,
//! CORS, 404, generic 500) must hold independent of database state.

use axum::http::{HeaderName, HeaderValue, Method, StatusCode};
use axum_test::TestServer;
use hr_api::{create_app, AppState, Config, Store};
use mongodb::{options::ClientOptions, Client};
use std::time::Duration;

const FRONTEND_ORIGIN: &str = "http://localhost:5173";

fn test_config() -> Config {
    Config {
        mongo_uri: "mongodb://127.0.0.1:9/hr".to_string(),
        frontend_url: FRONTEND_ORIGIN.to_string(),
        port: 0,
        environment: "test".to_string(),
        jwt_secret: "test-secret".to_string(),
    }
}

async fn setup_test_server() -> TestServer {
    let config = test_config();
    // Port 9 is unreachable; a short selection timeout keeps failing routes fast.
    let mut options = ClientOptions::parse(&config.mongo_uri).await.unwrap();
    options.server_selection_timeout = Some(Duration::from_millis(200));
    let client = Client::with_options(options).unwrap();
    let store = Store::new(client.database("hr"));

    let state = AppState::new(config, store);
    TestServer::new(create_app(state)).unwrap()
}

fn origin(value: &'static str) -> (HeaderName, HeaderValue) {
    (
        HeaderName::from_static("origin"),
        HeaderValue::from_static(value),
    )
}

#[tokio::test]
async fn health_returns_fixed_body_regardless_of_database_state() {
    let server = setup_test_server().await;

    let response = server.get("/api/health").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["message"], "HR Management API is running");
}

#[tokio::test]
async fn requests_without_origin_are_allowed() {
    let server = setup_test_server().await;

    let response = server.get("/api/health").await;
    assert_eq!(response.status_code(), StatusCode::OK);
}

#[tokio::test]
async fn allowed_origin_gets_cors_headers_with_credentials() {
    let server = setup_test_server().await;

    let (name, value) = origin(FRONTEND_ORIGIN);
    let response = server.get("/api/health").add_header(name, value).await;

    assert_eq!(response.status_code(), StatusCode::OK);
    response.assert_header("access-control-allow-origin", FRONTEND_ORIGIN);
    response.assert_header("access-control-allow-credentials", "true");
}

#[tokio::test]
async fn preflight_advertises_the_fixed_method_and_header_lists() {
    let server = setup_test_server().await;

    let (name, value) = origin(FRONTEND_ORIGIN);
    let response = server
        .method(Method::OPTIONS, "/api/employees")
        .add_header(name, value)
        .add_header(
            HeaderName::from_static("access-control-request-method"),
            HeaderValue::from_static("PATCH"),
        )
        .await;

    response.assert_header("access-control-allow-origin", FRONTEND_ORIGIN);
    let methods = response
        .header("access-control-allow-methods")
        .to_str()
        .unwrap()
        .to_string();
    for method in ["GET", "POST", "PUT", "PATCH", "DELETE", "OPTIONS"] {
        assert!(methods.contains(method), "missing {method} in {methods}");
    }
    let headers = response
        .header("access-control-allow-headers")
        .to_str()
        .unwrap()
        .to_ascii_lowercase();
    assert!(headers.contains("content-type"));
    assert!(headers.contains("authorization"));
}

#[tokio::test]
async fn unlisted_origin_is_rejected_with_the_generic_failure_body() {
    let server = setup_test_server().await;

    let (name, value) = origin("https://evil.example");
    let response = server.get("/api/health").add_header(name, value).await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: serde_json::Value = response.json();
    assert_eq!(body["message"], "Something went wrong!");
}

#[tokio::test]
async fn secondary_allowed_origins_are_accepted() {
    let server = setup_test_server().await;

    let (name, value) = origin("http://localhost:3000");
    let response = server.get("/api/health").add_header(name, value).await;

    assert_eq!(response.status_code(), StatusCode::OK);
    response.assert_header("access-control-allow-origin", "http://localhost:3000");
}

#[tokio::test]
async fn database_failures_surface_as_the_generic_failure_body() {
    let server = setup_test_server().await;

    // The store points at an unreachable server, so this route's handler errors.
    let response = server.get("/api/users").await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: serde_json::Value = response.json();
    assert_eq!(body["message"], "Something went wrong!");
}

#[tokio::test]
async fn failing_routes_do_not_affect_other_requests() {
    let server = setup_test_server().await;

    let failed = server.get("/api/users").await;
    assert_eq!(failed.status_code(), StatusCode::INTERNAL_SERVER_ERROR);

    let health = server.get("/api/health").await;
    assert_eq!(health.status_code(), StatusCode::OK);
}

#[tokio::test]
async fn unknown_routes_return_json_404() {
    let server = setup_test_server().await;

    let response = server.get("/api/nope").await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    let body: serde_json::Value = response.json();
    assert_eq!(body["message"], "Not found");
}

#[tokio::test]
async fn api_info_lists_every_mounted_prefix() {
    let server = setup_test_server().await;

    let response = server.get("/api/info").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert_eq!(body["name"], "HR Management API");
    let prefixes = body["prefixes"].as_array().unwrap();
    assert_eq!(prefixes.len(), 12);
    assert!(prefixes.iter().any(|p| p == "/api/daily-attendance"));
}
