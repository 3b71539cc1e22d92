//! Integration tests for serving-domain resolution across the HTTP surface

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    response::Response,
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

use apx_domains::{create_router, AppState, Config};

const PRIMARY: &str = "demo.example.com";

fn test_config() -> Config {
    Config {
        bind_address: "127.0.0.1:0".to_string(),
        primary_domain: PRIMARY.to_string(),
        approximated_api_key: "test-key".to_string(),
        // Never contacted by these tests
        approximated_api_base: "http://127.0.0.1:1".to_string(),
    }
}

fn test_app() -> Router {
    create_router(AppState::new(test_config()))
}

fn get(uri: &str) -> axum::http::request::Builder {
    Request::builder().method("GET").uri(uri)
}

async fn body_string(response: Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

async fn body_json(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_incoming_host_header_beats_host_header() {
    let response = test_app()
        .oneshot(
            get("/api/host")
                .header("apx-incoming-host", "tenant1.shop.com")
                .header(header::HOST, "edge-backend.internal")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["message"], "Hello from tenant1.shop.com");
}

#[tokio::test]
async fn test_host_header_fallback() {
    let response = test_app()
        .oneshot(
            get("/api/host")
                .header(header::HOST, "tenant2.shop.com")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["message"], "Hello from tenant2.shop.com");
}

#[tokio::test]
async fn test_configured_primary_fallback() {
    let response = test_app()
        .oneshot(get("/api/host").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["message"], format!("Hello from {}", PRIMARY));
}

#[tokio::test]
async fn test_app_hosts_answers_like_api_host() {
    let response = test_app()
        .oneshot(
            get("/app-hosts")
                .header("apx-incoming-host", "tenant1.shop.com")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["message"], "Hello from tenant1.shop.com");
}

#[tokio::test]
async fn test_index_greets_primary_domain() {
    let response = test_app()
        .oneshot(
            get("/")
                .header(header::HOST, PRIMARY)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_string(response).await;
    assert!(html.contains("Welcome to the primary domain"));
    assert!(!html.contains("Welcome to the subdomain"));
}

#[tokio::test]
async fn test_index_greets_custom_domain() {
    let response = test_app()
        .oneshot(
            get("/")
                .header("apx-incoming-host", "tenant1.shop.com")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let html = body_string(response).await;
    assert!(html.contains("Welcome to the subdomain tenant1.shop.com"));
}

#[tokio::test]
async fn test_primary_match_is_case_sensitive() {
    // The comparison is deliberately exact; a re-cased host counts as
    // a custom domain
    let response = test_app()
        .oneshot(
            get("/")
                .header(header::HOST, "Demo.Example.com")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let html = body_string(response).await;
    assert!(html.contains("Welcome to the subdomain Demo.Example.com"));
}

#[tokio::test]
async fn test_primary_match_keeps_port() {
    let response = test_app()
        .oneshot(
            get("/")
                .header(header::HOST, format!("{}:3000", PRIMARY))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let html = body_string(response).await;
    assert!(html.contains(&format!("Welcome to the subdomain {}:3000", PRIMARY)));
}

#[tokio::test]
async fn test_ssr_page_custom_domain_wording() {
    let response = test_app()
        .oneshot(
            get("/ssr-page")
                .header("apx-incoming-host", "tenant1.shop.com")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let html = body_string(response).await;
    assert!(html.contains("Welcome to the custom domain tenant1.shop.com"));
}

#[tokio::test]
async fn test_csr_page_ships_primary_domain_to_the_browser() {
    let response = test_app()
        .oneshot(
            get("/csr-page")
                .header("apx-incoming-host", "tenant1.shop.com")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_string(response).await;
    // The page carries the configured primary domain and defers the
    // comparison to the browser's visible host
    assert!(html.contains(&format!("\"{}\"", PRIMARY)));
    assert!(html.contains("window.location.host"));
}

#[tokio::test]
async fn test_health_reports_healthy() {
    let response = test_app()
        .oneshot(get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_liveness_probe() {
    let response = test_app()
        .oneshot(get("/health/live").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}
