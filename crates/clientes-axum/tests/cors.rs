//! Integration tests for CORS handling.

mod common;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};

use clientes_axum::bootstrap::CorsConfig;
use common::{send, test_app_with};

fn preflight(origin: &str) -> Request<Body> {
    Request::builder()
        .method(Method::OPTIONS)
        .uri("/clientes")
        .header(header::ORIGIN, origin)
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn allow_all_answers_any_origin() {
    let app = test_app_with(&CorsConfig::AllowAll).await;

    let response = send(&app, preflight("http://example.com")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        "*"
    );
}

#[tokio::test]
async fn allow_origins_only_echoes_listed_origins() {
    let cors = CorsConfig::AllowOrigins(vec!["http://localhost:3000".to_string()]);
    let app = test_app_with(&cors).await;

    let allowed = send(&app, preflight("http://localhost:3000")).await;
    assert_eq!(
        allowed.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        "http://localhost:3000"
    );

    let denied = send(&app, preflight("http://evil.example")).await;
    assert!(
        denied
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .is_none()
    );
}

#[tokio::test]
async fn location_header_is_exposed_to_browsers() {
    let app = test_app_with(&CorsConfig::AllowAll).await;

    let request = Request::builder()
        .method(Method::POST)
        .uri("/clientes")
        .header(header::ORIGIN, "http://example.com")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"nombre":"Ana"}"#))
        .unwrap();
    let response = send(&app, request).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let exposed = response
        .headers()
        .get(header::ACCESS_CONTROL_EXPOSE_HEADERS)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_ascii_lowercase();
    assert!(exposed.contains("location"));
}
