//! Shared helpers for the router integration suites.

#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, Response, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use clientes_axum::bootstrap::{AxumContext, CorsConfig};
use clientes_axum::routes::create_router;
use clientes_db::TestDb;

pub const JSON_PATCH: &str = "application/json-patch+json";

/// Router over a fresh in-memory database.
pub async fn test_app_with(cors: &CorsConfig) -> Router {
    let db = TestDb::new().await.unwrap();
    create_router(AxumContext::new(db.service()), cors)
}

pub async fn test_app() -> Router {
    test_app_with(&CorsConfig::AllowAll).await
}

pub async fn send(app: &Router, request: Request<Body>) -> Response<Body> {
    app.clone().oneshot(request).await.unwrap()
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub fn delete(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn with_body(method: Method, uri: &str, content_type: &str, body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, content_type)
        .body(body.into())
        .unwrap()
}

pub fn post_json(uri: &str, body: &Value) -> Request<Body> {
    with_body(Method::POST, uri, "application/json", body.to_string())
}

pub fn patch_json(uri: &str, body: &Value) -> Request<Body> {
    with_body(Method::PATCH, uri, JSON_PATCH, body.to_string())
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response<Body>) -> Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

/// POST a customer and return the created representation.
pub async fn create_cliente(app: &Router, body: &Value) -> Value {
    let response = send(app, post_json("/clientes", body)).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await
}

pub async fn list(app: &Router, uri: &str) -> Vec<Value> {
    let response = send(app, get(uri)).await;
    assert_eq!(response.status(), StatusCode::OK);
    match body_json(response).await {
        Value::Array(items) => items,
        other => panic!("expected a JSON array, got {other}"),
    }
}

pub fn names(items: &[Value]) -> Vec<&str> {
    items.iter().filter_map(|c| c["nombre"].as_str()).collect()
}
