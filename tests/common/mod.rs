#![allow(dead_code)]

use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode};
use serde_json::{Value, json};
use std::sync::Arc;
use tower::util::ServiceExt;

use inframirror::db::{self, schema};
use inframirror::search::SearchIndex;
use inframirror::web;

pub struct TestContext {
    pub app: axum::Router,
}

/// Builds the full router over a fresh in-memory SQLite database.
pub async fn build_test_context() -> TestContext {
    let db = db::connect("sqlite::memory:")
        .await
        .expect("in-memory database should connect");
    schema::init_schema(&db)
        .await
        .expect("schema should initialize");
    let app = web::create_axum_router(db, Arc::new(SearchIndex::new()));
    TestContext { app }
}

async fn run(
    app: &axum::Router,
    method: &str,
    uri: &str,
    content_type: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value, Option<String>) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(content_type) = content_type {
        builder = builder.header("Content-Type", content_type);
    }

    let req_body = match body {
        Some(value) => Body::from(value.to_string()),
        None => Body::empty(),
    };
    let req = builder.body(req_body).expect("request should build");

    let resp = app
        .clone()
        .oneshot(req)
        .await
        .expect("request should be handled");

    let status = resp.status();
    let location = resp
        .headers()
        .get("location")
        .and_then(|h| h.to_str().ok())
        .map(|s| s.to_string());
    let bytes = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("body should read");
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice::<Value>(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).to_string()))
    };

    (status, json, location)
}

pub async fn request_json(
    app: &axum::Router,
    method: &str,
    uri: &str,
    body: Value,
) -> (StatusCode, Value, Option<String>) {
    run(app, method, uri, Some("application/json"), Some(body)).await
}

/// Sends a PATCH with the RFC 7396 content type.
pub async fn request_merge_patch(
    app: &axum::Router,
    uri: &str,
    body: Value,
) -> (StatusCode, Value, Option<String>) {
    run(
        app,
        "PATCH",
        uri,
        Some("application/merge-patch+json"),
        Some(body),
    )
    .await
}

pub async fn request_no_body(
    app: &axum::Router,
    method: &str,
    uri: &str,
) -> (StatusCode, Value, Option<String>) {
    run(app, method, uri, None, None).await
}

fn created_id(status: StatusCode, body: &Value, uri: &str) -> i64 {
    assert_eq!(status, StatusCode::CREATED, "fixture POST {uri} failed: {body}");
    body["id"].as_i64().expect("created body should carry an id")
}

// --- Parent fixtures ---

pub async fn create_agent_fixture(app: &axum::Router, name: &str) -> i64 {
    let (status, body, _) = request_json(
        app,
        "POST",
        "/api/agents",
        json!({"name": name, "hostname": "edge-1.internal", "status": "UP"}),
    )
    .await;
    created_id(status, &body, "/api/agents")
}

pub async fn create_http_monitor_fixture(app: &axum::Router, name: &str) -> i64 {
    let (status, body, _) = request_json(
        app,
        "POST",
        "/api/http-monitors",
        json!({
            "name": name,
            "method": "GET",
            "type": "HTTPS",
            "url": "https://example.com/healthz",
            "intervalSeconds": 60,
            "timeoutSeconds": 10,
            "retryCount": 3,
            "retryDelaySeconds": 5
        }),
    )
    .await;
    created_id(status, &body, "/api/http-monitors")
}

pub async fn create_instance_fixture(app: &axum::Router, name: &str) -> i64 {
    let (status, body, _) = request_json(
        app,
        "POST",
        "/api/instances",
        json!({
            "name": name,
            "hostname": "db-1.internal",
            "instanceType": "VM",
            "monitoringType": "AGENT"
        }),
    )
    .await;
    created_id(status, &body, "/api/instances")
}

pub async fn create_monitored_service_fixture(app: &axum::Router, name: &str) -> i64 {
    let (status, body, _) = request_json(
        app,
        "POST",
        "/api/monitored-services",
        json!({
            "name": name,
            "serviceType": "POSTGRES",
            "environment": "production",
            "intervalSeconds": 30,
            "timeoutMs": 2000,
            "retryCount": 2
        }),
    )
    .await;
    created_id(status, &body, "/api/monitored-services")
}

pub async fn create_status_page_fixture(app: &axum::Router, slug: &str) -> i64 {
    let (status, body, _) = request_json(
        app,
        "POST",
        "/api/status-pages",
        json!({"name": "Public status", "slug": slug, "isPublic": true}),
    )
    .await;
    created_id(status, &body, "/api/status-pages")
}
