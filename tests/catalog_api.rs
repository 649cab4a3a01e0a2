mod common;

use axum::http::StatusCode;
use common::{build_test_context, create_agent_fixture, request_json, request_no_body};
use serde_json::json;

#[tokio::test]
async fn health_endpoint_responds() {
    let ctx = build_test_context().await;
    let (status, body, _) = request_no_body(&ctx.app, "GET", "/api/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!("OK"));
}

#[tokio::test]
async fn agent_lifecycle() {
    let ctx = build_test_context().await;

    let (status, body, location) = request_json(
        &ctx.app,
        "POST",
        "/api/agents",
        json!({"name": "edge-agent-1", "hostname": "edge-1.internal", "status": "UP"}),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let id = body["id"].as_i64().unwrap();
    assert_eq!(location.as_deref(), Some(&*format!("/api/agents/{id}")));
    assert_eq!(body["name"], json!("edge-agent-1"));
    assert_eq!(body["ipAddress"], json!(null));

    let (status, body, _) = request_no_body(&ctx.app, "GET", &format!("/api/agents/{id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["hostname"], json!("edge-1.internal"));

    let (status, body, _) = request_no_body(&ctx.app, "GET", "/api/agents").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().map(Vec::len), Some(1));

    let (status, _, _) = request_no_body(&ctx.app, "DELETE", &format!("/api/agents/{id}")).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (status, _, _) = request_no_body(&ctx.app, "GET", &format!("/api/agents/{id}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn catalog_creates_validate_required_fields() {
    let ctx = build_test_context().await;

    // agent without a name
    let (status, _, _) =
        request_json(&ctx.app, "POST", "/api/agents", json!({"hostname": "x"})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // agent with a client id
    let (status, _, _) = request_json(
        &ctx.app,
        "POST",
        "/api/agents",
        json!({"id": 5, "name": "edge"}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // monitor missing its interval
    let (status, _, _) = request_json(
        &ctx.app,
        "POST",
        "/api/http-monitors",
        json!({
            "name": "healthz",
            "method": "GET",
            "type": "HTTPS",
            "timeoutSeconds": 10,
            "retryCount": 3,
            "retryDelaySeconds": 5
        }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // status page missing its slug
    let (status, _, _) = request_json(
        &ctx.app,
        "POST",
        "/api/status-pages",
        json!({"name": "Public status", "isPublic": true}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // instance missing its monitoring type
    let (status, _, _) = request_json(
        &ctx.app,
        "POST",
        "/api/instances",
        json!({"name": "db-1", "hostname": "db-1.internal", "instanceType": "VM"}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn monitored_service_and_status_page_round_trip() {
    let ctx = build_test_context().await;

    let (status, body, _) = request_json(
        &ctx.app,
        "POST",
        "/api/monitored-services",
        json!({
            "name": "orders-db",
            "serviceType": "POSTGRES",
            "environment": "production",
            "intervalSeconds": 30,
            "timeoutMs": 2000,
            "retryCount": 2,
            "isActive": true
        }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["serviceType"], json!("POSTGRES"));
    assert_eq!(body["timeoutMs"], json!(2000));

    let (status, body, _) = request_json(
        &ctx.app,
        "POST",
        "/api/status-pages",
        json!({"name": "Public status", "slug": "public", "isPublic": true}),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["slug"], json!("public"));
    assert!(body["createdAt"].is_string());
    assert!(body["updatedAt"].is_string());
}

#[tokio::test]
async fn deleting_an_agent_cascades_to_its_assignments() {
    let ctx = build_test_context().await;
    let agent_id = create_agent_fixture(&ctx.app, "edge-agent-1").await;
    let monitor_id = common::create_http_monitor_fixture(&ctx.app, "healthz").await;

    let (status, body, _) = request_json(
        &ctx.app,
        "POST",
        "/api/agent-monitors",
        json!({
            "active": true,
            "createdBy": "admin",
            "lastModifiedBy": "admin",
            "agent": {"id": agent_id},
            "monitor": {"id": monitor_id}
        }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let assignment_id = body["id"].as_i64().unwrap();

    let (status, _, _) =
        request_no_body(&ctx.app, "DELETE", &format!("/api/agents/{agent_id}")).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _, _) = request_no_body(
        &ctx.app,
        "GET",
        &format!("/api/agent-monitors/{assignment_id}"),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
