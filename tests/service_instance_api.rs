mod common;

use axum::http::StatusCode;
use common::{
    build_test_context, create_instance_fixture, create_monitored_service_fixture, request_json,
    request_merge_patch, request_no_body,
};
use serde_json::json;

#[tokio::test]
async fn create_then_read_service_instance() {
    let ctx = build_test_context().await;
    let instance_id = create_instance_fixture(&ctx.app, "db-1").await;
    let service_id = create_monitored_service_fixture(&ctx.app, "orders-db").await;

    let (status, body, location) = request_json(
        &ctx.app,
        "POST",
        "/api/service-instances",
        json!({
            "port": 5432,
            "isActive": true,
            "instance": {"id": instance_id},
            "monitoredService": {"id": service_id}
        }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let id = body["id"].as_i64().unwrap();
    assert_eq!(
        location.as_deref(),
        Some(&*format!("/api/service-instances/{id}"))
    );
    assert_eq!(body["port"], json!(5432));
    assert_eq!(body["instance"]["id"].as_i64(), Some(instance_id));
    assert!(body["createdAt"].is_string());
    assert!(body["updatedAt"].is_string());

    let (status, body, _) =
        request_no_body(&ctx.app, "GET", &format!("/api/service-instances/{id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["monitoredService"]["id"].as_i64(), Some(service_id));
}

#[tokio::test]
async fn create_rejects_bad_payloads() {
    let ctx = build_test_context().await;
    let instance_id = create_instance_fixture(&ctx.app, "db-1").await;
    let service_id = create_monitored_service_fixture(&ctx.app, "orders-db").await;

    let valid = json!({
        "port": 5432,
        "instance": {"id": instance_id},
        "monitoredService": {"id": service_id}
    });

    // client-supplied id
    let mut payload = valid.clone();
    payload["id"] = json!(1);
    let (status, _, _) = request_json(&ctx.app, "POST", "/api/service-instances", payload).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    for field in ["port", "instance", "monitoredService"] {
        let mut payload = valid.clone();
        payload.as_object_mut().unwrap().remove(field);
        let (status, _, _) =
            request_json(&ctx.app, "POST", "/api/service-instances", payload).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "missing {field} must be rejected");
    }

    // a ref object without an id
    let mut payload = valid.clone();
    payload["instance"] = json!({});
    let (status, _, _) = request_json(&ctx.app, "POST", "/api/service-instances", payload).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, body, _) = request_no_body(&ctx.app, "GET", "/api/service-instances").await;
    assert_eq!(body.as_array().map(Vec::len), Some(0));
}

#[tokio::test]
async fn put_and_patch_follow_the_identity_rules() {
    let ctx = build_test_context().await;
    let instance_id = create_instance_fixture(&ctx.app, "db-1").await;
    let service_id = create_monitored_service_fixture(&ctx.app, "orders-db").await;

    let (_, body, _) = request_json(
        &ctx.app,
        "POST",
        "/api/service-instances",
        json!({
            "port": 5432,
            "isActive": true,
            "instance": {"id": instance_id},
            "monitoredService": {"id": service_id}
        }),
    )
    .await;
    let id = body["id"].as_i64().unwrap();

    // full replace
    let (status, body, _) = request_json(
        &ctx.app,
        "PUT",
        &format!("/api/service-instances/{id}"),
        json!({
            "id": id,
            "port": 5433,
            "isActive": false,
            "instance": {"id": instance_id},
            "monitoredService": {"id": service_id}
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["port"], json!(5433));
    assert_eq!(body["isActive"], json!(false));

    // merge-patch leaves missing fields intact
    let (status, body, _) = request_merge_patch(
        &ctx.app,
        &format!("/api/service-instances/{id}"),
        json!({"id": id, "port": 6432}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["port"], json!(6432));
    assert_eq!(body["isActive"], json!(false));

    // id mismatch, missing body id, nonexistent record
    let (status, _, _) = request_json(
        &ctx.app,
        "PUT",
        &format!("/api/service-instances/{id}"),
        json!({
            "id": id + 1,
            "port": 5432,
            "instance": {"id": instance_id},
            "monitoredService": {"id": service_id}
        }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _, _) = request_merge_patch(
        &ctx.app,
        &format!("/api/service-instances/{id}"),
        json!({"port": 5432}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _, _) = request_json(
        &ctx.app,
        "PUT",
        "/api/service-instances/555",
        json!({
            "id": 555,
            "port": 5432,
            "instance": {"id": instance_id},
            "monitoredService": {"id": service_id}
        }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // no id in the path at all
    let (status, _, _) = request_json(
        &ctx.app,
        "PUT",
        "/api/service-instances",
        json!({"id": id, "port": 5432}),
    )
    .await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn delete_and_missing_lookups() {
    let ctx = build_test_context().await;
    let instance_id = create_instance_fixture(&ctx.app, "db-1").await;
    let service_id = create_monitored_service_fixture(&ctx.app, "orders-db").await;

    let (status, _, _) = request_no_body(&ctx.app, "GET", "/api/service-instances/31").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, body, _) = request_json(
        &ctx.app,
        "POST",
        "/api/service-instances",
        json!({
            "port": 5432,
            "instance": {"id": instance_id},
            "monitoredService": {"id": service_id}
        }),
    )
    .await;
    let id = body["id"].as_i64().unwrap();

    let (status, _, _) =
        request_no_body(&ctx.app, "DELETE", &format!("/api/service-instances/{id}")).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (status, _, _) =
        request_no_body(&ctx.app, "GET", &format!("/api/service-instances/{id}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn search_matches_on_port_tokens() {
    let ctx = build_test_context().await;
    let instance_id = create_instance_fixture(&ctx.app, "db-1").await;
    let service_id = create_monitored_service_fixture(&ctx.app, "orders-db").await;

    for port in [5432, 6379] {
        let (status, _, _) = request_json(
            &ctx.app,
            "POST",
            "/api/service-instances",
            json!({
                "port": port,
                "isActive": true,
                "instance": {"id": instance_id},
                "monitoredService": {"id": service_id}
            }),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, body, _) =
        request_no_body(&ctx.app, "GET", "/api/service-instances/_search?query=6379").await;
    assert_eq!(status, StatusCode::OK);
    let hits = body.as_array().unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0]["port"], json!(6379));

    let (status, body, _) =
        request_no_body(&ctx.app, "GET", "/api/service-instances/_search?query=9999").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().map(Vec::len), Some(0));
}

#[tokio::test]
async fn list_sorts_by_port() {
    let ctx = build_test_context().await;
    let instance_id = create_instance_fixture(&ctx.app, "db-1").await;
    let service_id = create_monitored_service_fixture(&ctx.app, "orders-db").await;

    for port in [9000, 80, 5432] {
        request_json(
            &ctx.app,
            "POST",
            "/api/service-instances",
            json!({
                "port": port,
                "instance": {"id": instance_id},
                "monitoredService": {"id": service_id}
            }),
        )
        .await;
    }

    let (status, body, _) =
        request_no_body(&ctx.app, "GET", "/api/service-instances?sort=port,asc").await;
    assert_eq!(status, StatusCode::OK);
    let ports: Vec<i64> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["port"].as_i64().unwrap())
        .collect();
    assert_eq!(ports, vec![80, 5432, 9000]);
}
