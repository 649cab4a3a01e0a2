use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::{StatusCode, header},
    routing::get,
};
use std::sync::Arc;
use tracing::debug;

use crate::db::services::service_instance_service;
use crate::web::models::service_instance_models::{ServiceInstanceDto, ServiceInstancePayload};
use crate::web::models::{ListParams, SearchParams};
use crate::web::{AppError, AppState};

pub fn create_service_instance_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(list_service_instances).post(create_service_instance))
        .route("/_search", get(search_service_instances))
        .route(
            "/{id}",
            get(get_service_instance)
                .put(update_service_instance)
                .patch(partial_update_service_instance)
                .delete(delete_service_instance),
        )
}

#[axum::debug_handler]
async fn create_service_instance(
    State(app_state): State<Arc<AppState>>,
    Json(payload): Json<ServiceInstancePayload>,
) -> Result<(StatusCode, [(header::HeaderName, String); 1], Json<ServiceInstanceDto>), AppError> {
    debug!("REST request to save ServiceInstance");
    let saved = service_instance_service::create_service_instance(
        &app_state.db,
        &app_state.search,
        payload,
    )
    .await?;
    let location = format!("/api/service-instances/{}", saved.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(saved.into()),
    ))
}

#[axum::debug_handler]
async fn list_service_instances(
    State(app_state): State<Arc<AppState>>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<ServiceInstanceDto>>, AppError> {
    debug!("REST request to get all ServiceInstances");
    let placements =
        service_instance_service::list_service_instances(&app_state.db, &params.sort).await?;
    Ok(Json(placements.into_iter().map(Into::into).collect()))
}

#[axum::debug_handler]
async fn get_service_instance(
    State(app_state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<ServiceInstanceDto>, AppError> {
    debug!(id, "REST request to get ServiceInstance");
    let placement = service_instance_service::get_service_instance(&app_state.db, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("serviceInstance {id} not found")))?;
    Ok(Json(placement.into()))
}

#[axum::debug_handler]
async fn update_service_instance(
    State(app_state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(payload): Json<ServiceInstancePayload>,
) -> Result<Json<ServiceInstanceDto>, AppError> {
    debug!(id, "REST request to update ServiceInstance");
    let updated = service_instance_service::update_service_instance(
        &app_state.db,
        &app_state.search,
        id,
        payload,
    )
    .await?;
    Ok(Json(updated.into()))
}

#[axum::debug_handler]
async fn partial_update_service_instance(
    State(app_state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(payload): Json<ServiceInstancePayload>,
) -> Result<Json<ServiceInstanceDto>, AppError> {
    debug!(id, "REST request to partial update ServiceInstance");
    let updated = service_instance_service::partial_update_service_instance(
        &app_state.db,
        &app_state.search,
        id,
        payload,
    )
    .await?;
    Ok(Json(updated.into()))
}

#[axum::debug_handler]
async fn delete_service_instance(
    State(app_state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    debug!(id, "REST request to delete ServiceInstance");
    service_instance_service::delete_service_instance(&app_state.db, &app_state.search, id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

#[axum::debug_handler]
async fn search_service_instances(
    State(app_state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<ServiceInstanceDto>>, AppError> {
    debug!(query = %params.query, "REST request to search ServiceInstances");
    let placements = service_instance_service::search_service_instances(
        &app_state.db,
        &app_state.search,
        &params.query,
    )
    .await?;
    Ok(Json(placements.into_iter().map(Into::into).collect()))
}
