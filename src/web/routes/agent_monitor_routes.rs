use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::{StatusCode, header},
    routing::get,
};
use std::sync::Arc;
use tracing::debug;

use crate::db::services::agent_monitor_service;
use crate::web::models::agent_monitor_models::{AgentMonitorDto, AgentMonitorPayload};
use crate::web::models::{ListParams, SearchParams};
use crate::web::{AppError, AppState};

pub fn create_agent_monitor_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(list_agent_monitors).post(create_agent_monitor))
        .route("/_search", get(search_agent_monitors))
        .route(
            "/{id}",
            get(get_agent_monitor)
                .put(update_agent_monitor)
                .patch(partial_update_agent_monitor)
                .delete(delete_agent_monitor),
        )
}

#[axum::debug_handler]
async fn create_agent_monitor(
    State(app_state): State<Arc<AppState>>,
    Json(payload): Json<AgentMonitorPayload>,
) -> Result<(StatusCode, [(header::HeaderName, String); 1], Json<AgentMonitorDto>), AppError> {
    debug!("REST request to save AgentMonitor");
    let saved =
        agent_monitor_service::create_agent_monitor(&app_state.db, &app_state.search, payload)
            .await?;
    let location = format!("/api/agent-monitors/{}", saved.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(saved.into()),
    ))
}

#[axum::debug_handler]
async fn list_agent_monitors(
    State(app_state): State<Arc<AppState>>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<AgentMonitorDto>>, AppError> {
    debug!("REST request to get all AgentMonitors");
    let monitors =
        agent_monitor_service::list_agent_monitors(&app_state.db, &params.sort).await?;
    Ok(Json(monitors.into_iter().map(Into::into).collect()))
}

#[axum::debug_handler]
async fn get_agent_monitor(
    State(app_state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<AgentMonitorDto>, AppError> {
    debug!(id, "REST request to get AgentMonitor");
    let monitor = agent_monitor_service::get_agent_monitor(&app_state.db, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("agentMonitor {id} not found")))?;
    Ok(Json(monitor.into()))
}

#[axum::debug_handler]
async fn update_agent_monitor(
    State(app_state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(payload): Json<AgentMonitorPayload>,
) -> Result<Json<AgentMonitorDto>, AppError> {
    debug!(id, "REST request to update AgentMonitor");
    let updated = agent_monitor_service::update_agent_monitor(
        &app_state.db,
        &app_state.search,
        id,
        payload,
    )
    .await?;
    Ok(Json(updated.into()))
}

#[axum::debug_handler]
async fn partial_update_agent_monitor(
    State(app_state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(payload): Json<AgentMonitorPayload>,
) -> Result<Json<AgentMonitorDto>, AppError> {
    debug!(id, "REST request to partial update AgentMonitor");
    let updated = agent_monitor_service::partial_update_agent_monitor(
        &app_state.db,
        &app_state.search,
        id,
        payload,
    )
    .await?;
    Ok(Json(updated.into()))
}

#[axum::debug_handler]
async fn delete_agent_monitor(
    State(app_state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    debug!(id, "REST request to delete AgentMonitor");
    agent_monitor_service::delete_agent_monitor(&app_state.db, &app_state.search, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[axum::debug_handler]
async fn search_agent_monitors(
    State(app_state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<AgentMonitorDto>>, AppError> {
    debug!(query = %params.query, "REST request to search AgentMonitors");
    let monitors = agent_monitor_service::search_agent_monitors(
        &app_state.db,
        &app_state.search,
        &params.query,
    )
    .await?;
    Ok(Json(monitors.into_iter().map(Into::into).collect()))
}
