//! Routers for the catalog parents. Reduced surface: create, list, get,
//! delete. The primary resources hang off these via required relations.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::{StatusCode, header},
    routing::get,
};
use std::sync::Arc;
use tracing::debug;

use crate::db::services::catalog_service;
use crate::web::models::catalog_models::{
    AgentDto, AgentPayload, HttpMonitorDto, HttpMonitorPayload, InstanceDto, InstancePayload,
    MonitoredServiceDto, MonitoredServicePayload, StatusPageDto, StatusPagePayload,
};
use crate::web::{AppError, AppState};

type Created<T> = (StatusCode, [(header::HeaderName, String); 1], Json<T>);

fn created<T>(location: String, dto: T) -> Created<T> {
    (StatusCode::CREATED, [(header::LOCATION, location)], Json(dto))
}

pub fn create_agent_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(list_agents).post(create_agent))
        .route("/{id}", get(get_agent).delete(delete_agent))
}

#[axum::debug_handler]
async fn create_agent(
    State(app_state): State<Arc<AppState>>,
    Json(payload): Json<AgentPayload>,
) -> Result<Created<AgentDto>, AppError> {
    debug!("REST request to save Agent");
    let saved = catalog_service::create_agent(&app_state.db, payload).await?;
    Ok(created(format!("/api/agents/{}", saved.id), saved.into()))
}

#[axum::debug_handler]
async fn list_agents(
    State(app_state): State<Arc<AppState>>,
) -> Result<Json<Vec<AgentDto>>, AppError> {
    let agents = catalog_service::list_agents(&app_state.db).await?;
    Ok(Json(agents.into_iter().map(Into::into).collect()))
}

#[axum::debug_handler]
async fn get_agent(
    State(app_state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<AgentDto>, AppError> {
    let agent = catalog_service::get_agent(&app_state.db, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("agent {id} not found")))?;
    Ok(Json(agent.into()))
}

#[axum::debug_handler]
async fn delete_agent(
    State(app_state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    debug!(id, "REST request to delete Agent");
    catalog_service::delete_agent(&app_state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn create_http_monitor_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(list_http_monitors).post(create_http_monitor))
        .route("/{id}", get(get_http_monitor).delete(delete_http_monitor))
}

#[axum::debug_handler]
async fn create_http_monitor(
    State(app_state): State<Arc<AppState>>,
    Json(payload): Json<HttpMonitorPayload>,
) -> Result<Created<HttpMonitorDto>, AppError> {
    debug!("REST request to save HttpMonitor");
    let saved = catalog_service::create_http_monitor(&app_state.db, payload).await?;
    Ok(created(
        format!("/api/http-monitors/{}", saved.id),
        saved.into(),
    ))
}

#[axum::debug_handler]
async fn list_http_monitors(
    State(app_state): State<Arc<AppState>>,
) -> Result<Json<Vec<HttpMonitorDto>>, AppError> {
    let monitors = catalog_service::list_http_monitors(&app_state.db).await?;
    Ok(Json(monitors.into_iter().map(Into::into).collect()))
}

#[axum::debug_handler]
async fn get_http_monitor(
    State(app_state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<HttpMonitorDto>, AppError> {
    let monitor = catalog_service::get_http_monitor(&app_state.db, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("httpMonitor {id} not found")))?;
    Ok(Json(monitor.into()))
}

#[axum::debug_handler]
async fn delete_http_monitor(
    State(app_state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    debug!(id, "REST request to delete HttpMonitor");
    catalog_service::delete_http_monitor(&app_state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn create_instance_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(list_instances).post(create_instance))
        .route("/{id}", get(get_instance).delete(delete_instance))
}

#[axum::debug_handler]
async fn create_instance(
    State(app_state): State<Arc<AppState>>,
    Json(payload): Json<InstancePayload>,
) -> Result<Created<InstanceDto>, AppError> {
    debug!("REST request to save Instance");
    let saved = catalog_service::create_instance(&app_state.db, payload).await?;
    Ok(created(format!("/api/instances/{}", saved.id), saved.into()))
}

#[axum::debug_handler]
async fn list_instances(
    State(app_state): State<Arc<AppState>>,
) -> Result<Json<Vec<InstanceDto>>, AppError> {
    let instances = catalog_service::list_instances(&app_state.db).await?;
    Ok(Json(instances.into_iter().map(Into::into).collect()))
}

#[axum::debug_handler]
async fn get_instance(
    State(app_state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<InstanceDto>, AppError> {
    let instance = catalog_service::get_instance(&app_state.db, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("instance {id} not found")))?;
    Ok(Json(instance.into()))
}

#[axum::debug_handler]
async fn delete_instance(
    State(app_state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    debug!(id, "REST request to delete Instance");
    catalog_service::delete_instance(&app_state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn create_monitored_service_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(list_monitored_services).post(create_monitored_service))
        .route(
            "/{id}",
            get(get_monitored_service).delete(delete_monitored_service),
        )
}

#[axum::debug_handler]
async fn create_monitored_service(
    State(app_state): State<Arc<AppState>>,
    Json(payload): Json<MonitoredServicePayload>,
) -> Result<Created<MonitoredServiceDto>, AppError> {
    debug!("REST request to save MonitoredService");
    let saved = catalog_service::create_monitored_service(&app_state.db, payload).await?;
    Ok(created(
        format!("/api/monitored-services/{}", saved.id),
        saved.into(),
    ))
}

#[axum::debug_handler]
async fn list_monitored_services(
    State(app_state): State<Arc<AppState>>,
) -> Result<Json<Vec<MonitoredServiceDto>>, AppError> {
    let services = catalog_service::list_monitored_services(&app_state.db).await?;
    Ok(Json(services.into_iter().map(Into::into).collect()))
}

#[axum::debug_handler]
async fn get_monitored_service(
    State(app_state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<MonitoredServiceDto>, AppError> {
    let service = catalog_service::get_monitored_service(&app_state.db, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("monitoredService {id} not found")))?;
    Ok(Json(service.into()))
}

#[axum::debug_handler]
async fn delete_monitored_service(
    State(app_state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    debug!(id, "REST request to delete MonitoredService");
    catalog_service::delete_monitored_service(&app_state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn create_status_page_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(list_status_pages).post(create_status_page))
        .route("/{id}", get(get_status_page).delete(delete_status_page))
}

#[axum::debug_handler]
async fn create_status_page(
    State(app_state): State<Arc<AppState>>,
    Json(payload): Json<StatusPagePayload>,
) -> Result<Created<StatusPageDto>, AppError> {
    debug!("REST request to save StatusPage");
    let saved = catalog_service::create_status_page(&app_state.db, payload).await?;
    Ok(created(
        format!("/api/status-pages/{}", saved.id),
        saved.into(),
    ))
}

#[axum::debug_handler]
async fn list_status_pages(
    State(app_state): State<Arc<AppState>>,
) -> Result<Json<Vec<StatusPageDto>>, AppError> {
    let pages = catalog_service::list_status_pages(&app_state.db).await?;
    Ok(Json(pages.into_iter().map(Into::into).collect()))
}

#[axum::debug_handler]
async fn get_status_page(
    State(app_state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<StatusPageDto>, AppError> {
    let page = catalog_service::get_status_page(&app_state.db, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("statusPage {id} not found")))?;
    Ok(Json(page.into()))
}

#[axum::debug_handler]
async fn delete_status_page(
    State(app_state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    debug!(id, "REST request to delete StatusPage");
    catalog_service::delete_status_page(&app_state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
