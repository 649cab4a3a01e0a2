use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::{StatusCode, header},
    routing::get,
};
use std::sync::Arc;
use tracing::debug;

use crate::db::services::status_page_item_service;
use crate::web::models::status_page_item_models::{StatusPageItemDto, StatusPageItemPayload};
use crate::web::models::{ListParams, SearchParams};
use crate::web::{AppError, AppState};

pub fn create_status_page_item_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(list_status_page_items).post(create_status_page_item))
        .route("/_search", get(search_status_page_items))
        .route(
            "/{id}",
            get(get_status_page_item)
                .put(update_status_page_item)
                .patch(partial_update_status_page_item)
                .delete(delete_status_page_item),
        )
}

#[axum::debug_handler]
async fn create_status_page_item(
    State(app_state): State<Arc<AppState>>,
    Json(payload): Json<StatusPageItemPayload>,
) -> Result<(StatusCode, [(header::HeaderName, String); 1], Json<StatusPageItemDto>), AppError> {
    debug!("REST request to save StatusPageItem");
    let saved = status_page_item_service::create_status_page_item(
        &app_state.db,
        &app_state.search,
        payload,
    )
    .await?;
    let location = format!("/api/status-page-items/{}", saved.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(saved.into()),
    ))
}

#[axum::debug_handler]
async fn list_status_page_items(
    State(app_state): State<Arc<AppState>>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<StatusPageItemDto>>, AppError> {
    debug!("REST request to get all StatusPageItems");
    let items =
        status_page_item_service::list_status_page_items(&app_state.db, &params.sort).await?;
    Ok(Json(items.into_iter().map(Into::into).collect()))
}

#[axum::debug_handler]
async fn get_status_page_item(
    State(app_state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<StatusPageItemDto>, AppError> {
    debug!(id, "REST request to get StatusPageItem");
    let item = status_page_item_service::get_status_page_item(&app_state.db, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("statusPageItem {id} not found")))?;
    Ok(Json(item.into()))
}

#[axum::debug_handler]
async fn update_status_page_item(
    State(app_state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(payload): Json<StatusPageItemPayload>,
) -> Result<Json<StatusPageItemDto>, AppError> {
    debug!(id, "REST request to update StatusPageItem");
    let updated = status_page_item_service::update_status_page_item(
        &app_state.db,
        &app_state.search,
        id,
        payload,
    )
    .await?;
    Ok(Json(updated.into()))
}

#[axum::debug_handler]
async fn partial_update_status_page_item(
    State(app_state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(payload): Json<StatusPageItemPayload>,
) -> Result<Json<StatusPageItemDto>, AppError> {
    debug!(id, "REST request to partial update StatusPageItem");
    let updated = status_page_item_service::partial_update_status_page_item(
        &app_state.db,
        &app_state.search,
        id,
        payload,
    )
    .await?;
    Ok(Json(updated.into()))
}

#[axum::debug_handler]
async fn delete_status_page_item(
    State(app_state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    debug!(id, "REST request to delete StatusPageItem");
    status_page_item_service::delete_status_page_item(&app_state.db, &app_state.search, id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

#[axum::debug_handler]
async fn search_status_page_items(
    State(app_state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<StatusPageItemDto>>, AppError> {
    debug!(query = %params.query, "REST request to search StatusPageItems");
    let items = status_page_item_service::search_status_page_items(
        &app_state.db,
        &app_state.search,
        &params.query,
    )
    .await?;
    Ok(Json(items.into_iter().map(Into::into).collect()))
}
