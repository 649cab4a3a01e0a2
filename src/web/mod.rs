use axum::{Router, http::Method, routing::get};
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use crate::search::SearchIndex;
use crate::web::routes::{
    agent_monitor_routes, catalog_routes, service_instance_routes, status_page_item_routes,
};

pub mod error;
pub mod models;
pub mod routes;

pub use error::AppError;

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub search: Arc<SearchIndex>,
}

async fn health_check_handler() -> &'static str {
    "OK"
}

pub fn create_axum_router(db: DatabaseConnection, search: Arc<SearchIndex>) -> Router {
    let app_state = Arc::new(AppState { db, search });

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(vec![
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(Any);

    Router::new()
        .route("/api/health", get(health_check_handler))
        .nest(
            "/api/agent-monitors",
            agent_monitor_routes::create_agent_monitor_router(),
        )
        .nest(
            "/api/service-instances",
            service_instance_routes::create_service_instance_router(),
        )
        .nest(
            "/api/status-page-items",
            status_page_item_routes::create_status_page_item_router(),
        )
        .nest("/api/agents", catalog_routes::create_agent_router())
        .nest(
            "/api/http-monitors",
            catalog_routes::create_http_monitor_router(),
        )
        .nest("/api/instances", catalog_routes::create_instance_router())
        .nest(
            "/api/monitored-services",
            catalog_routes::create_monitored_service_router(),
        )
        .nest(
            "/api/status-pages",
            catalog_routes::create_status_page_router(),
        )
        .with_state(app_state)
        .layer(cors)
}
