//! The `services` module provides a high-level API for interacting with the
//! database. It encapsulates the query logic, the required-field validation
//! of the REST contract and the write-through maintenance of the search
//! index, so the HTTP handlers stay thin.
//!
//! One sub-module per primary resource, plus `catalog_service` for the
//! referenced parent resources.

use sea_orm::Order;

use crate::web::error::AppError;
use crate::web::models::EntityRef;

pub mod agent_monitor_service;
pub mod catalog_service;
pub mod service_instance_service;
pub mod status_page_item_service;

pub use agent_monitor_service::*;
pub use catalog_service::*;
pub use service_instance_service::*;
pub use status_page_item_service::*;

/// Warms the search index from the primary store. The index is an
/// in-process cache, so a restarted server rebuilds it before serving.
pub async fn rebuild_search_index(
    db: &sea_orm::DatabaseConnection,
    index: &crate::search::SearchIndex,
) -> Result<(), AppError> {
    agent_monitor_service::reindex_agent_monitors(db, index).await?;
    service_instance_service::reindex_service_instances(db, index).await?;
    status_page_item_service::reindex_status_page_items(db, index).await?;
    Ok(())
}

pub(crate) fn require<T>(value: Option<T>, field: &str) -> Result<T, AppError> {
    value.ok_or_else(|| AppError::InvalidInput(format!("Field '{field}' is required")))
}

pub(crate) fn require_text(value: Option<String>, field: &str) -> Result<String, AppError> {
    let value = require(value, field)?;
    if value.trim().is_empty() {
        return Err(AppError::InvalidInput(format!(
            "Field '{field}' must not be blank"
        )));
    }
    Ok(value)
}

/// Unwraps a relation ref down to the referenced id.
pub(crate) fn require_ref(value: Option<EntityRef>, field: &str) -> Result<i64, AppError> {
    require(require(value, field)?.id, field)
}

/// Creates must not carry a client-assigned id.
pub(crate) fn reject_client_id(id: Option<i64>, entity: &str) -> Result<(), AppError> {
    if id.is_some() {
        return Err(AppError::InvalidInput(format!(
            "A new {entity} cannot already have an ID"
        )));
    }
    Ok(())
}

/// Updates must carry a body id matching the path id.
pub(crate) fn check_body_id(path_id: i64, body_id: Option<i64>, entity: &str) -> Result<(), AppError> {
    match body_id {
        None => Err(AppError::InvalidInput(format!("Invalid id: {entity} body has no id"))),
        Some(id) if id != path_id => Err(AppError::InvalidInput(format!(
            "Invalid ID: {entity} body id {id} does not match path id {path_id}"
        ))),
        Some(_) => Ok(()),
    }
}

/// Splits a `?sort=prop,direction` value; direction defaults to ascending.
pub(crate) fn parse_sort(sort: &Option<String>) -> (&str, Order) {
    match sort.as_deref() {
        Some(value) => {
            let mut parts = value.splitn(2, ',');
            let prop = parts.next().unwrap_or("id");
            let order = match parts.next() {
                Some("desc") => Order::Desc,
                _ => Order::Asc,
            };
            (prop, order)
        }
        None => ("id", Order::Asc),
    }
}
