//! Data access for service placements (service on instance, one port).

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};

use crate::db::entities::{prelude::*, service_instance};
use crate::db::services::{check_body_id, parse_sort, reject_client_id, require, require_ref};
use crate::search::{SearchIndex, kind};
use crate::web::error::AppError;
use crate::web::models::service_instance_models::ServiceInstancePayload;

fn document(model: &service_instance::Model) -> String {
    let status = match model.is_active {
        Some(true) => "active",
        Some(false) => "inactive",
        None => "",
    };
    format!("{} {}", model.port, status)
}

fn sort_column(prop: &str) -> service_instance::Column {
    match prop {
        "port" => service_instance::Column::Port,
        "isActive" => service_instance::Column::IsActive,
        "createdAt" => service_instance::Column::CreatedAt,
        "updatedAt" => service_instance::Column::UpdatedAt,
        _ => service_instance::Column::Id,
    }
}

async fn ensure_instance_exists(db: &DatabaseConnection, id: i64) -> Result<(), AppError> {
    Instance::find_by_id(id)
        .one(db)
        .await?
        .map(|_| ())
        .ok_or_else(|| AppError::InvalidInput(format!("Referenced instance {id} does not exist")))
}

async fn ensure_service_exists(db: &DatabaseConnection, id: i64) -> Result<(), AppError> {
    MonitoredService::find_by_id(id)
        .one(db)
        .await?
        .map(|_| ())
        .ok_or_else(|| {
            AppError::InvalidInput(format!("Referenced monitoredService {id} does not exist"))
        })
}

pub async fn create_service_instance(
    db: &DatabaseConnection,
    index: &SearchIndex,
    payload: ServiceInstancePayload,
) -> Result<service_instance::Model, AppError> {
    reject_client_id(payload.id, "serviceInstance")?;
    let port = require(payload.port, "port")?;
    let instance_id = require_ref(payload.instance, "instance")?;
    let monitored_service_id = require_ref(payload.monitored_service, "monitoredService")?;
    ensure_instance_exists(db, instance_id).await?;
    ensure_service_exists(db, monitored_service_id).await?;

    let now = Utc::now();
    let new_placement = service_instance::ActiveModel {
        port: Set(port),
        is_active: Set(payload.is_active),
        created_at: Set(payload.created_at.unwrap_or(now)),
        updated_at: Set(payload.updated_at.unwrap_or(now)),
        instance_id: Set(instance_id),
        monitored_service_id: Set(monitored_service_id),
        ..Default::default()
    };

    let saved = new_placement.insert(db).await?;
    index.index(kind::SERVICE_INSTANCE, saved.id, &document(&saved));
    Ok(saved)
}

pub async fn list_service_instances(
    db: &DatabaseConnection,
    sort: &Option<String>,
) -> Result<Vec<service_instance::Model>, AppError> {
    let (prop, order) = parse_sort(sort);
    Ok(ServiceInstance::find()
        .order_by(sort_column(prop), order)
        .all(db)
        .await?)
}

pub async fn get_service_instance(
    db: &DatabaseConnection,
    id: i64,
) -> Result<Option<service_instance::Model>, AppError> {
    Ok(ServiceInstance::find_by_id(id).one(db).await?)
}

pub async fn update_service_instance(
    db: &DatabaseConnection,
    index: &SearchIndex,
    id: i64,
    payload: ServiceInstancePayload,
) -> Result<service_instance::Model, AppError> {
    check_body_id(id, payload.id, "serviceInstance")?;
    let existing = ServiceInstance::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| AppError::InvalidInput(format!("serviceInstance {id} not found")))?;

    let port = require(payload.port, "port")?;
    let instance_id = require_ref(payload.instance, "instance")?;
    let monitored_service_id = require_ref(payload.monitored_service, "monitoredService")?;
    ensure_instance_exists(db, instance_id).await?;
    ensure_service_exists(db, monitored_service_id).await?;

    let created_at = payload.created_at.unwrap_or(existing.created_at);
    let mut model: service_instance::ActiveModel = existing.into();
    model.port = Set(port);
    model.is_active = Set(payload.is_active);
    model.created_at = Set(created_at);
    model.updated_at = Set(payload.updated_at.unwrap_or_else(Utc::now));
    model.instance_id = Set(instance_id);
    model.monitored_service_id = Set(monitored_service_id);

    let updated = model.update(db).await?;
    index.index(kind::SERVICE_INSTANCE, updated.id, &document(&updated));
    Ok(updated)
}

pub async fn partial_update_service_instance(
    db: &DatabaseConnection,
    index: &SearchIndex,
    id: i64,
    payload: ServiceInstancePayload,
) -> Result<service_instance::Model, AppError> {
    check_body_id(id, payload.id, "serviceInstance")?;
    let existing = ServiceInstance::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| AppError::InvalidInput(format!("serviceInstance {id} not found")))?;

    let mut model: service_instance::ActiveModel = existing.into();
    if let Some(port) = payload.port {
        model.port = Set(port);
    }
    if let Some(is_active) = payload.is_active {
        model.is_active = Set(Some(is_active));
    }
    if let Some(created_at) = payload.created_at {
        model.created_at = Set(created_at);
    }
    if let Some(updated_at) = payload.updated_at {
        model.updated_at = Set(updated_at);
    }
    if let Some(instance_ref) = payload.instance {
        let instance_id = require(instance_ref.id, "instance")?;
        ensure_instance_exists(db, instance_id).await?;
        model.instance_id = Set(instance_id);
    }
    if let Some(service_ref) = payload.monitored_service {
        let monitored_service_id = require(service_ref.id, "monitoredService")?;
        ensure_service_exists(db, monitored_service_id).await?;
        model.monitored_service_id = Set(monitored_service_id);
    }

    let updated = model.update(db).await?;
    index.index(kind::SERVICE_INSTANCE, updated.id, &document(&updated));
    Ok(updated)
}

pub async fn delete_service_instance(
    db: &DatabaseConnection,
    index: &SearchIndex,
    id: i64,
) -> Result<(), AppError> {
    ServiceInstance::delete_by_id(id).exec(db).await?;
    index.remove(kind::SERVICE_INSTANCE, id);
    Ok(())
}

/// Re-derives every index document from the primary store.
pub async fn reindex_service_instances(
    db: &DatabaseConnection,
    index: &SearchIndex,
) -> Result<(), AppError> {
    for model in ServiceInstance::find().all(db).await? {
        index.index(kind::SERVICE_INSTANCE, model.id, &document(&model));
    }
    Ok(())
}

pub async fn search_service_instances(
    db: &DatabaseConnection,
    index: &SearchIndex,
    query: &str,
) -> Result<Vec<service_instance::Model>, AppError> {
    let ids = index.query(kind::SERVICE_INSTANCE, query);
    if ids.is_empty() {
        return Ok(Vec::new());
    }
    Ok(ServiceInstance::find()
        .filter(service_instance::Column::Id.is_in(ids))
        .order_by_asc(service_instance::Column::Id)
        .all(db)
        .await?)
}
