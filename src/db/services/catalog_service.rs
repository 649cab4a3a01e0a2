//! Data access for the catalog parents. These carry the reduced
//! create/list/get/delete surface; the primary resources reference them.

use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};

use crate::db::entities::{
    agent, http_monitor, instance, monitored_service, prelude::*, status_page,
};
use crate::db::services::{reject_client_id, require, require_text};
use crate::web::error::AppError;
use crate::web::models::catalog_models::{
    AgentPayload, HttpMonitorPayload, InstancePayload, MonitoredServicePayload, StatusPagePayload,
};
use chrono::Utc;

// --- Agents ---

pub async fn create_agent(
    db: &DatabaseConnection,
    payload: AgentPayload,
) -> Result<agent::Model, AppError> {
    reject_client_id(payload.id, "agent")?;
    let new_agent = agent::ActiveModel {
        name: Set(require_text(payload.name, "name")?),
        hostname: Set(payload.hostname),
        ip_address: Set(payload.ip_address),
        agent_version: Set(payload.agent_version),
        status: Set(payload.status),
        ..Default::default()
    };
    Ok(new_agent.insert(db).await?)
}

pub async fn list_agents(db: &DatabaseConnection) -> Result<Vec<agent::Model>, AppError> {
    Ok(Agent::find()
        .order_by_asc(agent::Column::Id)
        .all(db)
        .await?)
}

pub async fn get_agent(db: &DatabaseConnection, id: i64) -> Result<Option<agent::Model>, AppError> {
    Ok(Agent::find_by_id(id).one(db).await?)
}

pub async fn delete_agent(db: &DatabaseConnection, id: i64) -> Result<(), AppError> {
    Agent::delete_by_id(id).exec(db).await?;
    Ok(())
}

// --- HTTP monitors ---

pub async fn create_http_monitor(
    db: &DatabaseConnection,
    payload: HttpMonitorPayload,
) -> Result<http_monitor::Model, AppError> {
    reject_client_id(payload.id, "httpMonitor")?;
    let new_monitor = http_monitor::ActiveModel {
        name: Set(require_text(payload.name, "name")?),
        method: Set(require_text(payload.method, "method")?),
        monitor_type: Set(require_text(payload.monitor_type, "type")?),
        url: Set(payload.url),
        interval_seconds: Set(require(payload.interval_seconds, "intervalSeconds")?),
        timeout_seconds: Set(require(payload.timeout_seconds, "timeoutSeconds")?),
        retry_count: Set(require(payload.retry_count, "retryCount")?),
        retry_delay_seconds: Set(require(payload.retry_delay_seconds, "retryDelaySeconds")?),
        ..Default::default()
    };
    Ok(new_monitor.insert(db).await?)
}

pub async fn list_http_monitors(
    db: &DatabaseConnection,
) -> Result<Vec<http_monitor::Model>, AppError> {
    Ok(HttpMonitor::find()
        .order_by_asc(http_monitor::Column::Id)
        .all(db)
        .await?)
}

pub async fn get_http_monitor(
    db: &DatabaseConnection,
    id: i64,
) -> Result<Option<http_monitor::Model>, AppError> {
    Ok(HttpMonitor::find_by_id(id).one(db).await?)
}

pub async fn delete_http_monitor(db: &DatabaseConnection, id: i64) -> Result<(), AppError> {
    HttpMonitor::delete_by_id(id).exec(db).await?;
    Ok(())
}

// --- Instances ---

pub async fn create_instance(
    db: &DatabaseConnection,
    payload: InstancePayload,
) -> Result<instance::Model, AppError> {
    reject_client_id(payload.id, "instance")?;
    let new_instance = instance::ActiveModel {
        name: Set(require_text(payload.name, "name")?),
        hostname: Set(require_text(payload.hostname, "hostname")?),
        description: Set(payload.description),
        instance_type: Set(require_text(payload.instance_type, "instanceType")?),
        monitoring_type: Set(require_text(payload.monitoring_type, "monitoringType")?),
        ..Default::default()
    };
    Ok(new_instance.insert(db).await?)
}

pub async fn list_instances(db: &DatabaseConnection) -> Result<Vec<instance::Model>, AppError> {
    Ok(Instance::find()
        .order_by_asc(instance::Column::Id)
        .all(db)
        .await?)
}

pub async fn get_instance(
    db: &DatabaseConnection,
    id: i64,
) -> Result<Option<instance::Model>, AppError> {
    Ok(Instance::find_by_id(id).one(db).await?)
}

pub async fn delete_instance(db: &DatabaseConnection, id: i64) -> Result<(), AppError> {
    Instance::delete_by_id(id).exec(db).await?;
    Ok(())
}

// --- Monitored services ---

pub async fn create_monitored_service(
    db: &DatabaseConnection,
    payload: MonitoredServicePayload,
) -> Result<monitored_service::Model, AppError> {
    reject_client_id(payload.id, "monitoredService")?;
    let new_service = monitored_service::ActiveModel {
        name: Set(require_text(payload.name, "name")?),
        description: Set(payload.description),
        service_type: Set(require_text(payload.service_type, "serviceType")?),
        environment: Set(require_text(payload.environment, "environment")?),
        interval_seconds: Set(require(payload.interval_seconds, "intervalSeconds")?),
        timeout_ms: Set(require(payload.timeout_ms, "timeoutMs")?),
        retry_count: Set(require(payload.retry_count, "retryCount")?),
        is_active: Set(payload.is_active),
        ..Default::default()
    };
    Ok(new_service.insert(db).await?)
}

pub async fn list_monitored_services(
    db: &DatabaseConnection,
) -> Result<Vec<monitored_service::Model>, AppError> {
    Ok(MonitoredService::find()
        .order_by_asc(monitored_service::Column::Id)
        .all(db)
        .await?)
}

pub async fn get_monitored_service(
    db: &DatabaseConnection,
    id: i64,
) -> Result<Option<monitored_service::Model>, AppError> {
    Ok(MonitoredService::find_by_id(id).one(db).await?)
}

pub async fn delete_monitored_service(db: &DatabaseConnection, id: i64) -> Result<(), AppError> {
    MonitoredService::delete_by_id(id).exec(db).await?;
    Ok(())
}

// --- Status pages ---

pub async fn create_status_page(
    db: &DatabaseConnection,
    payload: StatusPagePayload,
) -> Result<status_page::Model, AppError> {
    reject_client_id(payload.id, "statusPage")?;
    let now = Utc::now();
    let new_page = status_page::ActiveModel {
        name: Set(require_text(payload.name, "name")?),
        slug: Set(require_text(payload.slug, "slug")?),
        description: Set(payload.description),
        is_public: Set(require(payload.is_public, "isPublic")?),
        is_active: Set(payload.is_active),
        created_at: Set(payload.created_at.unwrap_or(now)),
        updated_at: Set(payload.updated_at.unwrap_or(now)),
        ..Default::default()
    };
    Ok(new_page.insert(db).await?)
}

pub async fn list_status_pages(
    db: &DatabaseConnection,
) -> Result<Vec<status_page::Model>, AppError> {
    Ok(StatusPage::find()
        .order_by_asc(status_page::Column::Id)
        .all(db)
        .await?)
}

pub async fn get_status_page(
    db: &DatabaseConnection,
    id: i64,
) -> Result<Option<status_page::Model>, AppError> {
    Ok(StatusPage::find_by_id(id).one(db).await?)
}

pub async fn delete_status_page(db: &DatabaseConnection, id: i64) -> Result<(), AppError> {
    StatusPage::delete_by_id(id).exec(db).await?;
    Ok(())
}
