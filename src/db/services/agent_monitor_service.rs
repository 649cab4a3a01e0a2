//! Data access for agent/monitor assignments.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};

use crate::db::entities::{agent_monitor, prelude::*};
use crate::db::services::{
    check_body_id, parse_sort, reject_client_id, require, require_ref, require_text,
};
use crate::search::{SearchIndex, kind};
use crate::web::error::AppError;
use crate::web::models::agent_monitor_models::AgentMonitorPayload;

/// Text document used by the search index for one assignment.
fn document(model: &agent_monitor::Model) -> String {
    let status = if model.active { "active" } else { "inactive" };
    format!("{} {} {}", model.created_by, model.last_modified_by, status)
}

fn sort_column(prop: &str) -> agent_monitor::Column {
    match prop {
        "active" => agent_monitor::Column::Active,
        "createdBy" => agent_monitor::Column::CreatedBy,
        "createdDate" => agent_monitor::Column::CreatedDate,
        "lastModifiedBy" => agent_monitor::Column::LastModifiedBy,
        "lastModifiedDate" => agent_monitor::Column::LastModifiedDate,
        _ => agent_monitor::Column::Id,
    }
}

async fn ensure_agent_exists(db: &DatabaseConnection, id: i64) -> Result<(), AppError> {
    Agent::find_by_id(id)
        .one(db)
        .await?
        .map(|_| ())
        .ok_or_else(|| AppError::InvalidInput(format!("Referenced agent {id} does not exist")))
}

async fn ensure_monitor_exists(db: &DatabaseConnection, id: i64) -> Result<(), AppError> {
    HttpMonitor::find_by_id(id)
        .one(db)
        .await?
        .map(|_| ())
        .ok_or_else(|| AppError::InvalidInput(format!("Referenced monitor {id} does not exist")))
}

pub async fn create_agent_monitor(
    db: &DatabaseConnection,
    index: &SearchIndex,
    payload: AgentMonitorPayload,
) -> Result<agent_monitor::Model, AppError> {
    reject_client_id(payload.id, "agentMonitor")?;
    let active = require(payload.active, "active")?;
    let created_by = require_text(payload.created_by, "createdBy")?;
    let last_modified_by = require_text(payload.last_modified_by, "lastModifiedBy")?;
    let agent_id = require_ref(payload.agent, "agent")?;
    let monitor_id = require_ref(payload.monitor, "monitor")?;
    ensure_agent_exists(db, agent_id).await?;
    ensure_monitor_exists(db, monitor_id).await?;

    let now = Utc::now();
    let new_assignment = agent_monitor::ActiveModel {
        active: Set(active),
        created_by: Set(created_by),
        created_date: Set(payload.created_date.unwrap_or(now)),
        last_modified_by: Set(last_modified_by),
        last_modified_date: Set(payload.last_modified_date.unwrap_or(now)),
        agent_id: Set(agent_id),
        monitor_id: Set(monitor_id),
        ..Default::default()
    };

    let saved = new_assignment.insert(db).await?;
    index.index(kind::AGENT_MONITOR, saved.id, &document(&saved));
    Ok(saved)
}

pub async fn list_agent_monitors(
    db: &DatabaseConnection,
    sort: &Option<String>,
) -> Result<Vec<agent_monitor::Model>, AppError> {
    let (prop, order) = parse_sort(sort);
    Ok(AgentMonitor::find()
        .order_by(sort_column(prop), order)
        .all(db)
        .await?)
}

pub async fn get_agent_monitor(
    db: &DatabaseConnection,
    id: i64,
) -> Result<Option<agent_monitor::Model>, AppError> {
    Ok(AgentMonitor::find_by_id(id).one(db).await?)
}

/// Full replace. Audit fields keep their stored value when the body leaves
/// them out; the modification stamp always moves forward.
pub async fn update_agent_monitor(
    db: &DatabaseConnection,
    index: &SearchIndex,
    id: i64,
    payload: AgentMonitorPayload,
) -> Result<agent_monitor::Model, AppError> {
    check_body_id(id, payload.id, "agentMonitor")?;
    let existing = AgentMonitor::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| AppError::InvalidInput(format!("agentMonitor {id} not found")))?;

    let active = require(payload.active, "active")?;
    let created_by = require_text(payload.created_by, "createdBy")?;
    let last_modified_by = require_text(payload.last_modified_by, "lastModifiedBy")?;
    let agent_id = require_ref(payload.agent, "agent")?;
    let monitor_id = require_ref(payload.monitor, "monitor")?;
    ensure_agent_exists(db, agent_id).await?;
    ensure_monitor_exists(db, monitor_id).await?;

    let created_date = payload.created_date.unwrap_or(existing.created_date);
    let mut model: agent_monitor::ActiveModel = existing.into();
    model.active = Set(active);
    model.created_by = Set(created_by);
    model.created_date = Set(created_date);
    model.last_modified_by = Set(last_modified_by);
    model.last_modified_date = Set(payload.last_modified_date.unwrap_or_else(Utc::now));
    model.agent_id = Set(agent_id);
    model.monitor_id = Set(monitor_id);

    let updated = model.update(db).await?;
    index.index(kind::AGENT_MONITOR, updated.id, &document(&updated));
    Ok(updated)
}

/// RFC 7396 merge-patch: only fields present in the body overwrite.
pub async fn partial_update_agent_monitor(
    db: &DatabaseConnection,
    index: &SearchIndex,
    id: i64,
    payload: AgentMonitorPayload,
) -> Result<agent_monitor::Model, AppError> {
    check_body_id(id, payload.id, "agentMonitor")?;
    let existing = AgentMonitor::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| AppError::InvalidInput(format!("agentMonitor {id} not found")))?;

    let mut model: agent_monitor::ActiveModel = existing.into();
    if let Some(active) = payload.active {
        model.active = Set(active);
    }
    if payload.created_by.is_some() {
        model.created_by = Set(require_text(payload.created_by, "createdBy")?);
    }
    if let Some(created_date) = payload.created_date {
        model.created_date = Set(created_date);
    }
    if payload.last_modified_by.is_some() {
        model.last_modified_by = Set(require_text(payload.last_modified_by, "lastModifiedBy")?);
    }
    if let Some(last_modified_date) = payload.last_modified_date {
        model.last_modified_date = Set(last_modified_date);
    }
    if let Some(agent_ref) = payload.agent {
        let agent_id = require(agent_ref.id, "agent")?;
        ensure_agent_exists(db, agent_id).await?;
        model.agent_id = Set(agent_id);
    }
    if let Some(monitor_ref) = payload.monitor {
        let monitor_id = require(monitor_ref.id, "monitor")?;
        ensure_monitor_exists(db, monitor_id).await?;
        model.monitor_id = Set(monitor_id);
    }

    let updated = model.update(db).await?;
    index.index(kind::AGENT_MONITOR, updated.id, &document(&updated));
    Ok(updated)
}

/// Idempotent: deleting an absent row is not an error.
pub async fn delete_agent_monitor(
    db: &DatabaseConnection,
    index: &SearchIndex,
    id: i64,
) -> Result<(), AppError> {
    AgentMonitor::delete_by_id(id).exec(db).await?;
    index.remove(kind::AGENT_MONITOR, id);
    Ok(())
}

/// Re-derives every index document from the primary store.
pub async fn reindex_agent_monitors(
    db: &DatabaseConnection,
    index: &SearchIndex,
) -> Result<(), AppError> {
    for model in AgentMonitor::find().all(db).await? {
        index.index(kind::AGENT_MONITOR, model.id, &document(&model));
    }
    Ok(())
}

pub async fn search_agent_monitors(
    db: &DatabaseConnection,
    index: &SearchIndex,
    query: &str,
) -> Result<Vec<agent_monitor::Model>, AppError> {
    let ids = index.query(kind::AGENT_MONITOR, query);
    if ids.is_empty() {
        return Ok(Vec::new());
    }
    Ok(AgentMonitor::find()
        .filter(agent_monitor::Column::Id.is_in(ids))
        .order_by_asc(agent_monitor::Column::Id)
        .all(db)
        .await?)
}
