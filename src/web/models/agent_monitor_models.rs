use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::db::entities::agent_monitor;
use crate::web::models::EntityRef;

/// Request body for create, full update and merge-patch. Every field is
/// optional at the wire level; the service layer decides which ones are
/// required for the operation at hand.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentMonitorPayload {
    pub id: Option<i64>,
    pub active: Option<bool>,
    pub created_by: Option<String>,
    pub created_date: Option<DateTime<Utc>>,
    pub last_modified_by: Option<String>,
    pub last_modified_date: Option<DateTime<Utc>>,
    pub agent: Option<EntityRef>,
    pub monitor: Option<EntityRef>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentMonitorDto {
    pub id: i64,
    pub active: bool,
    pub created_by: String,
    pub created_date: DateTime<Utc>,
    pub last_modified_by: String,
    pub last_modified_date: DateTime<Utc>,
    pub agent: EntityRef,
    pub monitor: EntityRef,
}

impl From<agent_monitor::Model> for AgentMonitorDto {
    fn from(model: agent_monitor::Model) -> Self {
        AgentMonitorDto {
            id: model.id,
            active: model.active,
            created_by: model.created_by,
            created_date: model.created_date,
            last_modified_by: model.last_modified_by,
            last_modified_date: model.last_modified_date,
            agent: EntityRef::of(model.agent_id),
            monitor: EntityRef::of(model.monitor_id),
        }
    }
}
