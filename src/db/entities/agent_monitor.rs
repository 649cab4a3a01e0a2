use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Assignment of an HTTP monitor to the agent that executes it, with the
/// audit fields the original schema tracked per assignment.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "agent_monitors")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub active: bool,
    pub created_by: String,
    pub created_date: ChronoDateTimeUtc,
    pub last_modified_by: String,
    pub last_modified_date: ChronoDateTimeUtc,
    pub agent_id: i64,
    pub monitor_id: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::agent::Entity",
        from = "Column::AgentId",
        to = "super::agent::Column::Id",
        on_delete = "Cascade"
    )]
    Agent,

    #[sea_orm(
        belongs_to = "super::http_monitor::Entity",
        from = "Column::MonitorId",
        to = "super::http_monitor::Column::Id",
        on_delete = "Cascade"
    )]
    HttpMonitor,
}

impl Related<super::agent::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Agent.def()
    }
}

impl Related<super::http_monitor::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::HttpMonitor.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
