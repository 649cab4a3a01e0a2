use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "http_monitors")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub method: String,
    pub monitor_type: String,
    pub url: Option<String>,
    pub interval_seconds: i32,
    pub timeout_seconds: i32,
    pub retry_count: i32,
    pub retry_delay_seconds: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::agent_monitor::Entity")]
    AgentMonitor,
}

impl Related<super::agent_monitor::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AgentMonitor.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
