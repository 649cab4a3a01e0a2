use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "agents")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub hostname: Option<String>,
    pub ip_address: Option<String>,
    pub agent_version: Option<String>,
    pub status: Option<String>,
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
