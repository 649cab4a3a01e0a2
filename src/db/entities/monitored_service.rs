use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "monitored_services")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub service_type: String,
    pub environment: String,
    pub interval_seconds: i32,
    pub timeout_ms: i32,
    pub retry_count: i32,
    pub is_active: Option<bool>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::service_instance::Entity")]
    ServiceInstance,
}

impl Related<super::service_instance::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ServiceInstance.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
