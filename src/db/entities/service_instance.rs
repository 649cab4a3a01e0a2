use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Placement of a monitored service on a concrete instance (one open port).
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "service_instances")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub port: i32,
    pub is_active: Option<bool>,
    pub created_at: ChronoDateTimeUtc,
    pub updated_at: ChronoDateTimeUtc,
    pub instance_id: i64,
    pub monitored_service_id: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::instance::Entity",
        from = "Column::InstanceId",
        to = "super::instance::Column::Id",
        on_delete = "Cascade"
    )]
    Instance,

    #[sea_orm(
        belongs_to = "super::monitored_service::Entity",
        from = "Column::MonitoredServiceId",
        to = "super::monitored_service::Column::Id",
        on_delete = "Cascade"
    )]
    MonitoredService,
}

impl Related<super::instance::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Instance.def()
    }
}

impl Related<super::monitored_service::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MonitoredService.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
