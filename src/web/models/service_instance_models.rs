use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::db::entities::service_instance;
use crate::web::models::EntityRef;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceInstancePayload {
    pub id: Option<i64>,
    pub port: Option<i32>,
    pub is_active: Option<bool>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub instance: Option<EntityRef>,
    pub monitored_service: Option<EntityRef>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceInstanceDto {
    pub id: i64,
    pub port: i32,
    pub is_active: Option<bool>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub instance: EntityRef,
    pub monitored_service: EntityRef,
}

impl From<service_instance::Model> for ServiceInstanceDto {
    fn from(model: service_instance::Model) -> Self {
        ServiceInstanceDto {
            id: model.id,
            port: model.port,
            is_active: model.is_active,
            created_at: model.created_at,
            updated_at: model.updated_at,
            instance: EntityRef::of(model.instance_id),
            monitored_service: EntityRef::of(model.monitored_service_id),
        }
    }
}
