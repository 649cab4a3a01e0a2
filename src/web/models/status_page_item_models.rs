use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::db::entities::status_page_item;
use crate::web::models::EntityRef;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusPageItemPayload {
    pub id: Option<i64>,
    pub item_type: Option<String>,
    pub item_id: Option<i64>,
    pub display_order: Option<i32>,
    pub created_at: Option<DateTime<Utc>>,
    pub status_page: Option<EntityRef>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusPageItemDto {
    pub id: i64,
    pub item_type: String,
    pub item_id: i64,
    pub display_order: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub status_page: EntityRef,
}

impl From<status_page_item::Model> for StatusPageItemDto {
    fn from(model: status_page_item::Model) -> Self {
        StatusPageItemDto {
            id: model.id,
            item_type: model.item_type,
            item_id: model.item_id,
            display_order: model.display_order,
            created_at: model.created_at,
            status_page: EntityRef::of(model.status_page_id),
        }
    }
}
