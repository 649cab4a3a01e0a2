use serde::{Deserialize, Serialize};

pub mod agent_monitor_models;
pub mod catalog_models;
pub mod service_instance_models;
pub mod status_page_item_models;

/// Wire form of a to-one relation: `{"id": 7}`. The id is optional on the
/// way in so its absence can be reported as a validation error instead of
/// a deserialization failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntityRef {
    pub id: Option<i64>,
}

impl EntityRef {
    pub fn of(id: i64) -> Self {
        EntityRef { id: Some(id) }
    }
}

/// Query parameters accepted by list endpoints, e.g. `?sort=createdBy,desc`.
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub sort: Option<String>,
}

/// Query parameter of the `_search` endpoints.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub query: String,
}
