use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// One entry on a status page. `item_type` + `item_id` form a loose
/// polymorphic reference into the catalog (service, instance, monitor...),
/// so there is no foreign key for them.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "status_page_items")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub item_type: String,
    pub item_id: i64,
    pub display_order: Option<i32>,
    pub created_at: ChronoDateTimeUtc,
    pub status_page_id: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::status_page::Entity",
        from = "Column::StatusPageId",
        to = "super::status_page::Column::Id",
        on_delete = "Cascade"
    )]
    StatusPage,
}

impl Related<super::status_page::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StatusPage.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
