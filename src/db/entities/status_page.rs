use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "status_pages")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    #[sea_orm(unique)]
    pub slug: String,
    pub description: Option<String>,
    pub is_public: bool,
    pub is_active: Option<bool>,
    pub created_at: ChronoDateTimeUtc,
    pub updated_at: ChronoDateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::status_page_item::Entity")]
    StatusPageItem,
}

impl Related<super::status_page_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StatusPageItem.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
