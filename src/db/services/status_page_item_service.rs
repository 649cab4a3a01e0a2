//! Data access for status page entries.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};

use crate::db::entities::{prelude::*, status_page_item};
use crate::db::services::{
    check_body_id, parse_sort, reject_client_id, require, require_ref, require_text,
};
use crate::search::{SearchIndex, kind};
use crate::web::error::AppError;
use crate::web::models::status_page_item_models::StatusPageItemPayload;

fn document(model: &status_page_item::Model) -> String {
    format!("{} {}", model.item_type, model.item_id)
}

fn sort_column(prop: &str) -> status_page_item::Column {
    match prop {
        "itemType" => status_page_item::Column::ItemType,
        "itemId" => status_page_item::Column::ItemId,
        "displayOrder" => status_page_item::Column::DisplayOrder,
        "createdAt" => status_page_item::Column::CreatedAt,
        _ => status_page_item::Column::Id,
    }
}

async fn ensure_status_page_exists(db: &DatabaseConnection, id: i64) -> Result<(), AppError> {
    StatusPage::find_by_id(id)
        .one(db)
        .await?
        .map(|_| ())
        .ok_or_else(|| {
            AppError::InvalidInput(format!("Referenced statusPage {id} does not exist"))
        })
}

pub async fn create_status_page_item(
    db: &DatabaseConnection,
    index: &SearchIndex,
    payload: StatusPageItemPayload,
) -> Result<status_page_item::Model, AppError> {
    reject_client_id(payload.id, "statusPageItem")?;
    let item_type = require_text(payload.item_type, "itemType")?;
    let item_id = require(payload.item_id, "itemId")?;
    let status_page_id = require_ref(payload.status_page, "statusPage")?;
    ensure_status_page_exists(db, status_page_id).await?;

    let new_item = status_page_item::ActiveModel {
        item_type: Set(item_type),
        item_id: Set(item_id),
        display_order: Set(payload.display_order),
        created_at: Set(payload.created_at.unwrap_or_else(Utc::now)),
        status_page_id: Set(status_page_id),
        ..Default::default()
    };

    let saved = new_item.insert(db).await?;
    index.index(kind::STATUS_PAGE_ITEM, saved.id, &document(&saved));
    Ok(saved)
}

pub async fn list_status_page_items(
    db: &DatabaseConnection,
    sort: &Option<String>,
) -> Result<Vec<status_page_item::Model>, AppError> {
    let (prop, order) = parse_sort(sort);
    Ok(StatusPageItem::find()
        .order_by(sort_column(prop), order)
        .all(db)
        .await?)
}

pub async fn get_status_page_item(
    db: &DatabaseConnection,
    id: i64,
) -> Result<Option<status_page_item::Model>, AppError> {
    Ok(StatusPageItem::find_by_id(id).one(db).await?)
}

pub async fn update_status_page_item(
    db: &DatabaseConnection,
    index: &SearchIndex,
    id: i64,
    payload: StatusPageItemPayload,
) -> Result<status_page_item::Model, AppError> {
    check_body_id(id, payload.id, "statusPageItem")?;
    let existing = StatusPageItem::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| AppError::InvalidInput(format!("statusPageItem {id} not found")))?;

    let item_type = require_text(payload.item_type, "itemType")?;
    let item_id = require(payload.item_id, "itemId")?;
    let status_page_id = require_ref(payload.status_page, "statusPage")?;
    ensure_status_page_exists(db, status_page_id).await?;

    let created_at = payload.created_at.unwrap_or(existing.created_at);
    let mut model: status_page_item::ActiveModel = existing.into();
    model.item_type = Set(item_type);
    model.item_id = Set(item_id);
    model.display_order = Set(payload.display_order);
    model.created_at = Set(created_at);
    model.status_page_id = Set(status_page_id);

    let updated = model.update(db).await?;
    index.index(kind::STATUS_PAGE_ITEM, updated.id, &document(&updated));
    Ok(updated)
}

pub async fn partial_update_status_page_item(
    db: &DatabaseConnection,
    index: &SearchIndex,
    id: i64,
    payload: StatusPageItemPayload,
) -> Result<status_page_item::Model, AppError> {
    check_body_id(id, payload.id, "statusPageItem")?;
    let existing = StatusPageItem::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| AppError::InvalidInput(format!("statusPageItem {id} not found")))?;

    let mut model: status_page_item::ActiveModel = existing.into();
    if payload.item_type.is_some() {
        model.item_type = Set(require_text(payload.item_type, "itemType")?);
    }
    if let Some(item_id) = payload.item_id {
        model.item_id = Set(item_id);
    }
    if let Some(display_order) = payload.display_order {
        model.display_order = Set(Some(display_order));
    }
    if let Some(created_at) = payload.created_at {
        model.created_at = Set(created_at);
    }
    if let Some(page_ref) = payload.status_page {
        let status_page_id = require(page_ref.id, "statusPage")?;
        ensure_status_page_exists(db, status_page_id).await?;
        model.status_page_id = Set(status_page_id);
    }

    let updated = model.update(db).await?;
    index.index(kind::STATUS_PAGE_ITEM, updated.id, &document(&updated));
    Ok(updated)
}

pub async fn delete_status_page_item(
    db: &DatabaseConnection,
    index: &SearchIndex,
    id: i64,
) -> Result<(), AppError> {
    StatusPageItem::delete_by_id(id).exec(db).await?;
    index.remove(kind::STATUS_PAGE_ITEM, id);
    Ok(())
}

/// Re-derives every index document from the primary store.
pub async fn reindex_status_page_items(
    db: &DatabaseConnection,
    index: &SearchIndex,
) -> Result<(), AppError> {
    for model in StatusPageItem::find().all(db).await? {
        index.index(kind::STATUS_PAGE_ITEM, model.id, &document(&model));
    }
    Ok(())
}

pub async fn search_status_page_items(
    db: &DatabaseConnection,
    index: &SearchIndex,
    query: &str,
) -> Result<Vec<status_page_item::Model>, AppError> {
    let ids = index.query(kind::STATUS_PAGE_ITEM, query);
    if ids.is_empty() {
        return Ok(Vec::new());
    }
    Ok(StatusPageItem::find()
        .filter(status_page_item::Column::Id.is_in(ids))
        .order_by_asc(status_page_item::Column::Id)
        .all(db)
        .await?)
}
