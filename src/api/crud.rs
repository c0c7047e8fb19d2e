use crate::db::models::{DeleteAck, Entity, InsertManyAck, InsertOneAck, Record};
use crate::db::object_id::parse_object_id;
use crate::db::repository::Repository;
use crate::error::AppError;

/// Validate and insert a single document.
///
/// This and the other `process_*` functions hold the collection logic shared
/// by every resource, separate from the axum handlers.
pub async fn process_create<T: Entity>(
    repo: &dyn Repository<T>,
    item: T,
) -> Result<InsertOneAck, AppError> {
    item.validate()?;
    repo.insert_one(item).await
}

/// Validate every document, then insert them all at once.
///
/// Nothing is written if any item is invalid.
pub async fn process_create_many<T: Entity>(
    repo: &dyn Repository<T>,
    items: Vec<T>,
) -> Result<InsertManyAck, AppError> {
    if items.is_empty() {
        return Err(AppError::BadRequest("Expected at least one item".into()));
    }

    for (index, item) in items.iter().enumerate() {
        item.validate().map_err(|e| match e {
            AppError::BadRequest(msg) => AppError::BadRequest(format!("item {index}: {msg}")),
            other => other,
        })?;
    }

    repo.insert_many(items).await
}

/// Fetch one document by the identifier found in the path.
pub async fn process_get<T: Entity>(
    repo: &dyn Repository<T>,
    raw_id: &str,
    kind: &str,
) -> Result<Record<T>, AppError> {
    let id = parse_object_id(raw_id)?;

    repo.find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("{kind} '{raw_id}' not found")))
}

/// Delete one document by the identifier found in the path.
pub async fn process_delete<T: Entity>(
    repo: &dyn Repository<T>,
    raw_id: &str,
) -> Result<DeleteAck, AppError> {
    let id = parse_object_id(raw_id)?;
    repo.delete_by_id(id).await
}
