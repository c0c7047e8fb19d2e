use axum::extract::{Path, State};
use axum::Json;

use crate::api::crud::{process_create, process_delete};
use crate::api::extract::JsonBody;
use crate::app::AppState;
use crate::db::models::{DeleteAck, InsertOneAck, Record, Skill};
use crate::error::AppError;

/// `GET /skills`
pub async fn list_skills_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<Record<Skill>>>, AppError> {
    Ok(Json(state.skills.list().await?))
}

/// `POST /skills`
pub async fn create_skill_handler(
    State(state): State<AppState>,
    JsonBody(skill): JsonBody<Skill>,
) -> Result<Json<InsertOneAck>, AppError> {
    let ack = process_create(state.skills.as_ref(), skill).await?;
    tracing::info!(id = %ack.inserted_id, "Skill created");
    Ok(Json(ack))
}

/// `DELETE /skills/{id}`
pub async fn delete_skill_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteAck>, AppError> {
    let ack = process_delete(state.skills.as_ref(), &id).await?;
    tracing::info!(%id, deleted = ack.deleted_count, "Skill delete requested");
    Ok(Json(ack))
}
