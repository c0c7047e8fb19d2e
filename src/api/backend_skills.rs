use axum::extract::State;
use axum::Json;

use crate::api::crud::process_create_many;
use crate::api::extract::JsonBody;
use crate::app::AppState;
use crate::db::models::{InsertManyAck, Record, Skill};
use crate::error::AppError;

/// `POST /backendskills`
///
/// Takes a JSON array of skills and stores them in one bulk insert.
pub async fn create_backend_skills_handler(
    State(state): State<AppState>,
    JsonBody(skills): JsonBody<Vec<Skill>>,
) -> Result<Json<InsertManyAck>, AppError> {
    let ack = process_create_many(state.backend_skills.as_ref(), skills).await?;
    tracing::info!(count = ack.inserted_count, "Backend skills created");
    Ok(Json(ack))
}

/// `GET /backendskills`
pub async fn list_backend_skills_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<Record<Skill>>>, AppError> {
    Ok(Json(state.backend_skills.list().await?))
}
