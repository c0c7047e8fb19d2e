use axum::extract::{Path, State};
use axum::Json;

use crate::api::crud::{process_create, process_get};
use crate::api::extract::JsonBody;
use crate::app::AppState;
use crate::db::models::{Blog, InsertOneAck, Record};
use crate::error::AppError;

pub async fn create_blog_handler(
    State(state): State<AppState>,
    JsonBody(blog): JsonBody<Blog>,
) -> Result<Json<InsertOneAck>, AppError> {
    let ack = process_create(state.blogs.as_ref(), blog).await?;
    tracing::info!(id = %ack.inserted_id, "Blog post created");
    Ok(Json(ack))
}

pub async fn list_blogs_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<Record<Blog>>>, AppError> {
    Ok(Json(state.blogs.list().await?))
}

pub async fn get_blog_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Record<Blog>>, AppError> {
    Ok(Json(process_get(state.blogs.as_ref(), &id, "Blog").await?))
}
