use axum::extract::{Path, State};
use axum::Json;

use crate::api::crud::{process_create, process_delete, process_get};
use crate::api::extract::JsonBody;
use crate::app::AppState;
use crate::db::models::{DeleteAck, InsertOneAck, Project, ProjectPatch, Record, UpdateOutcome};
use crate::db::object_id::parse_object_id;
use crate::db::repository::Repository;
use crate::error::AppError;

/// List all projects; an empty collection is reported as `NotFound`.
pub async fn process_list_projects(
    repo: &dyn Repository<Project>,
) -> Result<Vec<Record<Project>>, AppError> {
    let projects = repo.list().await?;
    if projects.is_empty() {
        return Err(AppError::NotFound("No projects found".into()));
    }
    Ok(projects)
}

/// Apply a partial update to a project.
///
/// Reports `success: false` both when the project does not exist and when
/// the patch leaves it unchanged.
pub async fn process_update_project(
    repo: &dyn Repository<Project>,
    raw_id: &str,
    patch: ProjectPatch,
) -> Result<UpdateOutcome, AppError> {
    let id = parse_object_id(raw_id)?;
    patch.validate()?;

    let ack = repo.update_by_id(id, patch.to_set_document()?).await?;

    if ack.modified_count == 1 {
        tracing::info!(%id, "Project updated");
        Ok(UpdateOutcome {
            success: true,
            message: "Project updated successfully".to_string(),
        })
    } else {
        Ok(UpdateOutcome {
            success: false,
            message: "Project not found or no changes made".to_string(),
        })
    }
}

/// `GET /projects`
pub async fn list_projects_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<Record<Project>>>, AppError> {
    let projects = process_list_projects(state.projects.as_ref()).await?;
    Ok(Json(projects))
}

/// `POST /projects`
pub async fn create_project_handler(
    State(state): State<AppState>,
    JsonBody(project): JsonBody<Project>,
) -> Result<Json<InsertOneAck>, AppError> {
    let ack = process_create(state.projects.as_ref(), project).await?;
    tracing::info!(id = %ack.inserted_id, "Project created");
    Ok(Json(ack))
}

/// `GET /projects/{id}`
pub async fn get_project_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Record<Project>>, AppError> {
    let project = process_get(state.projects.as_ref(), &id, "Project").await?;
    Ok(Json(project))
}

/// `PUT /projects/{id}`
pub async fn update_project_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(patch): JsonBody<ProjectPatch>,
) -> Result<Json<UpdateOutcome>, AppError> {
    let outcome = process_update_project(state.projects.as_ref(), &id, patch).await?;
    Ok(Json(outcome))
}

/// `DELETE /projects/{id}`
pub async fn delete_project_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteAck>, AppError> {
    let ack = process_delete(state.projects.as_ref(), &id).await?;
    tracing::info!(%id, deleted = ack.deleted_count, "Project delete requested");
    Ok(Json(ack))
}
