use axum::extract::State;
use axum::Json;

use crate::api::crud::process_create;
use crate::api::extract::JsonBody;
use crate::app::AppState;
use crate::db::models::{Contact, InsertOneAck, Record};
use crate::error::AppError;

/// `POST /contacts`, the public contact form.
pub async fn create_contact_handler(
    State(state): State<AppState>,
    JsonBody(contact): JsonBody<Contact>,
) -> Result<Json<InsertOneAck>, AppError> {
    let ack = process_create(state.contacts.as_ref(), contact).await?;
    tracing::info!(id = %ack.inserted_id, "Contact message received");
    Ok(Json(ack))
}

/// `GET /contacts`
pub async fn list_contacts_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<Record<Contact>>>, AppError> {
    Ok(Json(state.contacts.list().await?))
}
