use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::api::extract::JsonBody;
use crate::app::AppState;
use crate::auth::token::Claims;
use crate::error::AppError;

/// Response from a successful token issuance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub token: String,
}

/// `POST /jwt`
///
/// Signs the JSON object in the body into a token valid for one hour.
/// Bodies that are not JSON objects are rejected by the extractor.
pub async fn issue_token_handler(
    State(state): State<AppState>,
    JsonBody(claims): JsonBody<Claims>,
) -> Result<Json<TokenResponse>, AppError> {
    let claim_names: Vec<&str> = claims.keys().map(String::as_str).collect();
    tracing::info!(claims = ?claim_names, "Issuing token");

    let token = state.tokens.issue(claims)?;
    Ok(Json(TokenResponse { token }))
}
