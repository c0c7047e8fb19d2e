use axum::extract::{Request, State};
use axum::http::header::AUTHORIZATION;
use axum::middleware::Next;
use axum::response::Response;

use crate::app::AppState;
use crate::auth::token::Claims;
use crate::error::AppError;

/// Decoded token claims, attached to the request once the bearer check passes.
#[derive(Debug, Clone)]
pub struct AuthClaims(pub Claims);

/// Extract the token from an `Authorization` header value.
///
/// The token is the second whitespace-separated part, as in `Bearer <token>`.
pub fn bearer_token(header: &str) -> Option<&str> {
    header.split_whitespace().nth(1)
}

/// Reject requests without a valid bearer token with 401 `forbidden access`.
///
/// On success the claims are stored in the request extensions as [`AuthClaims`].
pub async fn require_bearer(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let header = request
        .headers()
        .get(AUTHORIZATION)
        .ok_or_else(AppError::forbidden)?
        .to_str()
        .map_err(|_| AppError::forbidden())?;

    let token = bearer_token(header).ok_or_else(AppError::forbidden)?;
    let claims = state.tokens.verify(token)?;

    tracing::debug!(path = %request.uri().path(), "Bearer token accepted");
    request.extensions_mut().insert(AuthClaims(claims));

    Ok(next.run(request).await)
}
