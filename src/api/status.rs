use axum::extract::State;

use crate::app::AppState;

/// `GET /`
pub async fn root_handler(State(state): State<AppState>) -> String {
    format!("Portfolio server is running on {}", state.port)
}
