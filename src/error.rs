use thiserror::Error;

/// Message returned for every rejected bearer token.
pub const FORBIDDEN_ACCESS: &str = "forbidden access";

/// Application-wide error types.
///
/// Every handler funnels its failures through this enum so that the
/// status code and body shape are decided in one place (`api::errors`).
#[derive(Debug, Error)]
pub enum AppError {
    /// The database driver or server failed.
    #[error("Database error: {0}")]
    Database(String),

    /// Missing or invalid bearer token.
    #[error("Authentication error: {0}")]
    Auth(String),

    #[error("Not found: {0}")]
    NotFound(String),

    /// The request was malformed: bad identifier, schema violation, empty patch.
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// The uniform rejection used by the bearer-token middleware.
    pub fn forbidden() -> Self {
        AppError::Auth(FORBIDDEN_ACCESS.to_string())
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::Config(err.to_string())
    }
}
