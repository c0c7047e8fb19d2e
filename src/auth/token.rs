use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::error::AppError;

/// Claims carried inside a token: whatever JSON object the client signed,
/// plus `iat` and `exp`.
pub type Claims = serde_json::Map<String, serde_json::Value>;

/// Lifetime of an issued token.
pub const TOKEN_TTL_SECS: i64 = 3600;

/// Signs and verifies HS256 tokens with the shared secret.
#[derive(Clone)]
pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl: Duration,
}

impl TokenService {
    pub fn new(secret: &str) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            ttl: Duration::seconds(TOKEN_TTL_SECS),
        }
    }

    /// Sign `claims` with an expiry of one hour from now.
    pub fn issue(&self, claims: Claims) -> Result<String, AppError> {
        self.issue_at(claims, Utc::now())
    }

    /// Sign `claims` as if issued at `issued_at`.
    ///
    /// A client-supplied `exp` is rejected rather than silently overwritten;
    /// `iat` is always replaced with the issuance time.
    pub fn issue_at(&self, mut claims: Claims, issued_at: DateTime<Utc>) -> Result<String, AppError> {
        if claims.contains_key("exp") {
            return Err(AppError::BadRequest(
                "Claims must not carry 'exp'; the server sets the expiry".into(),
            ));
        }

        let expires_at = issued_at + self.ttl;
        claims.insert("iat".into(), issued_at.timestamp().into());
        claims.insert("exp".into(), expires_at.timestamp().into());

        encode(&Header::default(), &claims, &self.encoding)
            .map_err(|e| AppError::Internal(format!("Failed to sign token: {e}")))
    }

    /// Check signature and expiry and return the decoded claims.
    pub fn verify(&self, token: &str) -> Result<Claims, AppError> {
        let mut validation = Validation::new(Algorithm::HS256);
        // `aud` is client-chosen and never checked.
        validation.validate_aud = false;
        validation.leeway = 0;

        decode::<Claims>(token, &self.decoding, &validation)
            .map(|data| data.claims)
            .map_err(|e| {
                tracing::debug!("Token rejected: {e}");
                AppError::forbidden()
            })
    }
}
