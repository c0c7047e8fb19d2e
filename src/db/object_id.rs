use bson::oid::ObjectId;

use crate::error::AppError;

/// Parse a path segment into a MongoDB `ObjectId`.
pub fn parse_object_id(raw: &str) -> Result<ObjectId, AppError> {
    ObjectId::parse_str(raw)
        .map_err(|_| AppError::BadRequest(format!("'{raw}' is not a valid identifier")))
}
