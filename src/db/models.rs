use std::collections::BTreeMap;

use bson::oid::ObjectId;
use bson::serde_helpers::serialize_object_id_as_hex_string;
use chrono::DateTime;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Collection names inside the portfolio database.
pub mod collections {
    pub const PROJECTS: &str = "projects";
    pub const SKILLS: &str = "skills";
    pub const BACKEND_SKILLS: &str = "backendSkills";
    pub const CONTACTS: &str = "contacts";
    pub const BLOGS: &str = "blogs";
}

/// A document type that can be stored in one of the portfolio collections.
pub trait Entity: Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Semantic checks that serde alone cannot express.
    fn validate(&self) -> Result<(), AppError>;
}

fn require_text(field: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::BadRequest(format!("'{field}' cannot be empty")));
    }
    Ok(())
}

/// A portfolio project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Project {
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub technologies: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub live_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl Entity for Project {
    fn validate(&self) -> Result<(), AppError> {
        require_text("title", &self.title)?;
        require_text("description", &self.description)
    }
}

/// Partial update for a project, applied with `$set`.
///
/// Only the fields present in the request are written.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ProjectPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub technologies: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub live_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl ProjectPatch {
    pub fn is_empty(&self) -> bool {
        *self == ProjectPatch::default()
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if self.is_empty() {
            return Err(AppError::BadRequest(
                "Update must change at least one field".into(),
            ));
        }
        if let Some(title) = &self.title {
            require_text("title", title)?;
        }
        if let Some(description) = &self.description {
            require_text("description", description)?;
        }
        Ok(())
    }

    /// The `$set` document for this patch.
    pub fn to_set_document(&self) -> Result<bson::Document, AppError> {
        bson::to_document(self)
            .map_err(|e| AppError::Internal(format!("Failed to encode update: {e}")))
    }
}

/// A skill badge. Used by both the `skills` and `backendSkills` collections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Skill {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Proficiency from 0 to 100.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl Entity for Skill {
    fn validate(&self) -> Result<(), AppError> {
        require_text("name", &self.name)?;
        if let Some(level) = self.level {
            if level > 100 {
                return Err(AppError::BadRequest(format!(
                    "'level' must be between 0 and 100, got {level}"
                )));
            }
        }
        Ok(())
    }
}

/// A message left through the contact form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Contact {
    pub name: String,
    pub email: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
}

impl Entity for Contact {
    fn validate(&self) -> Result<(), AppError> {
        require_text("name", &self.name)?;
        require_text("message", &self.message)?;
        if !self.email.contains('@') {
            return Err(AppError::BadRequest(format!(
                "'{}' is not a valid email address",
                self.email
            )));
        }
        Ok(())
    }
}

/// A blog post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Blog {
    pub title: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    /// RFC 3339 timestamp, kept exactly as submitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_at: Option<String>,
}

impl Entity for Blog {
    fn validate(&self) -> Result<(), AppError> {
        require_text("title", &self.title)?;
        require_text("content", &self.content)?;
        if let Some(published_at) = &self.published_at {
            DateTime::parse_from_rfc3339(published_at).map_err(|e| {
                AppError::BadRequest(format!(
                    "'publishedAt' must be an RFC 3339 timestamp, got '{published_at}': {e}"
                ))
            })?;
        }
        Ok(())
    }
}

/// A stored entity together with its database identifier.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record<T> {
    #[serde(rename = "_id", serialize_with = "serialize_object_id_as_hex_string")]
    pub id: ObjectId,
    #[serde(flatten)]
    pub data: T,
}

impl<T: Entity> Record<T> {
    /// Split a raw MongoDB document into its `_id` and typed body.
    pub fn from_document(mut document: bson::Document) -> Result<Self, AppError> {
        let id = document
            .get_object_id("_id")
            .map_err(|e| AppError::Database(format!("Document without ObjectId _id: {e}")))?;
        document.remove("_id");

        let data = bson::from_document(document)
            .map_err(|e| AppError::Database(format!("Stored document {id} does not match schema: {e}")))?;

        Ok(Self { id, data })
    }
}

/// Acknowledgment of a single insert.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertOneAck {
    pub acknowledged: bool,
    #[serde(serialize_with = "serialize_object_id_as_hex_string")]
    pub inserted_id: ObjectId,
}

/// Acknowledgment of a bulk insert; ids are keyed by their position in the request.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertManyAck {
    pub acknowledged: bool,
    pub inserted_count: u64,
    pub inserted_ids: BTreeMap<usize, String>,
}

/// Acknowledgment of an update.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAck {
    pub matched_count: u64,
    pub modified_count: u64,
}

/// Acknowledgment of a delete.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteAck {
    pub acknowledged: bool,
    pub deleted_count: u64,
}

/// Response body of `PUT /projects/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateOutcome {
    pub success: bool,
    pub message: String,
}
