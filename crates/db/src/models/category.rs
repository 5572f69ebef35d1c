//! Category entity model and DTOs.

use carcatalog_core::types::{DbId, Timestamp};
use carcatalog_core::validation::not_blank;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A category row from the `categories` table.
///
/// Serialized as-is for responses, `deleted` flag included.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub deleted: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new category.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCategory {
    #[validate(custom(function = "not_blank"))]
    pub name: String,
    pub description: Option<String>,
}

/// DTO for replacing an existing category. Every field is written.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCategory {
    #[validate(custom(function = "not_blank"))]
    pub name: String,
    pub description: Option<String>,
}
