//! Supplier entity model and DTOs.

use carcatalog_core::types::{DbId, Timestamp};
use carcatalog_core::validation::not_blank;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A supplier row from the `suppliers` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Supplier {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub address: Option<String>,
    pub website: Option<String>,
    pub phone: Option<String>,
    pub deleted: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new supplier.
///
/// Contact fields other than `email` are optional but must not be blank
/// when present; each one is unique across suppliers.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateSupplier {
    #[validate(custom(function = "not_blank"))]
    pub name: String,
    #[validate(email(message = "must be a valid email address"))]
    pub email: String,
    #[validate(custom(function = "not_blank"))]
    pub address: Option<String>,
    #[validate(custom(function = "not_blank"))]
    pub website: Option<String>,
    #[validate(custom(function = "not_blank"))]
    pub phone: Option<String>,
}

/// DTO for replacing an existing supplier. Every field is written.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSupplier {
    #[validate(custom(function = "not_blank"))]
    pub name: String,
    #[validate(email(message = "must be a valid email address"))]
    pub email: String,
    #[validate(custom(function = "not_blank"))]
    pub address: Option<String>,
    #[validate(custom(function = "not_blank"))]
    pub website: Option<String>,
    #[validate(custom(function = "not_blank"))]
    pub phone: Option<String>,
}
