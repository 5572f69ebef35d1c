//! Admin account model.

use carcatalog_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// An admin row from the `admins` table. Never serialized: it carries the
/// password hash.
#[derive(Debug, Clone, FromRow)]
pub struct Admin {
    pub id: DbId,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Insert payload for a new admin. The password is already hashed.
#[derive(Debug, Clone)]
pub struct CreateAdmin {
    pub username: String,
    pub email: String,
    pub password_hash: String,
}
