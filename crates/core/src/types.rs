//! Identifier and time aliases shared by every catalog record.

/// Primary key of categories, suppliers, cars and admins (`BIGSERIAL`).
pub type DbId = i64;

/// `created_at` / `updated_at` values, stored as `TIMESTAMPTZ`.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
