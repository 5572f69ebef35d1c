//! Repository for the `suppliers` table.

use carcatalog_core::types::DbId;
use sqlx::PgPool;

use crate::models::supplier::{CreateSupplier, Supplier, UpdateSupplier};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, name, email, address, website, phone, deleted, created_at, updated_at";

/// Provides CRUD operations for suppliers.
pub struct SupplierRepo;

impl SupplierRepo {
    /// Insert a new supplier, returning the created row.
    ///
    /// Fails with a `uq_suppliers_*` unique violation when a contact field is
    /// already used by another supplier.
    pub async fn create(pool: &PgPool, input: &CreateSupplier) -> Result<Supplier, sqlx::Error> {
        let query = format!(
            "INSERT INTO suppliers (name, email, address, website, phone)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Supplier>(&query)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.address)
            .bind(&input.website)
            .bind(&input.phone)
            .fetch_one(pool)
            .await
    }

    /// Find a supplier by ID. Soft-deleted rows are included.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Supplier>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM suppliers WHERE id = $1");
        sqlx::query_as::<_, Supplier>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List suppliers that are not soft-deleted, oldest first.
    pub async fn list_active(pool: &PgPool) -> Result<Vec<Supplier>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM suppliers WHERE deleted = FALSE ORDER BY id");
        sqlx::query_as::<_, Supplier>(&query).fetch_all(pool).await
    }

    /// Replace every mutable field of a supplier.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateSupplier,
    ) -> Result<Option<Supplier>, sqlx::Error> {
        let query = format!(
            "UPDATE suppliers SET
                name = $2,
                email = $3,
                address = $4,
                website = $5,
                phone = $6,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Supplier>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.address)
            .bind(&input.website)
            .bind(&input.phone)
            .fetch_optional(pool)
            .await
    }

    /// Mark a supplier deleted. Returns `true` if the row exists.
    pub async fn soft_delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE suppliers
             SET deleted = TRUE,
                 updated_at = CASE WHEN deleted THEN updated_at ELSE NOW() END
             WHERE id = $1",
        )
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Whether another supplier already uses `name`.
    pub async fn name_taken(
        pool: &PgPool,
        name: &str,
        exclude_id: Option<DbId>,
    ) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(
                SELECT 1 FROM suppliers
                WHERE name = $1 AND ($2::BIGINT IS NULL OR id <> $2)
             )",
        )
        .bind(name)
        .bind(exclude_id)
        .fetch_one(pool)
        .await
    }
}
