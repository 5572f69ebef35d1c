//! Repository for the `cars` table.
//!
//! Reads always go through [`VIEW_COLUMNS`] so each row carries the name and
//! deleted flag of its category and supplier for projection.

use carcatalog_core::filter::{contains_pattern, CarPredicate};
use carcatalog_core::pagination::{Page, PageRequest, SortField, SortKey};
use carcatalog_core::types::DbId;
use rust_decimal::Decimal;
use sqlx::PgPool;

use crate::models::car::{color_codes, CarConfiguration, CarRow, CreateCar, UpdateCar};

/// Car columns plus the joined reference fields, aliased for [`CarRow`].
const VIEW_COLUMNS: &str = "c.id, c.name, c.description, c.category_id, c.supplier_id, \
     c.price, c.colors, c.transmission, c.engine_type, c.mileage, c.manufactured_date, \
     c.image_urls, c.deleted, c.created_at, c.updated_at, \
     cat.name AS category_name, cat.deleted AS category_deleted, \
     s.name AS supplier_name, s.deleted AS supplier_deleted";

/// Joins the category and supplier onto a relation aliased `c`.
const VIEW_JOINS: &str = "LEFT JOIN categories cat ON cat.id = c.category_id \
     LEFT JOIN suppliers s ON s.id = c.supplier_id";

/// Provides CRUD, filtering and paging for cars.
pub struct CarRepo;

impl CarRepo {
    /// Insert a new car with the given stored image URLs, returning the
    /// joined row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateCar,
        image_urls: &[String],
    ) -> Result<CarRow, sqlx::Error> {
        let query = format!(
            "WITH c AS (
                INSERT INTO cars (name, description, category_id, supplier_id, price, colors,
                                  transmission, engine_type, mileage, manufactured_date,
                                  image_urls)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
                RETURNING *
             )
             SELECT {VIEW_COLUMNS} FROM c {VIEW_JOINS}"
        );
        sqlx::query_as::<_, CarRow>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.category_id)
            .bind(input.supplier_id)
            .bind(input.price)
            .bind(color_codes(&input.car_colors))
            .bind(input.transmission.as_str())
            .bind(input.engine_type.as_str())
            .bind(input.mileage)
            .bind(input.manufactured_date)
            .bind(image_urls)
            .fetch_one(pool)
            .await
    }

    /// Find a car by ID. Soft-deleted rows are included.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<CarRow>, sqlx::Error> {
        let query = format!("SELECT {VIEW_COLUMNS} FROM cars c {VIEW_JOINS} WHERE c.id = $1");
        sqlx::query_as::<_, CarRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List every car that is not soft-deleted, oldest first.
    pub async fn list_active(pool: &PgPool) -> Result<Vec<CarRow>, sqlx::Error> {
        let query = format!(
            "SELECT {VIEW_COLUMNS} FROM cars c {VIEW_JOINS} WHERE c.deleted = FALSE ORDER BY c.id"
        );
        sqlx::query_as::<_, CarRow>(&query).fetch_all(pool).await
    }

    /// Replace every mutable field of a car.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateCar,
    ) -> Result<Option<CarRow>, sqlx::Error> {
        let query = format!(
            "WITH c AS (
                UPDATE cars SET
                    name = $2,
                    description = $3,
                    category_id = $4,
                    supplier_id = $5,
                    price = $6,
                    colors = $7,
                    transmission = $8,
                    engine_type = $9,
                    mileage = $10,
                    manufactured_date = $11,
                    image_urls = $12,
                    updated_at = NOW()
                WHERE id = $1
                RETURNING *
             )
             SELECT {VIEW_COLUMNS} FROM c {VIEW_JOINS}"
        );
        sqlx::query_as::<_, CarRow>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.category_id)
            .bind(input.supplier_id)
            .bind(input.price)
            .bind(color_codes(&input.car_colors))
            .bind(input.transmission.as_str())
            .bind(input.engine_type.as_str())
            .bind(input.mileage)
            .bind(input.manufactured_date)
            .bind(&input.image_urls)
            .fetch_optional(pool)
            .await
    }

    /// Mark a car deleted. Returns `true` if the row exists.
    pub async fn soft_delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE cars
             SET deleted = TRUE,
                 updated_at = CASE WHEN deleted THEN updated_at ELSE NOW() END
             WHERE id = $1",
        )
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Whether a car other than `exclude_id` already has this configuration.
    ///
    /// Soft-deleted cars count: the unique constraint covers them too.
    pub async fn configuration_exists(
        pool: &PgPool,
        config: &CarConfiguration<'_>,
        exclude_id: Option<DbId>,
    ) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(
                SELECT 1 FROM cars
                WHERE name = $1
                  AND supplier_id = $2
                  AND transmission = $3
                  AND engine_type = $4
                  AND category_id = $5
                  AND ($6::BIGINT IS NULL OR id <> $6)
             )",
        )
        .bind(config.name)
        .bind(config.supplier_id)
        .bind(config.transmission.as_str())
        .bind(config.engine_type.as_str())
        .bind(config.category_id)
        .bind(exclude_id)
        .fetch_one(pool)
        .await
    }

    /// Fetch one page of cars matching every predicate, plus the total count.
    pub async fn find_page(
        pool: &PgPool,
        predicates: &[CarPredicate],
        request: &PageRequest,
    ) -> Result<Page<CarRow>, sqlx::Error> {
        let total = Self::count(pool, predicates).await?;

        let (where_clause, bind_values, bind_idx) = build_car_filter(predicates);
        let order_by = build_order_by(&request.sort);

        let query = format!(
            "SELECT {VIEW_COLUMNS} FROM cars c {VIEW_JOINS} {where_clause} \
             ORDER BY {order_by} \
             LIMIT ${bind_idx} OFFSET ${}",
            bind_idx + 1
        );

        let q = bind_car_values(sqlx::query_as::<_, CarRow>(&query), &bind_values);
        let rows = q
            .bind(request.size)
            .bind(request.offset())
            .fetch_all(pool)
            .await?;

        Ok(Page::new(rows, request, total))
    }

    /// Count cars matching every predicate.
    pub async fn count(pool: &PgPool, predicates: &[CarPredicate]) -> Result<i64, sqlx::Error> {
        let (where_clause, bind_values, _) = build_car_filter(predicates);

        let query = format!("SELECT COUNT(*)::BIGINT AS count FROM cars c {where_clause}");

        let q = bind_car_values_scalar(sqlx::query_scalar::<_, i64>(&query), &bind_values);
        q.fetch_one(pool).await
    }
}

// ---------------------------------------------------------------------------
// Internal helpers for dynamic query building
// ---------------------------------------------------------------------------

/// Typed bind value for dynamically-built car queries.
#[derive(Debug, Clone, PartialEq)]
enum BindValue {
    BigInt(i64),
    Text(String),
    Decimal(Decimal),
    TextArray(Vec<String>),
}

/// Render predicates into a WHERE clause and bind values.
///
/// Returns `(where_clause, bind_values, next_bind_index)`.
/// The `where_clause` is empty if there are no predicates, or starts with
/// `WHERE `.
fn build_car_filter(predicates: &[CarPredicate]) -> (String, Vec<BindValue>, u32) {
    let mut conditions: Vec<String> = Vec::new();
    let mut bind_idx = 1u32;
    let mut bind_values: Vec<BindValue> = Vec::new();

    for predicate in predicates {
        match predicate {
            CarPredicate::NotDeleted => {
                conditions.push("c.deleted = FALSE".to_string());
            }
            CarPredicate::InCategory(id) => {
                conditions.push(format!("c.category_id = ${bind_idx}"));
                bind_idx += 1;
                bind_values.push(BindValue::BigInt(*id));
            }
            CarPredicate::FromSupplier(id) => {
                conditions.push(format!("c.supplier_id = ${bind_idx}"));
                bind_idx += 1;
                bind_values.push(BindValue::BigInt(*id));
            }
            CarPredicate::TransmissionIs(t) => {
                conditions.push(format!("c.transmission = ${bind_idx}"));
                bind_idx += 1;
                bind_values.push(BindValue::Text(t.as_str().to_string()));
            }
            CarPredicate::EngineTypeIs(e) => {
                conditions.push(format!("c.engine_type = ${bind_idx}"));
                bind_idx += 1;
                bind_values.push(BindValue::Text(e.as_str().to_string()));
            }
            CarPredicate::PriceBetween(min, max) => {
                conditions.push(format!("c.price BETWEEN ${bind_idx} AND ${}", bind_idx + 1));
                bind_idx += 2;
                bind_values.push(BindValue::Decimal(*min));
                bind_values.push(BindValue::Decimal(*max));
            }
            CarPredicate::MileageBetween(min, max) => {
                conditions.push(format!("c.mileage BETWEEN ${bind_idx} AND ${}", bind_idx + 1));
                bind_idx += 2;
                bind_values.push(BindValue::Decimal(*min));
                bind_values.push(BindValue::Decimal(*max));
            }
            CarPredicate::HasAnyColor(colors) => {
                conditions.push(format!("c.colors && ${bind_idx}::TEXT[]"));
                bind_idx += 1;
                bind_values.push(BindValue::TextArray(color_codes(colors)));
            }
            CarPredicate::NameOrDescriptionContains(keyword) => {
                conditions.push(format!(
                    "(c.name ILIKE ${bind_idx} OR c.description ILIKE ${bind_idx})"
                ));
                bind_idx += 1;
                bind_values.push(BindValue::Text(contains_pattern(keyword)));
            }
        }
    }

    let where_clause = if conditions.is_empty() {
        String::new()
    } else {
        format!("WHERE {}", conditions.join(" AND "))
    };

    (where_clause, bind_values, bind_idx)
}

/// Render sort keys into an ORDER BY list, always ending on `c.id` so paging
/// is stable.
fn build_order_by(sort: &[SortKey]) -> String {
    let mut terms: Vec<String> = sort
        .iter()
        .map(|key| format!("{} {}", sort_column(key.field), key.direction.as_sql()))
        .collect();

    if !sort.iter().any(|key| key.field == SortField::Id) {
        terms.push("c.id ASC".to_string());
    }

    terms.join(", ")
}

fn sort_column(field: SortField) -> &'static str {
    match field {
        SortField::Id => "c.id",
        SortField::Name => "c.name",
        SortField::Price => "c.price",
        SortField::Mileage => "c.mileage",
        SortField::ManufacturedDate => "c.manufactured_date",
        SortField::CreatedAt => "c.created_at",
        SortField::UpdatedAt => "c.updated_at",
    }
}

/// Bind a slice of `BindValue` to a sqlx `QueryAs`.
fn bind_car_values<'q, O>(
    mut q: sqlx::query::QueryAs<'q, sqlx::Postgres, O, sqlx::postgres::PgArguments>,
    bind_values: &'q [BindValue],
) -> sqlx::query::QueryAs<'q, sqlx::Postgres, O, sqlx::postgres::PgArguments> {
    for val in bind_values {
        match val {
            BindValue::BigInt(v) => q = q.bind(*v),
            BindValue::Text(v) => q = q.bind(v.as_str()),
            BindValue::Decimal(v) => q = q.bind(*v),
            BindValue::TextArray(v) => q = q.bind(v.as_slice()),
        }
    }
    q
}

/// Bind a slice of `BindValue` to a sqlx `QueryScalar`.
fn bind_car_values_scalar<'q>(
    mut q: sqlx::query::QueryScalar<'q, sqlx::Postgres, i64, sqlx::postgres::PgArguments>,
    bind_values: &'q [BindValue],
) -> sqlx::query::QueryScalar<'q, sqlx::Postgres, i64, sqlx::postgres::PgArguments> {
    for val in bind_values {
        match val {
            BindValue::BigInt(v) => q = q.bind(*v),
            BindValue::Text(v) => q = q.bind(v.as_str()),
            BindValue::Decimal(v) => q = q.bind(*v),
            BindValue::TextArray(v) => q = q.bind(v.as_slice()),
        }
    }
    q
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
