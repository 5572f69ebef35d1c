//! Integration tests for soft-delete behaviour.
//!
//! Verifies that:
//! - Soft-deleted entities are hidden from listings but still found by id
//! - Soft-delete is idempotent and reports whether the row exists
//! - A car whose category or supplier is soft-deleted keeps its reference
//!   and exposes the deleted flag for projection

use carcatalog_core::filter::{compose, CarFilter};
use carcatalog_core::pagination::PageRequest;
use carcatalog_core::vehicle::{CarColor, EngineType, Transmission};
use carcatalog_db::models::car::{CarResponse, CreateCar};
use carcatalog_db::models::category::CreateCategory;
use carcatalog_db::models::supplier::CreateSupplier;
use carcatalog_db::repositories::{CarRepo, CategoryRepo, SupplierRepo};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

struct Fixture {
    category_id: i64,
    supplier_id: i64,
    car_id: i64,
}

async fn seed(pool: &PgPool) -> Fixture {
    let category = CategoryRepo::create(
        pool,
        &CreateCategory {
            name: "Sedan".to_string(),
            description: None,
        },
    )
    .await
    .unwrap();
    let supplier = SupplierRepo::create(
        pool,
        &CreateSupplier {
            name: "Acme".to_string(),
            email: "sales@acme.test".to_string(),
            address: None,
            website: None,
            phone: None,
        },
    )
    .await
    .unwrap();
    let car = CarRepo::create(
        pool,
        &CreateCar {
            name: "Model X".to_string(),
            description: None,
            supplier_id: supplier.id,
            category_id: category.id,
            price: Decimal::new(2_000_000, 2),
            car_colors: vec![CarColor::Red],
            transmission: Transmission::Manual,
            engine_type: EngineType::Petrol,
            mileage: None,
            manufactured_date: NaiveDate::from_ymd_opt(2022, 5, 1).unwrap(),
        },
        &[],
    )
    .await
    .unwrap();

    Fixture {
        category_id: category.id,
        supplier_id: supplier.id,
        car_id: car.id,
    }
}

// ---------------------------------------------------------------------------
// Test: soft-deleted rows stay addressable by id
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_soft_deleted_car_is_still_found_by_id(pool: PgPool) {
    let fx = seed(&pool).await;

    assert!(CarRepo::soft_delete(&pool, fx.car_id).await.unwrap());

    let found = CarRepo::find_by_id(&pool, fx.car_id)
        .await
        .unwrap()
        .expect("soft-deleted car should still be found");
    assert!(found.deleted);
}

// ---------------------------------------------------------------------------
// Test: soft-deleted rows are hidden from listings
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_soft_delete_hides_from_lists(pool: PgPool) {
    let fx = seed(&pool).await;

    CarRepo::soft_delete(&pool, fx.car_id).await.unwrap();
    CategoryRepo::soft_delete(&pool, fx.category_id).await.unwrap();
    SupplierRepo::soft_delete(&pool, fx.supplier_id).await.unwrap();

    assert!(CarRepo::list_active(&pool).await.unwrap().is_empty());
    assert!(CategoryRepo::list_active(&pool).await.unwrap().is_empty());
    assert!(SupplierRepo::list_active(&pool).await.unwrap().is_empty());

    let page = CarRepo::find_page(
        &pool,
        &compose(&CarFilter::default()),
        &PageRequest::default(),
    )
    .await
    .unwrap();
    assert_eq!(page.total_elements, 0);
    assert!(page.empty);
}

// ---------------------------------------------------------------------------
// Test: soft-delete is idempotent
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_soft_delete_is_idempotent(pool: PgPool) {
    let fx = seed(&pool).await;

    assert!(CategoryRepo::soft_delete(&pool, fx.category_id).await.unwrap());
    let first = CategoryRepo::find_by_id(&pool, fx.category_id)
        .await
        .unwrap()
        .unwrap();

    assert!(CategoryRepo::soft_delete(&pool, fx.category_id).await.unwrap());
    let second = CategoryRepo::find_by_id(&pool, fx.category_id)
        .await
        .unwrap()
        .unwrap();

    assert!(second.deleted);
    assert_eq!(first.updated_at, second.updated_at);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_soft_delete_missing_row_returns_false(pool: PgPool) {
    assert!(!CarRepo::soft_delete(&pool, 424_242).await.unwrap());
    assert!(!CategoryRepo::soft_delete(&pool, 424_242).await.unwrap());
    assert!(!SupplierRepo::soft_delete(&pool, 424_242).await.unwrap());
}

// ---------------------------------------------------------------------------
// Test: deleted references project as the fallback label
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_deleted_category_projects_as_none(pool: PgPool) {
    let fx = seed(&pool).await;

    CategoryRepo::soft_delete(&pool, fx.category_id).await.unwrap();

    let row = CarRepo::find_by_id(&pool, fx.car_id).await.unwrap().unwrap();
    assert_eq!(row.category_deleted, Some(true));

    let response = CarResponse::try_from(row).unwrap();
    assert_eq!(response.category_name, "None");
    assert_eq!(response.supplier_name, "Acme");
    assert!(!response.deleted);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_deleted_supplier_projects_as_none(pool: PgPool) {
    let fx = seed(&pool).await;

    SupplierRepo::soft_delete(&pool, fx.supplier_id).await.unwrap();

    let rows = CarRepo::list_active(&pool).await.unwrap();
    assert_eq!(rows.len(), 1, "car itself is still active");

    let response = CarResponse::try_from(rows.into_iter().next().unwrap()).unwrap();
    assert_eq!(response.supplier_name, "None");
    assert_eq!(response.category_name, "Sedan");
}
