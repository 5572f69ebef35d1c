//! Handlers for the `/admin/suppliers` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use carcatalog_core::error::CoreError;
use carcatalog_core::types::DbId;
use carcatalog_core::validation::validate_input;
use carcatalog_db::models::supplier::{CreateSupplier, Supplier, UpdateSupplier};
use carcatalog_db::repositories::SupplierRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthAdmin;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Supplier",
        id,
    })
}

fn name_conflict() -> AppError {
    AppError::Core(CoreError::Conflict(
        "Supplier name already exists".into(),
    ))
}

/// POST /api/v1/admin/suppliers
///
/// Contact-field collisions are reported by the `uq_suppliers_*` constraints.
pub async fn create(
    State(state): State<AppState>,
    admin: AuthAdmin,
    Json(input): Json<CreateSupplier>,
) -> AppResult<(StatusCode, Json<Supplier>)> {
    validate_input(&input)?;

    if SupplierRepo::name_taken(&state.pool, &input.name, None).await? {
        return Err(name_conflict());
    }

    let supplier = SupplierRepo::create(&state.pool, &input).await?;
    tracing::info!(
        supplier_id = supplier.id,
        admin_id = admin.admin_id,
        admin = %admin.username,
        "Supplier created"
    );
    Ok((StatusCode::CREATED, Json(supplier)))
}

/// GET /api/v1/admin/suppliers/collections
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Supplier>>> {
    let suppliers = SupplierRepo::list_active(&state.pool).await?;
    Ok(Json(suppliers))
}

/// GET /api/v1/admin/suppliers/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Supplier>> {
    let supplier = SupplierRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(supplier))
}

/// PUT /api/v1/admin/suppliers/{id}
pub async fn update(
    State(state): State<AppState>,
    admin: AuthAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateSupplier>,
) -> AppResult<Json<Supplier>> {
    validate_input(&input)?;

    if SupplierRepo::find_by_id(&state.pool, id).await?.is_none() {
        return Err(not_found(id));
    }

    if SupplierRepo::name_taken(&state.pool, &input.name, Some(id)).await? {
        return Err(name_conflict());
    }

    let supplier = SupplierRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(
        supplier_id = id,
        admin_id = admin.admin_id,
        admin = %admin.username,
        "Supplier updated"
    );
    Ok(Json(supplier))
}

/// DELETE /api/v1/admin/suppliers/{id}
pub async fn delete(
    State(state): State<AppState>,
    admin: AuthAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if SupplierRepo::soft_delete(&state.pool, id).await? {
        tracing::info!(
            supplier_id = id,
            admin_id = admin.admin_id,
            admin = %admin.username,
            "Supplier deleted"
        );
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}
