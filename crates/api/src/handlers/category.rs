//! Handlers for the `/admin/categories` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use carcatalog_core::error::CoreError;
use carcatalog_core::types::DbId;
use carcatalog_core::validation::validate_input;
use carcatalog_db::models::category::{Category, CreateCategory, UpdateCategory};
use carcatalog_db::repositories::CategoryRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthAdmin;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Category",
        id,
    })
}

fn name_conflict() -> AppError {
    AppError::Core(CoreError::Conflict(
        "Category name already exists".into(),
    ))
}

/// POST /api/v1/admin/categories
pub async fn create(
    State(state): State<AppState>,
    admin: AuthAdmin,
    Json(input): Json<CreateCategory>,
) -> AppResult<(StatusCode, Json<Category>)> {
    validate_input(&input)?;

    if CategoryRepo::name_taken(&state.pool, &input.name, None).await? {
        return Err(name_conflict());
    }

    let category = CategoryRepo::create(&state.pool, &input).await?;
    tracing::info!(
        category_id = category.id,
        admin_id = admin.admin_id,
        admin = %admin.username,
        "Category created"
    );
    Ok((StatusCode::CREATED, Json(category)))
}

/// GET /api/v1/admin/categories/collections
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Category>>> {
    let categories = CategoryRepo::list_active(&state.pool).await?;
    Ok(Json(categories))
}

/// GET /api/v1/admin/categories/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Category>> {
    let category = CategoryRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(category))
}

/// PUT /api/v1/admin/categories/{id}
pub async fn update(
    State(state): State<AppState>,
    admin: AuthAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateCategory>,
) -> AppResult<Json<Category>> {
    validate_input(&input)?;

    if CategoryRepo::find_by_id(&state.pool, id).await?.is_none() {
        return Err(not_found(id));
    }

    if CategoryRepo::name_taken(&state.pool, &input.name, Some(id)).await? {
        return Err(name_conflict());
    }

    let category = CategoryRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(
        category_id = id,
        admin_id = admin.admin_id,
        admin = %admin.username,
        "Category updated"
    );
    Ok(Json(category))
}

/// DELETE /api/v1/admin/categories/{id}
///
/// Soft delete. Cars keep their reference and display the fallback label.
pub async fn delete(
    State(state): State<AppState>,
    admin: AuthAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if CategoryRepo::soft_delete(&state.pool, id).await? {
        tracing::info!(
            category_id = id,
            admin_id = admin.admin_id,
            admin = %admin.username,
            "Category deleted"
        );
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}
