//! Handlers for the `/admin/cars` resource.
//!
//! Every read returns [`CarResponse`] projections; writes re-check the car
//! configuration for uniqueness before touching the database.

use axum::body::Bytes;
use axum::extract::{Multipart, Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use carcatalog_core::error::CoreError;
use carcatalog_core::filter::{compose, CarFilter};
use carcatalog_core::pagination::Page;
use carcatalog_core::types::DbId;
use carcatalog_core::validation::validate_input;
use carcatalog_db::models::car::{CarConfiguration, CarResponse, CarRow, CreateCar, UpdateCar};
use carcatalog_db::repositories::{CarRepo, CategoryRepo, SupplierRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthAdmin;
use crate::query::{CarFilterParams, PageParams};
use crate::state::AppState;
use crate::storage::StoredImage;

/// Multipart field carrying the car JSON document.
const CAR_FIELD: &str = "car";
/// Multipart field name used for each image file.
const IMAGES_FIELD: &str = "images";

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Car", id })
}

fn project_all(rows: Vec<CarRow>) -> Result<Vec<CarResponse>, CoreError> {
    rows.into_iter().map(CarResponse::try_from).collect()
}

/// Reject references to categories or suppliers that do not exist.
async fn ensure_references(
    state: &AppState,
    category_id: DbId,
    supplier_id: DbId,
) -> AppResult<()> {
    if CategoryRepo::find_by_id(&state.pool, category_id)
        .await?
        .is_none()
    {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Category",
            id: category_id,
        }));
    }
    if SupplierRepo::find_by_id(&state.pool, supplier_id)
        .await?
        .is_none()
    {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Supplier",
            id: supplier_id,
        }));
    }
    Ok(())
}

async fn ensure_unique(
    state: &AppState,
    config: &CarConfiguration<'_>,
    exclude_id: Option<DbId>,
) -> AppResult<()> {
    if CarRepo::configuration_exists(&state.pool, config, exclude_id).await? {
        return Err(AppError::Core(CoreError::Conflict(
            "Car already exists".into(),
        )));
    }
    Ok(())
}

/// POST /api/v1/admin/cars
///
/// Accepts a multipart form with a required `car` field (JSON) and zero or
/// more `images` file fields. Empty image parts are skipped. Images are
/// written before the insert and removed again if the insert fails.
pub async fn create(
    State(state): State<AppState>,
    admin: AuthAdmin,
    mut multipart: Multipart,
) -> AppResult<(StatusCode, Json<CarResponse>)> {
    let mut car: Option<CreateCar> = None;
    let mut uploads: Vec<(String, Bytes)> = Vec::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            CAR_FIELD => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
                let parsed = serde_json::from_str::<CreateCar>(&text).map_err(|e| {
                    AppError::Core(CoreError::Validation(format!("Invalid car payload: {e}")))
                })?;
                car = Some(parsed);
            }
            IMAGES_FIELD => {
                let file_name = field.file_name().unwrap_or("image").to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
                if !data.is_empty() {
                    uploads.push((file_name, data));
                }
            }
            _ => {} // ignore unknown fields
        }
    }

    let input =
        car.ok_or_else(|| AppError::BadRequest(format!("Missing required '{CAR_FIELD}' field")))?;

    validate_input(&input)?;
    ensure_references(&state, input.category_id, input.supplier_id).await?;
    ensure_unique(&state, &input.configuration(), None).await?;

    let mut stored: Vec<StoredImage> = Vec::with_capacity(uploads.len());
    for (file_name, data) in &uploads {
        match state.images.save(file_name, data).await {
            Ok(image) => stored.push(image),
            Err(e) => {
                state.images.remove(&stored).await;
                return Err(AppError::Storage(e));
            }
        }
    }

    let image_urls: Vec<String> = stored.iter().map(|s| s.url.clone()).collect();

    let row = match CarRepo::create(&state.pool, &input, &image_urls).await {
        Ok(row) => row,
        Err(e) => {
            state.images.remove(&stored).await;
            return Err(e.into());
        }
    };

    tracing::info!(
        car_id = row.id,
        images = image_urls.len(),
        admin_id = admin.admin_id,
        admin = %admin.username,
        "Car created"
    );

    Ok((StatusCode::CREATED, Json(CarResponse::try_from(row)?)))
}

/// GET /api/v1/admin/cars/collections
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<CarResponse>>> {
    let rows = CarRepo::list_active(&state.pool).await?;
    Ok(Json(project_all(rows)?))
}

/// GET /api/v1/admin/cars?page=&size=&sort=
pub async fn list_page(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> AppResult<Json<Page<CarResponse>>> {
    let request = params.page_request()?;
    let page = CarRepo::find_page(&state.pool, &compose(&CarFilter::default()), &request).await?;
    Ok(Json(page.try_map(CarResponse::try_from)?))
}

/// GET /api/v1/admin/cars/filter
///
/// Accepts the optional criteria in [`CarFilterParams`] plus paging.
pub async fn filter(
    State(state): State<AppState>,
    Query(params): Query<CarFilterParams>,
) -> AppResult<Json<Page<CarResponse>>> {
    let filter = params.to_filter()?;
    let request = params.page_request()?;
    let predicates = compose(&filter);

    tracing::debug!(predicates = predicates.len(), page = request.page, "Filtering cars");

    let page = CarRepo::find_page(&state.pool, &predicates, &request).await?;
    Ok(Json(page.try_map(CarResponse::try_from)?))
}

/// GET /api/v1/admin/cars/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<CarResponse>> {
    let row = CarRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(CarResponse::try_from(row)?))
}

/// PUT /api/v1/admin/cars/{id}
///
/// Full replacement, including the image URL list.
pub async fn update(
    State(state): State<AppState>,
    admin: AuthAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateCar>,
) -> AppResult<Json<CarResponse>> {
    validate_input(&input)?;

    if CarRepo::find_by_id(&state.pool, id).await?.is_none() {
        return Err(not_found(id));
    }

    ensure_references(&state, input.category_id, input.supplier_id).await?;
    ensure_unique(&state, &input.configuration(), Some(id)).await?;

    let row = CarRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(car_id = id, admin_id = admin.admin_id, admin = %admin.username, "Car updated");
    Ok(Json(CarResponse::try_from(row)?))
}

/// DELETE /api/v1/admin/cars/{id}
pub async fn delete(
    State(state): State<AppState>,
    admin: AuthAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if CarRepo::soft_delete(&state.pool, id).await? {
        tracing::info!(
            car_id = id,
            admin_id = admin.admin_id,
            admin = %admin.username,
            "Car deleted"
        );
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}
