//! Route definitions for the `/admin/cars` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::car;
use crate::state::AppState;

/// Routes mounted at `/admin/cars`.
///
/// ```text
/// GET    /                -> list_page
/// POST   /                -> create (multipart)
/// GET    /collections     -> list
/// GET    /filter          -> filter
/// GET    /{id}            -> get_by_id
/// PUT    /{id}            -> update
/// DELETE /{id}            -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(car::list_page).post(car::create))
        .route("/collections", get(car::list))
        .route("/filter", get(car::filter))
        .route(
            "/{id}",
            get(car::get_by_id).put(car::update).delete(car::delete),
        )
}
