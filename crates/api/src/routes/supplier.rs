//! Route definitions for the `/admin/suppliers` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::supplier;
use crate::state::AppState;

/// Routes mounted at `/admin/suppliers`.
///
/// ```text
/// POST   /                -> create
/// GET    /collections     -> list
/// GET    /{id}            -> get_by_id
/// PUT    /{id}            -> update
/// DELETE /{id}            -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(supplier::create))
        .route("/collections", get(supplier::list))
        .route(
            "/{id}",
            get(supplier::get_by_id)
                .put(supplier::update)
                .delete(supplier::delete),
        )
}
