//! Route definitions for the `/admin/categories` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::category;
use crate::state::AppState;

/// Routes mounted at `/admin/categories`.
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
        .route("/", post(category::create))
        .route("/collections", get(category::list))
        .route(
            "/{id}",
            get(category::get_by_id)
                .put(category::update)
                .delete(category::delete),
        )
}
