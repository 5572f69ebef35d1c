pub mod auth;
pub mod car;
pub mod category;
pub mod health;
pub mod supplier;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/register                          register admin (public)
/// /auth/authenticate                      issue bearer token (public)
///
/// /admin/categories                       create (admin)
/// /admin/categories/collections           list active (public)
/// /admin/categories/{id}                  get (public), update, delete (admin)
///
/// /admin/suppliers                        create (admin)
/// /admin/suppliers/collections            list active (public)
/// /admin/suppliers/{id}                   get (public), update, delete (admin)
///
/// /admin/cars                             paged list (public), multipart create (admin)
/// /admin/cars/collections                 list active (public)
/// /admin/cars/filter                      filtered paged list (public)
/// /admin/cars/{id}                        get (public), update, delete (admin)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/admin/categories", category::router())
        .nest("/admin/suppliers", supplier::router())
        .nest("/admin/cars", car::router())
}
