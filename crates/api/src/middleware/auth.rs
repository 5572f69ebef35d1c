//! JWT-based admin authentication extractor for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use carcatalog_core::error::CoreError;
use carcatalog_core::types::DbId;
use carcatalog_db::repositories::AdminRepo;

use crate::auth::jwt::validate_token;
use crate::error::AppError;
use crate::state::AppState;

/// Admin extracted from a JWT Bearer token in the `Authorization` header.
///
/// Add it as a handler parameter to require an authenticated admin:
///
/// ```ignore
/// async fn delete(admin: AuthAdmin, Path(id): Path<DbId>) -> AppResult<StatusCode> {
///     tracing::info!(admin = %admin.username, id, "deleting");
///     Ok(StatusCode::NO_CONTENT)
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthAdmin {
    pub admin_id: DbId,
    pub username: String,
}

impl FromRequestParts<AppState> for AuthAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| unauthorized("Missing Authorization header"))?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or_else(|| unauthorized("Invalid Authorization format. Expected: Bearer <token>"))?;

        let claims = validate_token(token, &state.config.jwt)
            .map_err(|_| unauthorized("Invalid or expired token"))?;

        let admin = AdminRepo::find_by_username(&state.pool, &claims.sub)
            .await?
            .ok_or_else(|| unauthorized("Admin account no longer exists"))?;

        Ok(AuthAdmin {
            admin_id: admin.id,
            username: admin.username,
        })
    }
}

fn unauthorized(msg: &str) -> AppError {
    AppError::Core(CoreError::Unauthorized(msg.to_string()))
}
