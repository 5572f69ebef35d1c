//! Request extractors guarding protected routes.
//!
//! - [`auth::AuthAdmin`] -- Resolves the admin behind a JWT Bearer token.

pub mod auth;
