//! HTTP handlers, one module per resource.

pub mod auth;
pub mod car;
pub mod category;
pub mod supplier;
