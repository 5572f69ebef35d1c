//! Row types, request DTOs and response projections.

pub mod admin;
pub mod car;
pub mod category;
pub mod supplier;
