//! Domain logic for the car catalog.
//!
//! This crate performs no I/O. It holds the error type, the vehicle
//! enumerations and their display metadata, the car filter composer,
//! pagination parsing and the pure parts of response projection so both the
//! repository layer and the HTTP layer can share them.

pub mod error;
pub mod filter;
pub mod pagination;
pub mod projection;
pub mod types;
pub mod validation;
pub mod vehicle;
