//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod admin_repo;
pub mod car_repo;
pub mod category_repo;
pub mod supplier_repo;

pub use admin_repo::AdminRepo;
pub use car_repo::CarRepo;
pub use category_repo::CategoryRepo;
pub use supplier_repo::SupplierRepo;
