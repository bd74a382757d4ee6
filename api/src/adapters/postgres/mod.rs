//! PostgreSQL adapters
//!
//! Implementations of repository traits using SeaORM and PostgreSQL.

pub mod category_repo;
pub mod product_repo;
pub mod schema;
pub mod user_repo;


pub use category_repo::PostgresCategoryRepository;
pub use product_repo::PostgresProductRepository;
pub use schema::sync_schema;
pub use user_repo::PostgresUserRepository;

use sea_orm::{DbErr, SqlErr};

use crate::error::DomainError;

/// Map a SeaORM error onto the domain, keeping unique-index violations
/// distinct so a racing duplicate insert surfaces as a conflict
pub(crate) fn map_db_err(err: DbErr) -> DomainError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(detail)) => DomainError::AlreadyExists(detail),
        _ => DomainError::Database(err.to_string()),
    }
}
