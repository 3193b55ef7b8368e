//! PostgreSQL adapters
//!
//! Implementations of repository traits using SeaORM and PostgreSQL.

pub mod department_repo;
pub mod employee_repo;


pub use department_repo::PostgresDepartmentRepository;
pub use employee_repo::PostgresEmployeeRepository;

use sea_orm::{DbErr, SqlErr};

use crate::error::DomainError;

/// Map a SeaORM error to a domain error, surfacing unique-key violations
pub(crate) fn map_db_err(err: DbErr) -> DomainError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(detail)) => DomainError::AlreadyExists(detail),
        _ => DomainError::Database(err.to_string()),
    }
}
