//! Repository error type, local in place of `pushkind_common::repository::errors`.
//!
//! Diesel constraint failures are classified here so services can report
//! them as conflicts.

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use thiserror::Error;

/// Errors surfaced by repository implementations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The addressed record does not exist.
    #[error("record not found")]
    NotFound,
    /// A unique or foreign key constraint rejected the write.
    #[error("constraint violation: {0}")]
    ConstraintViolation(String),
    /// A business rule rejected the write before it reached the database.
    #[error("conflict: {0}")]
    Conflict(String),
    /// Stored data could not be converted into domain types.
    #[error("validation error: {0}")]
    ValidationError(String),
    #[error("database error: {0}")]
    Database(DieselError),
    #[error("connection pool error: {0}")]
    Pool(#[from] diesel::r2d2::PoolError),
}

impl From<DieselError> for RepositoryError {
    fn from(err: DieselError) -> Self {
        match err {
            DieselError::NotFound => RepositoryError::NotFound,
            DieselError::DatabaseError(
                kind @ (DatabaseErrorKind::UniqueViolation
                | DatabaseErrorKind::ForeignKeyViolation
                | DatabaseErrorKind::CheckViolation),
                info,
            ) => {
                let kind = match kind {
                    DatabaseErrorKind::UniqueViolation => "unique",
                    DatabaseErrorKind::ForeignKeyViolation => "foreign key",
                    _ => "check",
                };
                RepositoryError::ConstraintViolation(format!("{kind}: {}", info.message()))
            }
            other => RepositoryError::Database(other),
        }
    }
}

/// Convenient alias for results returned by repositories.
pub type RepositoryResult<T> = Result<T, RepositoryError>;
