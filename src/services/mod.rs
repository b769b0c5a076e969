//! Business operations called by the admin UI.
//!
//! Services are generic over the repository traits so they run against
//! [`crate::repository::DieselRepository`] in production and the in-memory
//! test repository in unit tests.

use crate::repository::RepositoryError;

pub mod borrowers;
pub mod categories;
pub mod errors;
pub mod media;
pub mod media_types;
pub mod sites;

pub use errors::{ServiceError, ServiceResult};

/// Maps a repository failure onto the error reported to the caller.
///
/// Rejected saves are logged as warnings, everything unexpected as errors.
pub(crate) fn repository_failure(action: &str, err: RepositoryError) -> ServiceError {
    match err {
        RepositoryError::NotFound => ServiceError::NotFound,
        RepositoryError::ConstraintViolation(message) | RepositoryError::Conflict(message) => {
            log::warn!("Failed to {action}: {message}");
            ServiceError::Conflict(message)
        }
        RepositoryError::ValidationError(message) => {
            log::warn!("Failed to {action}: {message}");
            ServiceError::TypeConstraint(message)
        }
        other => {
            log::error!("Failed to {action}: {other}");
            ServiceError::Internal
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicates_surface_as_conflict() {
        let err = repository_failure(
            "create media",
            RepositoryError::ConstraintViolation("unique: media.media_number".into()),
        );
        assert_eq!(
            err,
            ServiceError::Conflict("unique: media.media_number".into())
        );
    }

    #[test]
    fn database_errors_are_internal() {
        let err = repository_failure(
            "list media",
            RepositoryError::Database(diesel::result::Error::RollbackTransaction),
        );
        assert_eq!(err, ServiceError::Internal);
    }
}
