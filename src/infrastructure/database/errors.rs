use crate::domain::shared::errors::DomainError;
use tracing::error;

const UNIQUE_VIOLATION: &str = "23505";
const FOREIGN_KEY_VIOLATION: &str = "23503";

/// Maps a sqlx failure to the domain, logging it with the operation that failed.
pub fn map_db_error(operation: &str, err: sqlx::Error) -> DomainError {
    if let sqlx::Error::Database(db_err) = &err {
        match db_err.code().as_deref() {
            Some(UNIQUE_VIOLATION) => {
                return DomainError::Conflict(format!(
                    "{} violates a uniqueness constraint",
                    operation
                ));
            }
            Some(FOREIGN_KEY_VIOLATION) => {
                return DomainError::NotFound(format!(
                    "{} references a row that no longer exists",
                    operation
                ));
            }
            _ => {}
        }
    }
    error!("{} failed: {}", operation, err);
    DomainError::InfrastructureError(format!("{} failed: {}", operation, err))
}
