// Shared database module
pub mod connection;
pub mod repositories;

pub use connection::*;
pub use repositories::*;

use thiserror::Error;

/// 저장소 계층 에러
/// Storage layer errors
///
/// `Duplicate` is reported when an insert loses against a unique constraint
/// (token value collision, or a concurrent first-issue for the same user).
/// Callers treat it as "the row already exists" and re-read.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Duplicate row")]
    Duplicate,

    #[error("Database error: {0}")]
    Database(String),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            // PostgreSQL unique_violation
            if db_err.code().as_deref() == Some("23505") {
                return StoreError::Duplicate;
            }
        }
        StoreError::Database(err.to_string())
    }
}
