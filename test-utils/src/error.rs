use sea_orm::DbErr;
use thiserror::Error;

/// Errors that can occur during test environment setup.
#[derive(Error, Debug)]
pub enum TestError {
    /// Database connection or schema setup failure.
    ///
    /// Raised when the in-memory SQLite database cannot be created or when
    /// executing a CREATE TABLE statement fails.
    #[error(transparent)]
    Database(#[from] DbErr),
}
