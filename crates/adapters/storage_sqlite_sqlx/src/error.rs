//! Storage-specific error type wrapping sqlx errors.

use clima_domain::error::ClimaError;

/// Errors originating from the `SQLite` storage layer.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// A query or connection failed.
    #[error("database error")]
    Database(#[from] sqlx::Error),

    /// A stored observation date was not `YYYY-MM-DD`.
    #[error("invalid stored date")]
    Date(#[from] clima_domain::date::DateError),

    /// Failed to run migrations.
    #[error("migration error")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

impl From<StorageError> for ClimaError {
    fn from(err: StorageError) -> Self {
        Self::Storage(Box::new(err))
    }
}
