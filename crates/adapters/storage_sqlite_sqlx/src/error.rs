//! Storage-specific error type wrapping sqlx errors.

use ludex_domain::error::LudexError;

/// Errors originating from the `SQLite` storage layer.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// A query or connection failed. Foreign-key violations land here too.
    #[error("database error")]
    Database(#[from] sqlx::Error),

    /// Failed to run migrations.
    #[error("migration error")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

impl From<StorageError> for LudexError {
    fn from(err: StorageError) -> Self {
        Self::Storage(Box::new(err))
    }
}
