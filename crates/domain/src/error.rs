//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into [`LudexError`]
//! via `From`; handlers map the variants deterministically to HTTP status
//! codes.

use std::error::Error as StdError;

/// Top-level error returned by application services and repositories.
#[derive(Debug, thiserror::Error)]
pub enum LudexError {
    /// A lookup by id matched no row.
    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    /// The persistence layer failed (connection, query, constraint).
    #[error("storage error")]
    Storage(#[source] Box<dyn StdError + Send + Sync>),
}

/// A lookup by id matched no row.
///
/// The display text is the client-facing not-found message, so `entity`
/// holds the human noun used in that sentence ("game", "bakery", "record").
#[derive(Debug, thiserror::Error)]
#[error("This {entity} does not exist in our database. Please try again.")]
pub struct NotFoundError {
    /// Human noun for the missing record.
    pub entity: &'static str,
    /// The id that matched nothing.
    pub id: i64,
}
