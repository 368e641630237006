//! # ludex-adapter-storage-sqlite-sqlx
//!
//! `SQLite` persistence adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the repository port traits defined in `ludex-app::ports::storage`
//! - Manage `SQLite` connection pool lifecycle
//! - Run database migrations (sqlx embedded migrations)
//! - Map between domain types and database rows
//! - Enforce foreign keys (`foreign_keys` pragma) and stamp row timestamps
//!
//! ## Dependency rule
//! Depends on `ludex-app` (for port traits) and `ludex-domain` (for domain
//! types). The `app` and `domain` crates must never reference this adapter.

mod baked_good_repo;
mod bakery_repo;
mod error;
mod game_repo;
mod pool;
mod review_repo;
mod user_repo;

pub use baked_good_repo::SqliteBakedGoodRepository;
pub use bakery_repo::SqliteBakeryRepository;
pub use error::StorageError;
pub use game_repo::SqliteGameRepository;
pub use pool::{Config, Database};
pub use review_repo::SqliteReviewRepository;
pub use user_repo::SqliteUserRepository;
