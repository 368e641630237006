//! `SQLite` implementation of [`UserRepository`].

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use ludex_app::ports::UserRepository;
use ludex_domain::error::LudexError;
use ludex_domain::id::UserId;
use ludex_domain::user::{NewUser, User};

use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`User`].
struct Wrapper(User);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<User> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self(User {
            id: UserId::from_i64(row.try_get("id")?),
            name: row.try_get("name")?,
        }))
    }
}

const INSERT: &str = "INSERT INTO users (name) VALUES (?)";
const SELECT_BY_ID: &str = "SELECT * FROM users WHERE id = ?";
const SELECT_ALL: &str = "SELECT * FROM users";

/// `SQLite`-backed user repository.
pub struct SqliteUserRepository {
    pool: SqlitePool,
}

impl SqliteUserRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl UserRepository for SqliteUserRepository {
    fn create(&self, user: NewUser) -> impl Future<Output = Result<User, LudexError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(INSERT)
                .bind(&user.name)
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(User {
                id: UserId::from_i64(result.last_insert_rowid()),
                name: user.name,
            })
        }
    }

    fn get_by_id(
        &self,
        id: UserId,
    ) -> impl Future<Output = Result<Option<User>, LudexError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
                .bind(id.as_i64())
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::maybe(row))
        }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<User>, LudexError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }
}
