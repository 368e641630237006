//! `SQLite` implementation of [`BakeryRepository`].

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use ludex_app::ports::BakeryRepository;
use ludex_domain::bakery::{Bakery, NewBakery};
use ludex_domain::error::LudexError;
use ludex_domain::id::BakeryId;
use ludex_domain::time;

use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`Bakery`].
struct Wrapper(Bakery);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<Bakery> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self(Bakery {
            id: BakeryId::from_i64(row.try_get("id")?),
            name: row.try_get("name")?,
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
        }))
    }
}

const INSERT: &str = "INSERT INTO bakeries (name, created_at, updated_at) VALUES (?, ?, ?)";
const SELECT_BY_ID: &str = "SELECT * FROM bakeries WHERE id = ?";
const SELECT_ALL: &str = "SELECT * FROM bakeries";
const UPDATE: &str = "UPDATE bakeries SET name = ?, updated_at = ? WHERE id = ?";

/// `SQLite`-backed bakery repository.
///
/// Row timestamps are stamped here: `created_at` / `updated_at` at insert,
/// `updated_at` refreshed on every update.
pub struct SqliteBakeryRepository {
    pool: SqlitePool,
}

impl SqliteBakeryRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl BakeryRepository for SqliteBakeryRepository {
    fn create(&self, bakery: NewBakery) -> impl Future<Output = Result<Bakery, LudexError>> + Send {
        let pool = self.pool.clone();
        async move {
            let ts = time::now();
            let result = sqlx::query(INSERT)
                .bind(&bakery.name)
                .bind(ts)
                .bind(ts)
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Bakery {
                id: BakeryId::from_i64(result.last_insert_rowid()),
                name: bakery.name,
                created_at: ts,
                updated_at: ts,
            })
        }
    }

    fn get_by_id(
        &self,
        id: BakeryId,
    ) -> impl Future<Output = Result<Option<Bakery>, LudexError>> + Send {
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

    fn get_all(&self) -> impl Future<Output = Result<Vec<Bakery>, LudexError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn update(&self, bakery: Bakery) -> impl Future<Output = Result<Bakery, LudexError>> + Send {
        let pool = self.pool.clone();
        async move {
            let updated_at = time::now();
            sqlx::query(UPDATE)
                .bind(&bakery.name)
                .bind(updated_at)
                .bind(bakery.id.as_i64())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Bakery {
                updated_at,
                ..bakery
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::Config;

    async fn setup() -> SqliteBakeryRepository {
        let db = Config {
            database_url: "sqlite::memory:".to_string(),
        }
        .build()
        .await
        .unwrap();
        SqliteBakeryRepository::new(db.pool().clone())
    }

    fn test_bakery() -> NewBakery {
        NewBakery {
            name: "Crumb & Co".to_string(),
        }
    }

    #[tokio::test]
    async fn should_create_and_retrieve_bakery() {
        let repo = setup().await;

        let created = repo.create(test_bakery()).await.unwrap();

        let fetched = repo.get_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(fetched.id, created.id);
        assert_eq!(fetched.name, "Crumb & Co");
    }

    #[tokio::test]
    async fn should_return_none_when_bakery_not_found() {
        let repo = setup().await;
        let result = repo.get_by_id(BakeryId::from_i64(42)).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn should_refresh_updated_at_when_updating() {
        let repo = setup().await;
        let mut bakery = repo.create(test_bakery()).await.unwrap();
        let created_at = bakery.created_at;

        bakery.name = "New Name".to_string();
        let updated = repo.update(bakery).await.unwrap();

        assert_eq!(updated.name, "New Name");
        assert!(updated.updated_at >= created_at);

        let fetched = repo.get_by_id(updated.id).await.unwrap().unwrap();
        assert_eq!(fetched.name, "New Name");
        assert!(fetched.updated_at >= fetched.created_at);
    }

    #[tokio::test]
    async fn should_list_all_bakeries() {
        let repo = setup().await;
        repo.create(test_bakery()).await.unwrap();
        repo.create(NewBakery {
            name: "Flour Power".to_string(),
        })
        .await
        .unwrap();

        let all = repo.get_all().await.unwrap();
        assert_eq!(all.len(), 2);
    }
}
