//! `SQLite` implementation of [`BakedGoodRepository`].

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use ludex_app::ports::BakedGoodRepository;
use ludex_domain::baked_good::{BakedGood, NewBakedGood};
use ludex_domain::error::LudexError;
use ludex_domain::id::{BakedGoodId, BakeryId};
use ludex_domain::time;

use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`BakedGood`].
struct Wrapper(BakedGood);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<BakedGood> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self(BakedGood {
            id: BakedGoodId::from_i64(row.try_get("id")?),
            name: row.try_get("name")?,
            description: row.try_get("description")?,
            price: row.try_get("price")?,
            bakery_id: BakeryId::from_i64(row.try_get("bakery_id")?),
            created_at: row.try_get("created_at")?,
        }))
    }
}

const INSERT: &str =
    "INSERT INTO baked_goods (name, description, price, bakery_id, created_at) VALUES (?, ?, ?, ?, ?)";
const SELECT_BY_ID: &str = "SELECT * FROM baked_goods WHERE id = ?";
const SELECT_ALL: &str = "SELECT * FROM baked_goods";
const DELETE_BY_ID: &str = "DELETE FROM baked_goods WHERE id = ?";

/// `SQLite`-backed baked-good repository.
///
/// The `bakery_id` foreign key is enforced by the database.
pub struct SqliteBakedGoodRepository {
    pool: SqlitePool,
}

impl SqliteBakedGoodRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl BakedGoodRepository for SqliteBakedGoodRepository {
    fn create(
        &self,
        good: NewBakedGood,
    ) -> impl Future<Output = Result<BakedGood, LudexError>> + Send {
        let pool = self.pool.clone();
        async move {
            let created_at = time::now();
            let result = sqlx::query(INSERT)
                .bind(&good.name)
                .bind(&good.description)
                .bind(good.price)
                .bind(good.bakery_id.as_i64())
                .bind(created_at)
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(BakedGood {
                id: BakedGoodId::from_i64(result.last_insert_rowid()),
                name: good.name,
                description: good.description,
                price: good.price,
                bakery_id: good.bakery_id,
                created_at,
            })
        }
    }

    fn get_by_id(
        &self,
        id: BakedGoodId,
    ) -> impl Future<Output = Result<Option<BakedGood>, LudexError>> + Send {
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

    fn get_all(&self) -> impl Future<Output = Result<Vec<BakedGood>, LudexError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn delete(&self, id: BakedGoodId) -> impl Future<Output = Result<(), LudexError>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(DELETE_BY_ID)
                .bind(id.as_i64())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(())
        }
    }
}
