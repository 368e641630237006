//! `SQLite` implementation of [`GameRepository`].

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use ludex_app::ports::GameRepository;
use ludex_domain::error::LudexError;
use ludex_domain::game::{Game, NewGame};
use ludex_domain::id::GameId;

use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`Game`].
struct Wrapper(Game);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<Game> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self(Game {
            id: GameId::from_i64(row.try_get("id")?),
            title: row.try_get("title")?,
            genre: row.try_get("genre")?,
            platform: row.try_get("platform")?,
        }))
    }
}

const INSERT: &str = "INSERT INTO games (title, genre, platform) VALUES (?, ?, ?)";
const SELECT_BY_ID: &str = "SELECT * FROM games WHERE id = ?";
const SELECT_ALL: &str = "SELECT * FROM games";

/// `SQLite`-backed game repository.
pub struct SqliteGameRepository {
    pool: SqlitePool,
}

impl SqliteGameRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl GameRepository for SqliteGameRepository {
    fn create(&self, game: NewGame) -> impl Future<Output = Result<Game, LudexError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(INSERT)
                .bind(&game.title)
                .bind(&game.genre)
                .bind(&game.platform)
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Game {
                id: GameId::from_i64(result.last_insert_rowid()),
                title: game.title,
                genre: game.genre,
                platform: game.platform,
            })
        }
    }

    fn get_by_id(
        &self,
        id: GameId,
    ) -> impl Future<Output = Result<Option<Game>, LudexError>> + Send {
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

    fn get_all(&self) -> impl Future<Output = Result<Vec<Game>, LudexError>> + Send {
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
