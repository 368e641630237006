//! `SQLite` implementation of [`ReviewRepository`].

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use ludex_app::ports::ReviewRepository;
use ludex_domain::error::LudexError;
use ludex_domain::id::{GameId, ReviewId, UserId};
use ludex_domain::review::{NewReview, Review};

use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`Review`].
struct Wrapper(Review);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<Review> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self(Review {
            id: ReviewId::from_i64(row.try_get("id")?),
            score: row.try_get("score")?,
            comment: row.try_get("comment")?,
            game_id: GameId::from_i64(row.try_get("game_id")?),
            user_id: UserId::from_i64(row.try_get("user_id")?),
        }))
    }
}

const INSERT: &str = "INSERT INTO reviews (score, comment, game_id, user_id) VALUES (?, ?, ?, ?)";
const SELECT_BY_ID: &str = "SELECT * FROM reviews WHERE id = ?";
const SELECT_ALL: &str = "SELECT * FROM reviews";
const UPDATE: &str =
    "UPDATE reviews SET score = ?, comment = ?, game_id = ?, user_id = ? WHERE id = ?";
const DELETE_BY_ID: &str = "DELETE FROM reviews WHERE id = ?";

/// `SQLite`-backed review repository.
///
/// The `game_id` / `user_id` foreign keys are enforced by the database;
/// inserting or repointing to an absent row fails the query.
pub struct SqliteReviewRepository {
    pool: SqlitePool,
}

impl SqliteReviewRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl ReviewRepository for SqliteReviewRepository {
    fn create(&self, review: NewReview) -> impl Future<Output = Result<Review, LudexError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(INSERT)
                .bind(review.score)
                .bind(&review.comment)
                .bind(review.game_id.as_i64())
                .bind(review.user_id.as_i64())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Review {
                id: ReviewId::from_i64(result.last_insert_rowid()),
                score: review.score,
                comment: review.comment,
                game_id: review.game_id,
                user_id: review.user_id,
            })
        }
    }

    fn get_by_id(
        &self,
        id: ReviewId,
    ) -> impl Future<Output = Result<Option<Review>, LudexError>> + Send {
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

    fn get_all(&self) -> impl Future<Output = Result<Vec<Review>, LudexError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn update(&self, review: Review) -> impl Future<Output = Result<Review, LudexError>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(UPDATE)
                .bind(review.score)
                .bind(&review.comment)
                .bind(review.game_id.as_i64())
                .bind(review.user_id.as_i64())
                .bind(review.id.as_i64())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(review)
        }
    }

    fn delete(&self, id: ReviewId) -> impl Future<Output = Result<(), LudexError>> + Send {
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
