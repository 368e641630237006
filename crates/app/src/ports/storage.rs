//! Storage ports — repository traits for persistence.
//!
//! "Absent" is `Ok(None)` at this layer, never an error; the services decide
//! what a miss means. Each trait exposes exactly the operations some HTTP
//! route exercises, so the surfaces are deliberately uneven (games have no
//! `delete`, baked goods have no `update`).

use std::future::Future;

use ludex_domain::baked_good::{BakedGood, NewBakedGood};
use ludex_domain::bakery::{Bakery, NewBakery};
use ludex_domain::error::LudexError;
use ludex_domain::game::{Game, NewGame};
use ludex_domain::id::{BakedGoodId, BakeryId, GameId, ReviewId, UserId};
use ludex_domain::review::{NewReview, Review};
use ludex_domain::user::{NewUser, User};

/// Repository for persisting and querying [`User`]s.
pub trait UserRepository {
    /// Insert a new user; the database assigns the id.
    fn create(&self, user: NewUser) -> impl Future<Output = Result<User, LudexError>> + Send;

    /// Get a user by its unique identifier.
    fn get_by_id(
        &self,
        id: UserId,
    ) -> impl Future<Output = Result<Option<User>, LudexError>> + Send;

    /// Get all users.
    fn get_all(&self) -> impl Future<Output = Result<Vec<User>, LudexError>> + Send;
}

/// Repository for persisting and querying [`Game`]s.
pub trait GameRepository {
    /// Insert a new game; the database assigns the id.
    fn create(&self, game: NewGame) -> impl Future<Output = Result<Game, LudexError>> + Send;

    /// Get a game by its unique identifier.
    fn get_by_id(
        &self,
        id: GameId,
    ) -> impl Future<Output = Result<Option<Game>, LudexError>> + Send;

    /// Get all games.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Game>, LudexError>> + Send;
}

/// Repository for persisting and querying [`Review`]s.
pub trait ReviewRepository {
    /// Insert a new review; the database assigns the id and enforces the
    /// `game_id` / `user_id` foreign keys.
    fn create(
        &self,
        review: NewReview,
    ) -> impl Future<Output = Result<Review, LudexError>> + Send;

    /// Get a review by its unique identifier.
    fn get_by_id(
        &self,
        id: ReviewId,
    ) -> impl Future<Output = Result<Option<Review>, LudexError>> + Send;

    /// Get all reviews.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Review>, LudexError>> + Send;

    /// Overwrite an existing review.
    fn update(&self, review: Review) -> impl Future<Output = Result<Review, LudexError>> + Send;

    /// Delete a review by its unique identifier.
    fn delete(&self, id: ReviewId) -> impl Future<Output = Result<(), LudexError>> + Send;
}

/// Repository for persisting and querying [`Bakery`]s.
pub trait BakeryRepository {
    /// Insert a new bakery; the database assigns the id and the adapter
    /// stamps `created_at` / `updated_at`.
    fn create(
        &self,
        bakery: NewBakery,
    ) -> impl Future<Output = Result<Bakery, LudexError>> + Send;

    /// Get a bakery by its unique identifier.
    fn get_by_id(
        &self,
        id: BakeryId,
    ) -> impl Future<Output = Result<Option<Bakery>, LudexError>> + Send;

    /// Get all bakeries.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Bakery>, LudexError>> + Send;

    /// Overwrite an existing bakery, refreshing `updated_at`.
    fn update(&self, bakery: Bakery) -> impl Future<Output = Result<Bakery, LudexError>> + Send;
}

/// Repository for persisting and querying [`BakedGood`]s.
pub trait BakedGoodRepository {
    /// Insert a new baked good; the database assigns the id and enforces
    /// the `bakery_id` foreign key.
    fn create(
        &self,
        good: NewBakedGood,
    ) -> impl Future<Output = Result<BakedGood, LudexError>> + Send;

    /// Get a baked good by its unique identifier.
    fn get_by_id(
        &self,
        id: BakedGoodId,
    ) -> impl Future<Output = Result<Option<BakedGood>, LudexError>> + Send;

    /// Get all baked goods.
    fn get_all(&self) -> impl Future<Output = Result<Vec<BakedGood>, LudexError>> + Send;

    /// Delete a baked good by its unique identifier.
    fn delete(&self, id: BakedGoodId) -> impl Future<Output = Result<(), LudexError>> + Send;
}
