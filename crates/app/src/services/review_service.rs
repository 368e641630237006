//! Review service — use-cases for managing reviews.

use ludex_domain::error::{LudexError, NotFoundError};
use ludex_domain::id::ReviewId;
use ludex_domain::review::{NewReview, Review, ReviewPatch};

use crate::ports::ReviewRepository;

/// Application service for review CRUD operations.
pub struct ReviewService<R> {
    repo: R,
}

impl<R: ReviewRepository> ReviewService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Persist a new review.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository; a dangling
    /// `game_id` or `user_id` surfaces here as a foreign-key failure.
    pub async fn create_review(&self, review: NewReview) -> Result<Review, LudexError> {
        self.repo.create(review).await
    }

    /// Look up a review by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`LudexError::NotFound`] when no review with `id` exists,
    /// or a storage error from the repository.
    pub async fn get_review(&self, id: ReviewId) -> Result<Review, LudexError> {
        self.repo.get_by_id(id).await?.ok_or_else(|| {
            NotFoundError {
                entity: "record",
                id: id.as_i64(),
            }
            .into()
        })
    }

    /// List all reviews.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_reviews(&self) -> Result<Vec<Review>, LudexError> {
        self.repo.get_all().await
    }

    /// Apply a partial update to an existing review.
    ///
    /// Only the fields present in `patch` are overwritten.
    ///
    /// # Errors
    ///
    /// Returns [`LudexError::NotFound`] if the review does not exist,
    /// or a storage error from the repository.
    pub async fn update_review(
        &self,
        id: ReviewId,
        patch: ReviewPatch,
    ) -> Result<Review, LudexError> {
        let mut review = self.get_review(id).await?;
        review.apply(patch);
        self.repo.update(review).await
    }

    /// Delete a review by id.
    ///
    /// # Errors
    ///
    /// Returns [`LudexError::NotFound`] if the review does not exist,
    /// or a storage error from the repository.
    pub async fn delete_review(&self, id: ReviewId) -> Result<(), LudexError> {
        self.get_review(id).await?;
        self.repo.delete(id).await
    }
}
