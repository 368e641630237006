//! Baked-good service — use-cases for managing baked goods.

use ludex_domain::baked_good::{BakedGood, NewBakedGood};
use ludex_domain::error::{LudexError, NotFoundError};
use ludex_domain::id::BakedGoodId;

use crate::ports::BakedGoodRepository;

/// Application service for baked-good operations.
pub struct BakedGoodService<R> {
    repo: R,
}

impl<R: BakedGoodRepository> BakedGoodService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Persist a new baked good.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository; a dangling
    /// `bakery_id` surfaces here as a foreign-key failure.
    pub async fn create_baked_good(&self, good: NewBakedGood) -> Result<BakedGood, LudexError> {
        self.repo.create(good).await
    }

    /// Look up a baked good by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`LudexError::NotFound`] when no baked good with `id` exists,
    /// or a storage error from the repository.
    pub async fn get_baked_good(&self, id: BakedGoodId) -> Result<BakedGood, LudexError> {
        self.repo.get_by_id(id).await?.ok_or_else(|| {
            NotFoundError {
                entity: "baked good",
                id: id.as_i64(),
            }
            .into()
        })
    }

    /// List all baked goods.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_baked_goods(&self) -> Result<Vec<BakedGood>, LudexError> {
        self.repo.get_all().await
    }

    /// Delete a baked good by id.
    ///
    /// # Errors
    ///
    /// Returns [`LudexError::NotFound`] if the baked good does not exist,
    /// or a storage error from the repository.
    pub async fn delete_baked_good(&self, id: BakedGoodId) -> Result<(), LudexError> {
        self.get_baked_good(id).await?;
        self.repo.delete(id).await
    }
}
