//! Bakery service — use-cases for managing bakeries.

use ludex_domain::bakery::{Bakery, BakeryPatch, NewBakery};
use ludex_domain::error::{LudexError, NotFoundError};
use ludex_domain::id::BakeryId;

use crate::ports::BakeryRepository;

/// Application service for bakery CRUD operations.
pub struct BakeryService<R> {
    repo: R,
}

impl<R: BakeryRepository> BakeryService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Persist a new bakery.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn create_bakery(&self, bakery: NewBakery) -> Result<Bakery, LudexError> {
        self.repo.create(bakery).await
    }

    /// Look up a bakery by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`LudexError::NotFound`] when no bakery with `id` exists,
    /// or a storage error from the repository.
    pub async fn get_bakery(&self, id: BakeryId) -> Result<Bakery, LudexError> {
        self.repo.get_by_id(id).await?.ok_or_else(|| {
            NotFoundError {
                entity: "bakery",
                id: id.as_i64(),
            }
            .into()
        })
    }

    /// List all bakeries.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_bakeries(&self) -> Result<Vec<Bakery>, LudexError> {
        self.repo.get_all().await
    }

    /// Apply a partial update to an existing bakery.
    ///
    /// # Errors
    ///
    /// Returns [`LudexError::NotFound`] if the bakery does not exist,
    /// or a storage error from the repository.
    pub async fn update_bakery(
        &self,
        id: BakeryId,
        patch: BakeryPatch,
    ) -> Result<Bakery, LudexError> {
        let mut bakery = self.get_bakery(id).await?;
        bakery.apply(patch);
        self.repo.update(bakery).await
    }
}
