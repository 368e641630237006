//! User service — use-cases for managing users.

use ludex_domain::error::{LudexError, NotFoundError};
use ludex_domain::id::UserId;
use ludex_domain::user::{NewUser, User};

use crate::ports::UserRepository;

/// Application service for user operations.
pub struct UserService<R> {
    repo: R,
}

impl<R: UserRepository> UserService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Persist a new user.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn create_user(&self, user: NewUser) -> Result<User, LudexError> {
        self.repo.create(user).await
    }

    /// Look up a user by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`LudexError::NotFound`] when no user with `id` exists,
    /// or a storage error from the repository.
    pub async fn get_user(&self, id: UserId) -> Result<User, LudexError> {
        self.repo.get_by_id(id).await?.ok_or_else(|| {
            NotFoundError {
                entity: "user",
                id: id.as_i64(),
            }
            .into()
        })
    }

    /// List all users.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_users(&self) -> Result<Vec<User>, LudexError> {
        self.repo.get_all().await
    }
}
