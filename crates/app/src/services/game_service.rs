//! Game service — use-cases for managing games.

use ludex_domain::error::{LudexError, NotFoundError};
use ludex_domain::game::{Game, NewGame};
use ludex_domain::id::GameId;

use crate::ports::GameRepository;

/// Application service for game operations.
pub struct GameService<R> {
    repo: R,
}

impl<R: GameRepository> GameService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Persist a new game.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn create_game(&self, game: NewGame) -> Result<Game, LudexError> {
        self.repo.create(game).await
    }

    /// Look up a game by id, returning an error if not found.
    ///
    /// A miss is a typed not-found here, so the HTTP layer answers 404
    /// instead of dereferencing an absent row.
    ///
    /// # Errors
    ///
    /// Returns [`LudexError::NotFound`] when no game with `id` exists,
    /// or a storage error from the repository.
    pub async fn get_game(&self, id: GameId) -> Result<Game, LudexError> {
        self.repo.get_by_id(id).await?.ok_or_else(|| {
            NotFoundError {
                entity: "game",
                id: id.as_i64(),
            }
            .into()
        })
    }

    /// List all games.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_games(&self) -> Result<Vec<Game>, LudexError> {
        self.repo.get_all().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::future::Future;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicI64, Ordering};

    struct InMemoryGameRepo {
        store: Mutex<HashMap<GameId, Game>>,
        next_id: AtomicI64,
    }

    impl Default for InMemoryGameRepo {
        fn default() -> Self {
            Self {
                store: Mutex::new(HashMap::new()),
                next_id: AtomicI64::new(1),
            }
        }
    }

    impl GameRepository for InMemoryGameRepo {
        fn create(&self, game: NewGame) -> impl Future<Output = Result<Game, LudexError>> + Send {
            let game = Game {
                id: GameId::from_i64(self.next_id.fetch_add(1, Ordering::SeqCst)),
                title: game.title,
                genre: game.genre,
                platform: game.platform,
            };
            let mut store = self.store.lock().unwrap();
            store.insert(game.id, game.clone());
            async { Ok(game) }
        }

        fn get_by_id(
            &self,
            id: GameId,
        ) -> impl Future<Output = Result<Option<Game>, LudexError>> + Send {
            let store = self.store.lock().unwrap();
            let result = store.get(&id).cloned();
            async { Ok(result) }
        }

        fn get_all(&self) -> impl Future<Output = Result<Vec<Game>, LudexError>> + Send {
            let store = self.store.lock().unwrap();
            let result: Vec<Game> = store.values().cloned().collect();
            async { Ok(result) }
        }
    }

    #[tokio::test]
    async fn should_create_and_retrieve_game() {
        let service = GameService::new(InMemoryGameRepo::default());
        let created = service
            .create_game(NewGame::builder().title("Hades").genre("Roguelike").build())
            .await
            .unwrap();

        let fetched = service.get_game(created.id).await.unwrap();
        assert_eq!(fetched.title, "Hades");
    }

    #[tokio::test]
    async fn should_return_not_found_when_game_absent() {
        let service = GameService::new(InMemoryGameRepo::default());

        let result = service.get_game(GameId::from_i64(123)).await;

        assert!(matches!(
            result,
            Err(LudexError::NotFound(NotFoundError { entity: "game", .. }))
        ));
    }
}
