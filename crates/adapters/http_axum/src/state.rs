//! Shared application state for axum handlers.

use std::sync::Arc;

use ludex_app::ports::{
    BakedGoodRepository, BakeryRepository, GameRepository, ReviewRepository, UserRepository,
};
use ludex_app::services::baked_good_service::BakedGoodService;
use ludex_app::services::bakery_service::BakeryService;
use ludex_app::services::game_service::GameService;
use ludex_app::services::review_service::ReviewService;
use ludex_app::services::user_service::UserService;

/// Application state shared across all axum handlers.
///
/// Generic over the repository types to avoid dynamic dispatch. This is the
/// explicitly passed per-request handle that replaces a process-wide
/// database session: every handler reaches storage only through the services
/// carried here. `Clone` is implemented manually so the underlying types
/// themselves do not need to be `Clone` — only the `Arc` wrappers are cloned.
pub struct AppState<UR, GR, RR, BR, BGR> {
    /// User CRUD service.
    pub user_service: Arc<UserService<UR>>,
    /// Game CRUD service.
    pub game_service: Arc<GameService<GR>>,
    /// Review CRUD service.
    pub review_service: Arc<ReviewService<RR>>,
    /// Bakery CRUD service.
    pub bakery_service: Arc<BakeryService<BR>>,
    /// Baked-good CRUD service.
    pub baked_good_service: Arc<BakedGoodService<BGR>>,
}

impl<UR, GR, RR, BR, BGR> Clone for AppState<UR, GR, RR, BR, BGR> {
    fn clone(&self) -> Self {
        Self {
            user_service: Arc::clone(&self.user_service),
            game_service: Arc::clone(&self.game_service),
            review_service: Arc::clone(&self.review_service),
            bakery_service: Arc::clone(&self.bakery_service),
            baked_good_service: Arc::clone(&self.baked_good_service),
        }
    }
}

impl<UR, GR, RR, BR, BGR> AppState<UR, GR, RR, BR, BGR>
where
    UR: UserRepository + Send + Sync + 'static,
    GR: GameRepository + Send + Sync + 'static,
    RR: ReviewRepository + Send + Sync + 'static,
    BR: BakeryRepository + Send + Sync + 'static,
    BGR: BakedGoodRepository + Send + Sync + 'static,
{
    /// Create a new application state from service instances.
    pub fn new(
        user_service: UserService<UR>,
        game_service: GameService<GR>,
        review_service: ReviewService<RR>,
        bakery_service: BakeryService<BR>,
        baked_good_service: BakedGoodService<BGR>,
    ) -> Self {
        Self {
            user_service: Arc::new(user_service),
            game_service: Arc::new(game_service),
            review_service: Arc::new(review_service),
            bakery_service: Arc::new(bakery_service),
            baked_good_service: Arc::new(baked_good_service),
        }
    }
}
