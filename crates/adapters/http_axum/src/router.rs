//! Axum router assembly.

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use ludex_app::ports::{
    BakedGoodRepository, BakeryRepository, GameRepository, ReviewRepository, UserRepository,
};

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Resource routes mount at the root; the paths are the API's public
/// contract. Includes a [`TraceLayer`] that logs each HTTP request/response
/// at the `DEBUG` level using the `tracing` ecosystem.
pub fn build<UR, GR, RR, BR, BGR>(state: AppState<UR, GR, RR, BR, BGR>) -> Router
where
    UR: UserRepository + Send + Sync + 'static,
    GR: GameRepository + Send + Sync + 'static,
    RR: ReviewRepository + Send + Sync + 'static,
    BR: BakeryRepository + Send + Sync + 'static,
    BGR: BakedGoodRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(index))
        .route("/health", get(health_check))
        .merge(crate::api::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn index() -> &'static str {
    "Index for Game/Review/User API"
}

async fn health_check() -> &'static str {
    "OK"
}
