//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod baked_goods;
#[allow(clippy::missing_errors_doc)]
pub mod bakeries;
#[allow(clippy::missing_errors_doc)]
pub mod games;
#[allow(clippy::missing_errors_doc)]
pub mod reviews;
#[allow(clippy::missing_errors_doc)]
pub mod users;

use axum::Router;
use axum::routing::get;
use serde::Serialize;

use ludex_app::ports::{
    BakedGoodRepository, BakeryRepository, GameRepository, ReviewRepository, UserRepository,
};

use crate::state::AppState;

/// JSON body confirming a successful delete.
#[derive(Serialize)]
pub struct DeleteConfirmation {
    pub delete_successful: bool,
    pub message: String,
}

impl DeleteConfirmation {
    /// Confirmation for a deleted record, e.g. `"Review deleted."`.
    #[must_use]
    pub fn new(noun: &str) -> Self {
        Self {
            delete_successful: true,
            message: format!("{noun} deleted."),
        }
    }
}

/// Build the resource sub-router.
pub fn routes<UR, GR, RR, BR, BGR>() -> Router<AppState<UR, GR, RR, BR, BGR>>
where
    UR: UserRepository + Send + Sync + 'static,
    GR: GameRepository + Send + Sync + 'static,
    RR: ReviewRepository + Send + Sync + 'static,
    BR: BakeryRepository + Send + Sync + 'static,
    BGR: BakedGoodRepository + Send + Sync + 'static,
{
    Router::new()
        // Games
        .route(
            "/games",
            get(games::list::<UR, GR, RR, BR, BGR>).post(games::create::<UR, GR, RR, BR, BGR>),
        )
        .route("/games/{id}", get(games::get::<UR, GR, RR, BR, BGR>))
        // Users
        .route(
            "/users",
            get(users::list::<UR, GR, RR, BR, BGR>).post(users::create::<UR, GR, RR, BR, BGR>),
        )
        .route("/users/{id}", get(users::get::<UR, GR, RR, BR, BGR>))
        // Reviews
        .route(
            "/reviews",
            get(reviews::list::<UR, GR, RR, BR, BGR>)
                .post(reviews::create::<UR, GR, RR, BR, BGR>),
        )
        .route(
            "/reviews/{id}",
            get(reviews::get::<UR, GR, RR, BR, BGR>)
                .patch(reviews::update::<UR, GR, RR, BR, BGR>)
                .delete(reviews::delete::<UR, GR, RR, BR, BGR>),
        )
        // Bakeries
        .route(
            "/bakeries",
            get(bakeries::list::<UR, GR, RR, BR, BGR>)
                .post(bakeries::create::<UR, GR, RR, BR, BGR>),
        )
        .route(
            "/bakeries/{id}",
            get(bakeries::get::<UR, GR, RR, BR, BGR>)
                .patch(bakeries::update::<UR, GR, RR, BR, BGR>),
        )
        // Baked goods
        .route(
            "/baked_goods",
            get(baked_goods::list::<UR, GR, RR, BR, BGR>)
                .post(baked_goods::create::<UR, GR, RR, BR, BGR>),
        )
        .route(
            "/baked_goods/{id}",
            get(baked_goods::get::<UR, GR, RR, BR, BGR>)
                .delete(baked_goods::delete::<UR, GR, RR, BR, BGR>),
        )
}
