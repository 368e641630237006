//! # ludexd — ludex daemon
//!
//! Composition root that wires all adapters together and starts the server.
//!
//! ## Responsibilities
//! - Parse configuration (TOML file, env vars)
//! - Initialize tracing
//! - Initialize the `SQLite` connection pool and run migrations
//! - Construct repository implementations (adapters)
//! - Construct application services, injecting repositories via port traits
//! - Build the axum router, injecting application services
//! - Bind to a TCP port and serve
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use ludex_adapter_http_axum::state::AppState;
use ludex_adapter_storage_sqlite_sqlx::{
    Config as StorageConfig, SqliteBakedGoodRepository, SqliteBakeryRepository,
    SqliteGameRepository, SqliteReviewRepository, SqliteUserRepository,
};
use ludex_app::services::baked_good_service::BakedGoodService;
use ludex_app::services::bakery_service::BakeryService;
use ludex_app::services::game_service::GameService;
use ludex_app::services::review_service::ReviewService;
use ludex_app::services::user_service::UserService;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .init();

    // Database
    let db = StorageConfig {
        database_url: config.database_url().to_string(),
    }
    .build()
    .await?;
    let pool = db.pool().clone();

    // Repositories
    let user_repo = SqliteUserRepository::new(pool.clone());
    let game_repo = SqliteGameRepository::new(pool.clone());
    let review_repo = SqliteReviewRepository::new(pool.clone());
    let bakery_repo = SqliteBakeryRepository::new(pool.clone());
    let baked_good_repo = SqliteBakedGoodRepository::new(pool);

    // Services
    let user_service = UserService::new(user_repo);
    let game_service = GameService::new(game_repo);
    let review_service = ReviewService::new(review_repo);
    let bakery_service = BakeryService::new(bakery_repo);
    let baked_good_service = BakedGoodService::new(baked_good_repo);

    // HTTP
    let state = AppState::new(
        user_service,
        game_service,
        review_service,
        bakery_service,
        baked_good_service,
    );
    let app = ludex_adapter_http_axum::router::build(state);

    let bind_addr = config.bind_addr();
    tracing::info!(%bind_addr, "ludexd listening");

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
