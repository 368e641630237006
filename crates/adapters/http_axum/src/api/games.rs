//! JSON REST handlers for games.

use axum::Json;
use axum::extract::{Form, Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use ludex_app::ports::{
    BakedGoodRepository, BakeryRepository, GameRepository, ReviewRepository, UserRepository,
};
use ludex_domain::game::{Game, NewGame};
use ludex_domain::id::GameId;

use crate::error::ApiError;
use crate::state::AppState;

/// Form body for creating a game.
#[derive(Deserialize)]
pub struct CreateGameRequest {
    pub title: String,
    pub genre: String,
    pub platform: String,
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Game>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get endpoint.
pub enum GetResponse {
    Ok(Json<Game>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created(Json<Game>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// `GET /games`
pub async fn list<UR, GR, RR, BR, BGR>(
    State(state): State<AppState<UR, GR, RR, BR, BGR>>,
) -> Result<ListResponse, ApiError>
where
    UR: UserRepository + Send + Sync + 'static,
    GR: GameRepository + Send + Sync + 'static,
    RR: ReviewRepository + Send + Sync + 'static,
    BR: BakeryRepository + Send + Sync + 'static,
    BGR: BakedGoodRepository + Send + Sync + 'static,
{
    let games = state.game_service.list_games().await?;
    Ok(ListResponse::Ok(Json(games)))
}

/// `GET /games/{id}`
///
/// An absent id answers 404 here; the service returns a typed not-found
/// instead of letting the handler dereference a missing row.
pub async fn get<UR, GR, RR, BR, BGR>(
    State(state): State<AppState<UR, GR, RR, BR, BGR>>,
    Path(id): Path<i64>,
) -> Result<GetResponse, ApiError>
where
    UR: UserRepository + Send + Sync + 'static,
    GR: GameRepository + Send + Sync + 'static,
    RR: ReviewRepository + Send + Sync + 'static,
    BR: BakeryRepository + Send + Sync + 'static,
    BGR: BakedGoodRepository + Send + Sync + 'static,
{
    let game = state.game_service.get_game(GameId::from(id)).await?;
    Ok(GetResponse::Ok(Json(game)))
}

/// `POST /games`
pub async fn create<UR, GR, RR, BR, BGR>(
    State(state): State<AppState<UR, GR, RR, BR, BGR>>,
    Form(req): Form<CreateGameRequest>,
) -> Result<CreateResponse, ApiError>
where
    UR: UserRepository + Send + Sync + 'static,
    GR: GameRepository + Send + Sync + 'static,
    RR: ReviewRepository + Send + Sync + 'static,
    BR: BakeryRepository + Send + Sync + 'static,
    BGR: BakedGoodRepository + Send + Sync + 'static,
{
    let game = NewGame::builder()
        .title(req.title)
        .genre(req.genre)
        .platform(req.platform)
        .build();

    let created = state.game_service.create_game(game).await?;
    Ok(CreateResponse::Created(Json(created)))
}
