//! JSON REST handlers for users.

use axum::Json;
use axum::extract::{Form, Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use ludex_app::ports::{
    BakedGoodRepository, BakeryRepository, GameRepository, ReviewRepository, UserRepository,
};
use ludex_domain::id::UserId;
use ludex_domain::user::{NewUser, User};

use crate::error::ApiError;
use crate::state::AppState;

/// Form body for creating a user.
#[derive(Deserialize)]
pub struct CreateUserRequest {
    pub name: String,
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<User>>),
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
    Ok(Json<User>),
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
    Created(Json<User>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// `GET /users`
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
    let users = state.user_service.list_users().await?;
    Ok(ListResponse::Ok(Json(users)))
}

/// `GET /users/{id}`
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
    let user = state.user_service.get_user(UserId::from(id)).await?;
    Ok(GetResponse::Ok(Json(user)))
}

/// `POST /users`
pub async fn create<UR, GR, RR, BR, BGR>(
    State(state): State<AppState<UR, GR, RR, BR, BGR>>,
    Form(req): Form<CreateUserRequest>,
) -> Result<CreateResponse, ApiError>
where
    UR: UserRepository + Send + Sync + 'static,
    GR: GameRepository + Send + Sync + 'static,
    RR: ReviewRepository + Send + Sync + 'static,
    BR: BakeryRepository + Send + Sync + 'static,
    BGR: BakedGoodRepository + Send + Sync + 'static,
{
    let created = state
        .user_service
        .create_user(NewUser { name: req.name })
        .await?;
    Ok(CreateResponse::Created(Json(created)))
}
