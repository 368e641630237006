//! JSON REST handlers for bakeries.

use axum::Json;
use axum::extract::{Form, Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use ludex_app::ports::{
    BakedGoodRepository, BakeryRepository, GameRepository, ReviewRepository, UserRepository,
};
use ludex_domain::bakery::{Bakery, BakeryPatch, NewBakery};
use ludex_domain::id::BakeryId;

use crate::error::ApiError;
use crate::state::AppState;

/// Form body for creating a bakery.
#[derive(Deserialize)]
pub struct CreateBakeryRequest {
    pub name: String,
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Bakery>>),
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
    Ok(Json<Bakery>),
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
    Created(Json<Bakery>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// Possible responses from the update endpoint.
pub enum UpdateResponse {
    Ok(Json<Bakery>),
}

impl IntoResponse for UpdateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /bakeries`
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
    let bakeries = state.bakery_service.list_bakeries().await?;
    Ok(ListResponse::Ok(Json(bakeries)))
}

/// `GET /bakeries/{id}`
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
    let bakery = state.bakery_service.get_bakery(BakeryId::from(id)).await?;
    Ok(GetResponse::Ok(Json(bakery)))
}

/// `POST /bakeries`
pub async fn create<UR, GR, RR, BR, BGR>(
    State(state): State<AppState<UR, GR, RR, BR, BGR>>,
    Form(req): Form<CreateBakeryRequest>,
) -> Result<CreateResponse, ApiError>
where
    UR: UserRepository + Send + Sync + 'static,
    GR: GameRepository + Send + Sync + 'static,
    RR: ReviewRepository + Send + Sync + 'static,
    BR: BakeryRepository + Send + Sync + 'static,
    BGR: BakedGoodRepository + Send + Sync + 'static,
{
    let created = state
        .bakery_service
        .create_bakery(NewBakery { name: req.name })
        .await?;
    Ok(CreateResponse::Created(Json(created)))
}

/// `PATCH /bakeries/{id}`
pub async fn update<UR, GR, RR, BR, BGR>(
    State(state): State<AppState<UR, GR, RR, BR, BGR>>,
    Path(id): Path<i64>,
    Form(patch): Form<BakeryPatch>,
) -> Result<UpdateResponse, ApiError>
where
    UR: UserRepository + Send + Sync + 'static,
    GR: GameRepository + Send + Sync + 'static,
    RR: ReviewRepository + Send + Sync + 'static,
    BR: BakeryRepository + Send + Sync + 'static,
    BGR: BakedGoodRepository + Send + Sync + 'static,
{
    let bakery = state
        .bakery_service
        .update_bakery(BakeryId::from(id), patch)
        .await?;
    Ok(UpdateResponse::Ok(Json(bakery)))
}
