//! JSON REST handlers for baked goods.

use axum::Json;
use axum::extract::{Form, Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use ludex_app::ports::{
    BakedGoodRepository, BakeryRepository, GameRepository, ReviewRepository, UserRepository,
};
use ludex_domain::baked_good::{BakedGood, NewBakedGood};
use ludex_domain::id::{BakedGoodId, BakeryId};

use crate::api::DeleteConfirmation;
use crate::error::ApiError;
use crate::state::AppState;

/// Form body for creating a baked good.
#[derive(Deserialize)]
pub struct CreateBakedGoodRequest {
    pub name: String,
    pub description: String,
    pub bakery_id: i64,
    pub price: i64,
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<BakedGood>>),
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
    Ok(Json<BakedGood>),
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
    Created(Json<BakedGood>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// Possible responses from the delete endpoint.
pub enum DeleteResponse {
    Deleted(Json<DeleteConfirmation>),
}

impl IntoResponse for DeleteResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Deleted(json) => json.into_response(),
        }
    }
}

/// `GET /baked_goods`
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
    let goods = state.baked_good_service.list_baked_goods().await?;
    Ok(ListResponse::Ok(Json(goods)))
}

/// `GET /baked_goods/{id}`
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
    let good = state
        .baked_good_service
        .get_baked_good(BakedGoodId::from(id))
        .await?;
    Ok(GetResponse::Ok(Json(good)))
}

/// `POST /baked_goods`
pub async fn create<UR, GR, RR, BR, BGR>(
    State(state): State<AppState<UR, GR, RR, BR, BGR>>,
    Form(req): Form<CreateBakedGoodRequest>,
) -> Result<CreateResponse, ApiError>
where
    UR: UserRepository + Send + Sync + 'static,
    GR: GameRepository + Send + Sync + 'static,
    RR: ReviewRepository + Send + Sync + 'static,
    BR: BakeryRepository + Send + Sync + 'static,
    BGR: BakedGoodRepository + Send + Sync + 'static,
{
    let good = NewBakedGood {
        name: req.name,
        description: req.description,
        price: req.price,
        bakery_id: BakeryId::from(req.bakery_id),
    };

    let created = state.baked_good_service.create_baked_good(good).await?;
    Ok(CreateResponse::Created(Json(created)))
}

/// `DELETE /baked_goods/{id}`
pub async fn delete<UR, GR, RR, BR, BGR>(
    State(state): State<AppState<UR, GR, RR, BR, BGR>>,
    Path(id): Path<i64>,
) -> Result<DeleteResponse, ApiError>
where
    UR: UserRepository + Send + Sync + 'static,
    GR: GameRepository + Send + Sync + 'static,
    RR: ReviewRepository + Send + Sync + 'static,
    BR: BakeryRepository + Send + Sync + 'static,
    BGR: BakedGoodRepository + Send + Sync + 'static,
{
    state
        .baked_good_service
        .delete_baked_good(BakedGoodId::from(id))
        .await?;
    Ok(DeleteResponse::Deleted(Json(DeleteConfirmation::new(
        "Baked good",
    ))))
}
