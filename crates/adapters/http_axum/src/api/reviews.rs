//! JSON REST handlers for reviews.

use axum::Json;
use axum::extract::{Form, Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use ludex_app::ports::{
    BakedGoodRepository, BakeryRepository, GameRepository, ReviewRepository, UserRepository,
};
use ludex_domain::id::{GameId, ReviewId, UserId};
use ludex_domain::review::{NewReview, Review, ReviewPatch};

use crate::api::DeleteConfirmation;
use crate::error::ApiError;
use crate::state::AppState;

/// Form body for creating a review.
///
/// No score bounds, no coercion beyond the integer parse — a field either
/// deserializes or the request is rejected by the extractor.
#[derive(Deserialize)]
pub struct CreateReviewRequest {
    pub score: i64,
    pub comment: String,
    pub game_id: i64,
    pub user_id: i64,
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Review>>),
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
    Ok(Json<Review>),
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
    Created(Json<Review>),
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
    Ok(Json<Review>),
}

impl IntoResponse for UpdateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
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

/// `GET /reviews`
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
    let reviews = state.review_service.list_reviews().await?;
    Ok(ListResponse::Ok(Json(reviews)))
}

/// `GET /reviews/{id}`
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
    let review = state.review_service.get_review(ReviewId::from(id)).await?;
    Ok(GetResponse::Ok(Json(review)))
}

/// `POST /reviews`
pub async fn create<UR, GR, RR, BR, BGR>(
    State(state): State<AppState<UR, GR, RR, BR, BGR>>,
    Form(req): Form<CreateReviewRequest>,
) -> Result<CreateResponse, ApiError>
where
    UR: UserRepository + Send + Sync + 'static,
    GR: GameRepository + Send + Sync + 'static,
    RR: ReviewRepository + Send + Sync + 'static,
    BR: BakeryRepository + Send + Sync + 'static,
    BGR: BakedGoodRepository + Send + Sync + 'static,
{
    let review = NewReview {
        score: req.score,
        comment: req.comment,
        game_id: GameId::from(req.game_id),
        user_id: UserId::from(req.user_id),
    };

    let created = state.review_service.create_review(review).await?;
    Ok(CreateResponse::Created(Json(created)))
}

/// `PATCH /reviews/{id}`
///
/// The body deserializes straight into [`ReviewPatch`], so the allow-list
/// and the unknown-field rejection live in the domain type, not here.
pub async fn update<UR, GR, RR, BR, BGR>(
    State(state): State<AppState<UR, GR, RR, BR, BGR>>,
    Path(id): Path<i64>,
    Form(patch): Form<ReviewPatch>,
) -> Result<UpdateResponse, ApiError>
where
    UR: UserRepository + Send + Sync + 'static,
    GR: GameRepository + Send + Sync + 'static,
    RR: ReviewRepository + Send + Sync + 'static,
    BR: BakeryRepository + Send + Sync + 'static,
    BGR: BakedGoodRepository + Send + Sync + 'static,
{
    let review = state
        .review_service
        .update_review(ReviewId::from(id), patch)
        .await?;
    Ok(UpdateResponse::Ok(Json(review)))
}

/// `DELETE /reviews/{id}`
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
        .review_service
        .delete_review(ReviewId::from(id))
        .await?;
    Ok(DeleteResponse::Deleted(Json(DeleteConfirmation::new(
        "Review",
    ))))
}
