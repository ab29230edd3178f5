use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
};
use tracing::instrument;

use crate::modules::auth::controller::ErrorResponse;
use crate::modules::reviews::model::{CreateReviewDto, PaginatedReviewsResponse, Review};
use crate::modules::reviews::service::ReviewService;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::pagination::{PaginationMeta, PaginationParams};
use crate::validator::ValidatedJson;

/// Leave a review
#[utoipa::path(
    post,
    path = "/api/reviews",
    request_body = CreateReviewDto,
    responses(
        (status = 201, description = "Review added", body = Review),
        (status = 422, description = "Validation error", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Reviews"
)]
#[instrument(skip(state, dto))]
pub async fn create_review(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateReviewDto>,
) -> Result<(StatusCode, Json<Review>), AppError> {
    let review = ReviewService::create_review(&state.db, dto).await?;
    Ok((StatusCode::CREATED, Json(review)))
}

/// List customer reviews, newest first
#[utoipa::path(
    get,
    path = "/api/reviews",
    params(PaginationParams),
    responses(
        (status = 200, description = "Paginated reviews", body = PaginatedReviewsResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Reviews"
)]
#[instrument(skip(state))]
pub async fn get_reviews(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<PaginatedReviewsResponse>, AppError> {
    let (reviews, total) =
        ReviewService::get_reviews(&state.db, params.limit(), params.offset()).await?;

    Ok(Json(PaginatedReviewsResponse {
        data: reviews,
        meta: PaginationMeta::new(total, params.limit(), params.page()),
    }))
}
