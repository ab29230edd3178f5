use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde_json::json;
use tracing::instrument;

use crate::middleware::auth::AdminUser;
use crate::modules::auth::controller::ErrorResponse;
use crate::modules::cakes::model::{Cake, CreateCakeDto, PaginatedCakesResponse, UpdateCakeDto};
use crate::modules::cakes::service::CakeService;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::pagination::{PaginationMeta, PaginationParams};
use crate::validator::ValidatedJson;

/// Add a cake to the menu
#[utoipa::path(
    post,
    path = "/api/cakes",
    request_body = CreateCakeDto,
    responses(
        (status = 201, description = "Cake added to the menu", body = Cake),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 409, description = "A cake with this name already exists", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Cakes"
)]
#[instrument(skip(state, dto))]
pub async fn create_cake(
    State(state): State<AppState>,
    _admin: AdminUser,
    ValidatedJson(dto): ValidatedJson<CreateCakeDto>,
) -> Result<(StatusCode, Json<Cake>), AppError> {
    let cake = CakeService::create_cake(&state.db, dto).await?;
    Ok((StatusCode::CREATED, Json(cake)))
}

/// Browse the cake menu
#[utoipa::path(
    get,
    path = "/api/cakes",
    params(PaginationParams),
    responses(
        (status = 200, description = "Paginated cake menu", body = PaginatedCakesResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Cakes"
)]
#[instrument(skip(state))]
pub async fn get_cakes(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<PaginatedCakesResponse>, AppError> {
    let (cakes, total) =
        CakeService::get_cakes(&state.db, params.limit(), params.offset()).await?;

    Ok(Json(PaginatedCakesResponse {
        data: cakes,
        meta: PaginationMeta::new(total, params.limit(), params.page()),
    }))
}

/// Fetch a single cake
#[utoipa::path(
    get,
    path = "/api/cakes/{id}",
    params(("id" = String, Path, description = "Cake slug")),
    responses(
        (status = 200, description = "Cake details", body = Cake),
        (status = 404, description = "Cake not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Cakes"
)]
#[instrument(skip(state))]
pub async fn get_cake(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Cake>, AppError> {
    let cake = CakeService::get_cake_by_id(&state.db, &id).await?;
    Ok(Json(cake))
}

/// Update a cake's name, price, or image
#[utoipa::path(
    put,
    path = "/api/cakes/{id}",
    params(("id" = String, Path, description = "Cake slug")),
    request_body = UpdateCakeDto,
    responses(
        (status = 200, description = "Cake updated", body = Cake),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Cake not found", body = ErrorResponse),
        (status = 409, description = "Another cake with this name already exists", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Cakes"
)]
#[instrument(skip(state, dto))]
pub async fn update_cake(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<String>,
    ValidatedJson(dto): ValidatedJson<UpdateCakeDto>,
) -> Result<Json<Cake>, AppError> {
    let cake = CakeService::update_cake(&state.db, &id, dto).await?;
    Ok(Json(cake))
}

/// Remove a cake from the menu
#[utoipa::path(
    delete,
    path = "/api/cakes/{id}",
    params(("id" = String, Path, description = "Cake slug")),
    responses(
        (status = 200, description = "Cake removed"),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Cake not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Cakes"
)]
#[instrument(skip(state))]
pub async fn delete_cake(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    CakeService::delete_cake(&state.db, &id).await?;
    Ok(Json(json!({"message": "Cake removed from the menu"})))
}
