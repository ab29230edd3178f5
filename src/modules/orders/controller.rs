use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use tracing::instrument;

use crate::middleware::auth::AdminUser;
use crate::modules::auth::controller::ErrorResponse;
use crate::modules::orders::model::{Order, PaginatedOrdersResponse, PlaceOrderDto};
use crate::modules::orders::service::OrderService;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::pagination::{PaginationMeta, PaginationParams};
use crate::validator::ValidatedJson;

/// Place an order for cakes from the menu
#[utoipa::path(
    post,
    path = "/api/orders",
    request_body = PlaceOrderDto,
    responses(
        (status = 201, description = "Order placed; the body is the receipt", body = Order),
        (status = 404, description = "An ordered cake does not exist", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Orders"
)]
#[instrument(skip(state, dto))]
pub async fn place_order(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<PlaceOrderDto>,
) -> Result<(StatusCode, Json<Order>), AppError> {
    let order = OrderService::place_order(&state.db, dto).await?;
    Ok((StatusCode::CREATED, Json(order)))
}

/// List all orders, newest first
#[utoipa::path(
    get,
    path = "/api/orders",
    params(PaginationParams),
    responses(
        (status = 200, description = "Paginated orders with receipts", body = PaginatedOrdersResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Orders"
)]
#[instrument(skip(state))]
pub async fn get_orders(
    State(state): State<AppState>,
    _admin: AdminUser,
    Query(params): Query<PaginationParams>,
) -> Result<Json<PaginatedOrdersResponse>, AppError> {
    let (orders, total) =
        OrderService::get_orders(&state.db, params.limit(), params.offset()).await?;

    Ok(Json(PaginatedOrdersResponse {
        data: orders,
        meta: PaginationMeta::new(total, params.limit(), params.page()),
    }))
}

/// Fetch a single order receipt
#[utoipa::path(
    get,
    path = "/api/orders/{id}",
    params(("id" = i64, Path, description = "Order ID")),
    responses(
        (status = 200, description = "Order receipt", body = Order),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Order not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Orders"
)]
#[instrument(skip(state))]
pub async fn get_order(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<i64>,
) -> Result<Json<Order>, AppError> {
    let order = OrderService::get_order_by_id(&state.db, id).await?;
    Ok(Json(order))
}
