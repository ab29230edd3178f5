use axum::{Json, extract::State};
use serde_json::json;
use tracing::instrument;

use crate::modules::auth::controller::ErrorResponse;
use crate::modules::shop::model::ShopSummary;
use crate::modules::shop::service::ShopService;
use crate::state::AppState;
use crate::utils::errors::AppError;

/// Shop home-page counters
#[utoipa::path(
    get,
    path = "/api/shop/summary",
    responses(
        (status = 200, description = "Cake, order, and review counts", body = ShopSummary),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Shop"
)]
#[instrument(skip(state))]
pub async fn get_shop_summary(
    State(state): State<AppState>,
) -> Result<Json<ShopSummary>, AppError> {
    let summary = ShopService::get_summary(&state.db).await?;
    Ok(Json(summary))
}

/// Liveness check
#[utoipa::path(
    get,
    path = "/health",
    responses((status = 200, description = "Service is up")),
    tag = "Shop"
)]
pub async fn health() -> Json<serde_json::Value> {
    Json(json!({"status": "ok"}))
}
