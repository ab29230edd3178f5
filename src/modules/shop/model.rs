use serde::Serialize;
use utoipa::ToSchema;

/// The shop home-page counters.
#[derive(Debug, Serialize, ToSchema)]
pub struct ShopSummary {
    pub cakes: i64,
    pub orders: i64,
    pub reviews: i64,
    pub average_review_rating: Option<f64>,
}
