use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use crate::utils::pagination::PaginationMeta;

#[derive(Debug, Serialize, FromRow, ToSchema)]
pub struct Review {
    pub id: i64,
    pub name: String,
    pub comment: String,
    pub rating: i64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PaginatedReviewsResponse {
    pub data: Vec<Review>,
    pub meta: PaginationMeta,
}

#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct CreateReviewDto {
    #[validate(length(min = 1, max = 100, message = "Your name is required"))]
    pub name: String,
    #[validate(length(min = 1, max = 2000, message = "Your review is required"))]
    pub comment: String,
    #[validate(range(min = 1, max = 5, message = "Rating must be between 1 and 5"))]
    pub rating: i64,
}
