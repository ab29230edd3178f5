use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::utils::pagination::PaginationMeta;

/// Movie genres offered by the tracker.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema,
)]
pub enum Genre {
    Action,
    Comedy,
    Drama,
    Horror,
    #[serde(rename = "Sci-Fi")]
    #[sqlx(rename = "Sci-Fi")]
    SciFi,
    Thriller,
    Musical,
    Other,
}

#[derive(Debug, Serialize, FromRow, ToSchema)]
pub struct Movie {
    pub id: i64,
    pub title: String,
    pub director: String,
    pub year: i64,
    pub genre: Genre,
    pub rating: i64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PaginatedMoviesResponse {
    pub data: Vec<Movie>,
    pub meta: PaginationMeta,
}

#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct CreateMovieDto {
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: String,
    #[validate(length(min = 1, max = 100, message = "Director must be 1-100 characters"))]
    pub director: String,
    #[validate(range(min = 1900, max = 2100, message = "Year must be between 1900 and 2100"))]
    pub year: i64,
    pub genre: Genre,
    #[validate(range(min = 1, max = 5, message = "Rating must be between 1 and 5"))]
    pub rating: i64,
}

#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct UpdateMovieDto {
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: Option<String>,
    #[validate(length(min = 1, max = 100, message = "Director must be 1-100 characters"))]
    pub director: Option<String>,
    #[validate(range(min = 1900, max = 2100, message = "Year must be between 1900 and 2100"))]
    pub year: Option<i64>,
    pub genre: Option<Genre>,
    #[validate(range(min = 1, max = 5, message = "Rating must be between 1 and 5"))]
    pub rating: Option<i64>,
}

/// The tracker sidebar's filters, applied server-side.
#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct MovieFilterParams {
    pub genre: Option<Genre>,
    pub min_rating: Option<i64>,
    pub year_from: Option<i64>,
    pub year_to: Option<i64>,
}

#[derive(Debug, Serialize, FromRow, ToSchema)]
pub struct GenreCount {
    pub genre: Genre,
    pub count: i64,
}

/// Aggregations for the analysis dashboard.
#[derive(Debug, Serialize, ToSchema)]
pub struct MovieStats {
    pub total: i64,
    pub average_rating: Option<f64>,
    pub genres: Vec<GenreCount>,
    pub top_rated: Vec<Movie>,
}
