use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde_json::json;
use tracing::instrument;

use crate::modules::auth::controller::ErrorResponse;
use crate::modules::movies::model::{
    CreateMovieDto, Movie, MovieFilterParams, MovieStats, PaginatedMoviesResponse, UpdateMovieDto,
};
use crate::modules::movies::service::MovieService;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::pagination::{PaginationMeta, PaginationParams};
use crate::validator::ValidatedJson;

/// Add a movie to the tracker
#[utoipa::path(
    post,
    path = "/api/movies",
    request_body = CreateMovieDto,
    responses(
        (status = 201, description = "Movie added", body = Movie),
        (status = 400, description = "Bad request - malformed body or unknown genre", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Movies"
)]
#[instrument(skip(state, dto))]
pub async fn create_movie(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateMovieDto>,
) -> Result<(StatusCode, Json<Movie>), AppError> {
    let movie = MovieService::create_movie(&state.db, dto).await?;
    Ok((StatusCode::CREATED, Json(movie)))
}

/// List movies with optional genre, rating, and year filters
#[utoipa::path(
    get,
    path = "/api/movies",
    params(MovieFilterParams, PaginationParams),
    responses(
        (status = 200, description = "Paginated, filtered movie list", body = PaginatedMoviesResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Movies"
)]
#[instrument(skip(state))]
pub async fn get_movies(
    State(state): State<AppState>,
    Query(filters): Query<MovieFilterParams>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<PaginatedMoviesResponse>, AppError> {
    let (movies, total) =
        MovieService::get_movies(&state.db, &filters, params.limit(), params.offset()).await?;

    Ok(Json(PaginatedMoviesResponse {
        data: movies,
        meta: PaginationMeta::new(total, params.limit(), params.page()),
    }))
}

/// Summary statistics over the whole tracker
#[utoipa::path(
    get,
    path = "/api/movies/stats",
    responses(
        (status = 200, description = "Counts, mean rating, genre histogram, top rated", body = MovieStats),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Movies"
)]
#[instrument(skip(state))]
pub async fn get_movie_stats(
    State(state): State<AppState>,
) -> Result<Json<MovieStats>, AppError> {
    let stats = MovieService::get_stats(&state.db).await?;
    Ok(Json(stats))
}

/// Fetch a single movie
#[utoipa::path(
    get,
    path = "/api/movies/{id}",
    params(("id" = i64, Path, description = "Movie ID")),
    responses(
        (status = 200, description = "Movie details", body = Movie),
        (status = 404, description = "Movie not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Movies"
)]
#[instrument(skip(state))]
pub async fn get_movie(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Movie>, AppError> {
    let movie = MovieService::get_movie_by_id(&state.db, id).await?;
    Ok(Json(movie))
}

/// Update a movie
#[utoipa::path(
    put,
    path = "/api/movies/{id}",
    params(("id" = i64, Path, description = "Movie ID")),
    request_body = UpdateMovieDto,
    responses(
        (status = 200, description = "Movie updated", body = Movie),
        (status = 404, description = "Movie not found", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Movies"
)]
#[instrument(skip(state, dto))]
pub async fn update_movie(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    ValidatedJson(dto): ValidatedJson<UpdateMovieDto>,
) -> Result<Json<Movie>, AppError> {
    let movie = MovieService::update_movie(&state.db, id, dto).await?;
    Ok(Json(movie))
}

/// Remove a movie from the tracker
#[utoipa::path(
    delete,
    path = "/api/movies/{id}",
    params(("id" = i64, Path, description = "Movie ID")),
    responses(
        (status = 200, description = "Movie removed"),
        (status = 404, description = "Movie not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Movies"
)]
#[instrument(skip(state))]
pub async fn delete_movie(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<serde_json::Value>, AppError> {
    MovieService::delete_movie(&state.db, id).await?;
    Ok(Json(json!({"message": "Movie removed"})))
}
