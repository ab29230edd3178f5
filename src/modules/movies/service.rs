use anyhow::Context;
use sqlx::SqlitePool;
use tracing::instrument;

use crate::modules::movies::model::{
    CreateMovieDto, GenreCount, Movie, MovieFilterParams, MovieStats, UpdateMovieDto,
};
use crate::utils::errors::AppError;

pub struct MovieService;

impl MovieService {
    #[instrument(skip(db, dto))]
    pub async fn create_movie(db: &SqlitePool, dto: CreateMovieDto) -> Result<Movie, AppError> {
        let movie = sqlx::query_as::<_, Movie>(
            r#"
            INSERT INTO movies (title, director, year, genre, rating)
            VALUES (?, ?, ?, ?, ?)
            RETURNING id, title, director, year, genre, rating
            "#,
        )
        .bind(dto.title.trim())
        .bind(dto.director.trim())
        .bind(dto.year)
        .bind(dto.genre)
        .bind(dto.rating)
        .fetch_one(db)
        .await
        .context("Failed to insert movie")
        .map_err(AppError::database)?;

        Ok(movie)
    }

    /// Fetches movies matching the tracker filters. Every filter is optional;
    /// absent filters are passed as NULL and short-circuit in SQL.
    #[instrument(skip(db))]
    pub async fn get_movies(
        db: &SqlitePool,
        filters: &MovieFilterParams,
        limit: i64,
        offset: i64,
    ) -> Result<(Vec<Movie>, i64), AppError> {
        let movies = sqlx::query_as::<_, Movie>(
            r#"
            SELECT id, title, director, year, genre, rating
            FROM movies
            WHERE (?1 IS NULL OR genre = ?1)
              AND (?2 IS NULL OR rating >= ?2)
              AND (?3 IS NULL OR year >= ?3)
              AND (?4 IS NULL OR year <= ?4)
            ORDER BY id
            LIMIT ?5 OFFSET ?6
            "#,
        )
        .bind(filters.genre)
        .bind(filters.min_rating)
        .bind(filters.year_from)
        .bind(filters.year_to)
        .bind(limit)
        .bind(offset)
        .fetch_all(db)
        .await
        .context("Failed to fetch movies")
        .map_err(AppError::database)?;

        let total = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*)
            FROM movies
            WHERE (?1 IS NULL OR genre = ?1)
              AND (?2 IS NULL OR rating >= ?2)
              AND (?3 IS NULL OR year >= ?3)
              AND (?4 IS NULL OR year <= ?4)
            "#,
        )
        .bind(filters.genre)
        .bind(filters.min_rating)
        .bind(filters.year_from)
        .bind(filters.year_to)
        .fetch_one(db)
        .await
        .context("Failed to count movies")
        .map_err(AppError::database)?;

        Ok((movies, total))
    }

    #[instrument(skip(db))]
    pub async fn get_movie_by_id(db: &SqlitePool, id: i64) -> Result<Movie, AppError> {
        let movie = sqlx::query_as::<_, Movie>(
            "SELECT id, title, director, year, genre, rating FROM movies WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(db)
        .await
        .context("Failed to fetch movie by ID")
        .map_err(AppError::database)?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Movie not found")))?;

        Ok(movie)
    }

    #[instrument(skip(db, dto))]
    pub async fn update_movie(
        db: &SqlitePool,
        id: i64,
        dto: UpdateMovieDto,
    ) -> Result<Movie, AppError> {
        let existing = Self::get_movie_by_id(db, id).await?;

        let title = dto
            .title
            .map(|t| t.trim().to_string())
            .unwrap_or(existing.title);
        let director = dto
            .director
            .map(|d| d.trim().to_string())
            .unwrap_or(existing.director);
        let year = dto.year.unwrap_or(existing.year);
        let genre = dto.genre.unwrap_or(existing.genre);
        let rating = dto.rating.unwrap_or(existing.rating);

        let movie = sqlx::query_as::<_, Movie>(
            r#"
            UPDATE movies
            SET title = ?, director = ?, year = ?, genre = ?, rating = ?
            WHERE id = ?
            RETURNING id, title, director, year, genre, rating
            "#,
        )
        .bind(&title)
        .bind(&director)
        .bind(year)
        .bind(genre)
        .bind(rating)
        .bind(id)
        .fetch_one(db)
        .await
        .context("Failed to update movie")
        .map_err(AppError::database)?;

        Ok(movie)
    }

    #[instrument(skip(db))]
    pub async fn delete_movie(db: &SqlitePool, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM movies WHERE id = ?")
            .bind(id)
            .execute(db)
            .await
            .context("Failed to delete movie")
            .map_err(AppError::database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow::anyhow!("Movie not found")));
        }

        Ok(())
    }

    /// Dashboard aggregations: count, mean rating, genre histogram, and the
    /// top-rated list.
    #[instrument(skip(db))]
    pub async fn get_stats(db: &SqlitePool) -> Result<MovieStats, AppError> {
        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM movies")
            .fetch_one(db)
            .await
            .context("Failed to count movies")
            .map_err(AppError::database)?;

        let average_rating =
            sqlx::query_scalar::<_, Option<f64>>("SELECT AVG(rating) FROM movies")
                .fetch_one(db)
                .await
                .context("Failed to average movie ratings")
                .map_err(AppError::database)?;

        let genres = sqlx::query_as::<_, GenreCount>(
            r#"
            SELECT genre, COUNT(*) AS count
            FROM movies
            GROUP BY genre
            ORDER BY count DESC, genre
            "#,
        )
        .fetch_all(db)
        .await
        .context("Failed to build genre histogram")
        .map_err(AppError::database)?;

        let top_rated = sqlx::query_as::<_, Movie>(
            r#"
            SELECT id, title, director, year, genre, rating
            FROM movies
            ORDER BY rating DESC, title
            LIMIT 10
            "#,
        )
        .fetch_all(db)
        .await
        .context("Failed to fetch top rated movies")
        .map_err(AppError::database)?;

        Ok(MovieStats {
            total,
            average_rating,
            genres,
            top_rated,
        })
    }
}
