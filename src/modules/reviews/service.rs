use anyhow::Context;
use chrono::Utc;
use sqlx::SqlitePool;
use tracing::instrument;

use crate::modules::reviews::model::{CreateReviewDto, Review};
use crate::utils::errors::AppError;

pub struct ReviewService;

impl ReviewService {
    #[instrument(skip(db, dto))]
    pub async fn create_review(db: &SqlitePool, dto: CreateReviewDto) -> Result<Review, AppError> {
        let review = sqlx::query_as::<_, Review>(
            r#"
            INSERT INTO reviews (name, comment, rating, created_at)
            VALUES (?, ?, ?, ?)
            RETURNING id, name, comment, rating, created_at
            "#,
        )
        .bind(dto.name.trim())
        .bind(dto.comment.trim())
        .bind(dto.rating)
        .bind(Utc::now())
        .fetch_one(db)
        .await
        .context("Failed to insert review")
        .map_err(AppError::database)?;

        Ok(review)
    }

    #[instrument(skip(db))]
    pub async fn get_reviews(
        db: &SqlitePool,
        limit: i64,
        offset: i64,
    ) -> Result<(Vec<Review>, i64), AppError> {
        let reviews = sqlx::query_as::<_, Review>(
            r#"
            SELECT id, name, comment, rating, created_at
            FROM reviews
            ORDER BY created_at DESC, id DESC
            LIMIT ? OFFSET ?
            "#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(db)
        .await
        .context("Failed to fetch reviews")
        .map_err(AppError::database)?;

        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM reviews")
            .fetch_one(db)
            .await
            .context("Failed to count reviews")
            .map_err(AppError::database)?;

        Ok((reviews, total))
    }
}
