use anyhow::Context;
use sqlx::SqlitePool;
use tracing::instrument;

use crate::modules::shop::model::ShopSummary;
use crate::utils::errors::AppError;

pub struct ShopService;

impl ShopService {
    #[instrument(skip(db))]
    pub async fn get_summary(db: &SqlitePool) -> Result<ShopSummary, AppError> {
        let cakes = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM cakes")
            .fetch_one(db)
            .await
            .context("Failed to count cakes")
            .map_err(AppError::database)?;

        let orders = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM orders")
            .fetch_one(db)
            .await
            .context("Failed to count orders")
            .map_err(AppError::database)?;

        let reviews = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM reviews")
            .fetch_one(db)
            .await
            .context("Failed to count reviews")
            .map_err(AppError::database)?;

        let average_review_rating =
            sqlx::query_scalar::<_, Option<f64>>("SELECT AVG(rating) FROM reviews")
                .fetch_one(db)
                .await
                .context("Failed to average review ratings")
                .map_err(AppError::database)?;

        Ok(ShopSummary {
            cakes,
            orders,
            reviews,
            average_review_rating,
        })
    }
}
