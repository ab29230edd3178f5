use anyhow::Context;
use chrono::Utc;
use sqlx::SqlitePool;
use tracing::instrument;

use crate::modules::cakes::model::{Cake, CreateCakeDto, UpdateCakeDto, slugify};
use crate::utils::errors::AppError;

pub struct CakeService;

impl CakeService {
    #[instrument(skip(db, dto))]
    pub async fn create_cake(db: &SqlitePool, dto: CreateCakeDto) -> Result<Cake, AppError> {
        let name = dto.name.trim().to_string();
        let id = slugify(&name);
        let now = Utc::now();

        let existing = sqlx::query_scalar::<_, String>("SELECT id FROM cakes WHERE id = ?")
            .bind(&id)
            .fetch_optional(db)
            .await
            .context("Failed to check for existing cake")
            .map_err(AppError::database)?;

        if existing.is_some() {
            return Err(AppError::conflict(anyhow::anyhow!(
                "A cake named '{}' already exists",
                name
            )));
        }

        let cake = sqlx::query_as::<_, Cake>(
            r#"
            INSERT INTO cakes (id, name, price, image_url, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?)
            RETURNING id, name, price, image_url, created_at, updated_at
            "#,
        )
        .bind(&id)
        .bind(&name)
        .bind(dto.price)
        .bind(&dto.image_url)
        .bind(now)
        .bind(now)
        .fetch_one(db)
        .await
        .map_err(|e| {
            // A concurrent create can slip past the slug pre-check and land
            // on the UNIQUE constraint instead.
            AppError::database_conflict(e, &format!("A cake named '{}' already exists", name))
        })?;

        Ok(cake)
    }

    #[instrument(skip(db))]
    pub async fn get_cakes(
        db: &SqlitePool,
        limit: i64,
        offset: i64,
    ) -> Result<(Vec<Cake>, i64), AppError> {
        let cakes = sqlx::query_as::<_, Cake>(
            r#"
            SELECT id, name, price, image_url, created_at, updated_at
            FROM cakes
            ORDER BY name
            LIMIT ? OFFSET ?
            "#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(db)
        .await
        .context("Failed to fetch cakes")
        .map_err(AppError::database)?;

        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM cakes")
            .fetch_one(db)
            .await
            .context("Failed to count cakes")
            .map_err(AppError::database)?;

        Ok((cakes, total))
    }

    #[instrument(skip(db))]
    pub async fn get_cake_by_id(db: &SqlitePool, id: &str) -> Result<Cake, AppError> {
        let cake = sqlx::query_as::<_, Cake>(
            r#"
            SELECT id, name, price, image_url, created_at, updated_at
            FROM cakes
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(db)
        .await
        .context("Failed to fetch cake by ID")
        .map_err(AppError::database)?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Cake not found")))?;

        Ok(cake)
    }

    #[instrument(skip(db, dto))]
    pub async fn update_cake(
        db: &SqlitePool,
        id: &str,
        dto: UpdateCakeDto,
    ) -> Result<Cake, AppError> {
        let existing = Self::get_cake_by_id(db, id).await?;

        let name = dto
            .name
            .map(|n| n.trim().to_string())
            .unwrap_or(existing.name);
        let price = dto.price.unwrap_or(existing.price);
        // Outer None: field absent, keep the image. Some(None): explicit
        // null, clear it.
        let image_url = match dto.image_url {
            Some(patch) => patch,
            None => existing.image_url,
        };

        let new_id = slugify(&name);
        if new_id != id {
            let collision = sqlx::query_scalar::<_, String>("SELECT id FROM cakes WHERE id = ?")
                .bind(&new_id)
                .fetch_optional(db)
                .await
                .context("Failed to check for slug collision")
                .map_err(AppError::database)?;

            if collision.is_some() {
                return Err(AppError::conflict(anyhow::anyhow!(
                    "Another cake named '{}' already exists",
                    name
                )));
            }
        }

        let cake = sqlx::query_as::<_, Cake>(
            r#"
            UPDATE cakes
            SET id = ?, name = ?, price = ?, image_url = ?, updated_at = ?
            WHERE id = ?
            RETURNING id, name, price, image_url, created_at, updated_at
            "#,
        )
        .bind(&new_id)
        .bind(&name)
        .bind(price)
        .bind(&image_url)
        .bind(Utc::now())
        .bind(id)
        .fetch_one(db)
        .await
        .map_err(|e| {
            AppError::database_conflict(e, &format!("Another cake named '{}' already exists", name))
        })?;

        Ok(cake)
    }

    #[instrument(skip(db))]
    pub async fn delete_cake(db: &SqlitePool, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM cakes WHERE id = ?")
            .bind(id)
            .execute(db)
            .await
            .context("Failed to delete cake")
            .map_err(AppError::database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow::anyhow!("Cake not found")));
        }

        Ok(())
    }
}
