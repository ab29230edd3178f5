use anyhow::Context;
use chrono::Utc;
use sqlx::SqlitePool;
use tracing::instrument;

use crate::modules::cakes::model::Cake;
use crate::modules::orders::model::{Order, OrderItem, OrderRecord, PlaceOrderDto};
use crate::utils::errors::AppError;

pub struct OrderService;

impl OrderService {
    /// Places an order. Prices come from the current catalog, never from the
    /// client; the order row and all item rows are written in one
    /// transaction.
    #[instrument(skip(db, dto))]
    pub async fn place_order(db: &SqlitePool, dto: PlaceOrderDto) -> Result<Order, AppError> {
        let mut items: Vec<OrderItem> = Vec::with_capacity(dto.items.len());
        let mut total = 0.0;

        for item in &dto.items {
            let cake = sqlx::query_as::<_, Cake>(
                "SELECT id, name, price, image_url, created_at, updated_at FROM cakes WHERE id = ?",
            )
            .bind(&item.cake_id)
            .fetch_optional(db)
            .await
            .context("Failed to look up ordered cake")
            .map_err(AppError::database)?
            .ok_or_else(|| {
                AppError::not_found(anyhow::anyhow!("Cake '{}' not found", item.cake_id))
            })?;

            let line_total = cake.price * item.quantity as f64;
            total += line_total;
            items.push(OrderItem {
                cake_id: cake.id,
                cake_name: cake.name,
                quantity: item.quantity,
                unit_price: cake.price,
                line_total,
            });
        }

        let mut tx = db.begin().await.map_err(AppError::database)?;

        let record = sqlx::query_as::<_, OrderRecord>(
            r#"
            INSERT INTO orders (customer_name, customer_surname, customer_email, customer_phone, total, created_at)
            VALUES (?, ?, ?, ?, ?, ?)
            RETURNING id, customer_name, customer_surname, customer_email, customer_phone, total, created_at
            "#,
        )
        .bind(dto.customer.name.trim())
        .bind(dto.customer.surname.trim())
        .bind(dto.customer.email.trim())
        .bind(dto.customer.phone.trim())
        .bind(total)
        .bind(Utc::now())
        .fetch_one(&mut *tx)
        .await
        .context("Failed to insert order")
        .map_err(AppError::database)?;

        for item in &items {
            sqlx::query(
                r#"
                INSERT INTO order_items (order_id, cake_id, cake_name, quantity, unit_price, line_total)
                VALUES (?, ?, ?, ?, ?, ?)
                "#,
            )
            .bind(record.id)
            .bind(&item.cake_id)
            .bind(&item.cake_name)
            .bind(item.quantity)
            .bind(item.unit_price)
            .bind(item.line_total)
            .execute(&mut *tx)
            .await
            .context("Failed to insert order item")
            .map_err(AppError::database)?;
        }

        tx.commit().await.map_err(AppError::database)?;

        Ok(Order { record, items })
    }

    #[instrument(skip(db))]
    pub async fn get_orders(
        db: &SqlitePool,
        limit: i64,
        offset: i64,
    ) -> Result<(Vec<Order>, i64), AppError> {
        let records = sqlx::query_as::<_, OrderRecord>(
            r#"
            SELECT id, customer_name, customer_surname, customer_email, customer_phone, total, created_at
            FROM orders
            ORDER BY created_at DESC, id DESC
            LIMIT ? OFFSET ?
            "#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(db)
        .await
        .context("Failed to fetch orders")
        .map_err(AppError::database)?;

        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM orders")
            .fetch_one(db)
            .await
            .context("Failed to count orders")
            .map_err(AppError::database)?;

        let mut orders = Vec::with_capacity(records.len());
        for record in records {
            let items = Self::get_items(db, record.id).await?;
            orders.push(Order { record, items });
        }

        Ok((orders, total))
    }

    #[instrument(skip(db))]
    pub async fn get_order_by_id(db: &SqlitePool, id: i64) -> Result<Order, AppError> {
        let record = sqlx::query_as::<_, OrderRecord>(
            r#"
            SELECT id, customer_name, customer_surname, customer_email, customer_phone, total, created_at
            FROM orders
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(db)
        .await
        .context("Failed to fetch order by ID")
        .map_err(AppError::database)?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Order not found")))?;

        let items = Self::get_items(db, record.id).await?;
        Ok(Order { record, items })
    }

    async fn get_items(db: &SqlitePool, order_id: i64) -> Result<Vec<OrderItem>, AppError> {
        sqlx::query_as::<_, OrderItem>(
            r#"
            SELECT cake_id, cake_name, quantity, unit_price, line_total
            FROM order_items
            WHERE order_id = ?
            ORDER BY id
            "#,
        )
        .bind(order_id)
        .fetch_all(db)
        .await
        .context("Failed to fetch order items")
        .map_err(AppError::database)
    }
}
