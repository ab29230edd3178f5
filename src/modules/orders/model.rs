use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use crate::utils::pagination::PaginationMeta;

/// Phone numbers accept an optional leading `+` followed by 7-20 characters
/// drawn from digits, spaces, dashes, and parentheses.
fn validate_phone(value: &str) -> Result<(), ValidationError> {
    let rest = value.strip_prefix('+').unwrap_or(value);
    let len = rest.chars().count();
    let valid_chars = rest
        .chars()
        .all(|c| c.is_ascii_digit() || c == ' ' || c == '-' || c == '(' || c == ')');

    if (7..=20).contains(&len) && valid_chars {
        Ok(())
    } else {
        Err(ValidationError::new("phone"))
    }
}

#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct CustomerDto {
    #[validate(length(min = 1, max = 100, message = "Customer name is required"))]
    pub name: String,
    #[validate(length(min = 1, max = 100, message = "Customer surname is required"))]
    pub surname: String,
    #[validate(email(message = "Please enter a valid email address"))]
    pub email: String,
    #[validate(custom(
        function = validate_phone,
        message = "Please enter a valid phone number (digits, +, spaces, dashes, parentheses allowed)"
    ))]
    pub phone: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct OrderItemDto {
    #[validate(length(min = 1, message = "Cake ID is required"))]
    pub cake_id: String,
    #[validate(range(min = 1, message = "Quantity must be at least 1"))]
    pub quantity: i64,
}

#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct PlaceOrderDto {
    #[validate(nested)]
    pub customer: CustomerDto,
    #[validate(length(min = 1, message = "No items selected"), nested)]
    pub items: Vec<OrderItemDto>,
}

/// A line on a receipt. Cake name and unit price are snapshots taken when the
/// order was placed, not references into the live catalog.
#[derive(Debug, Serialize, FromRow, ToSchema)]
pub struct OrderItem {
    pub cake_id: String,
    pub cake_name: String,
    pub quantity: i64,
    pub unit_price: f64,
    pub line_total: f64,
}

#[derive(Debug, Serialize, FromRow, ToSchema)]
pub struct OrderRecord {
    pub id: i64,
    pub customer_name: String,
    pub customer_surname: String,
    pub customer_email: String,
    pub customer_phone: String,
    pub total: f64,
    pub created_at: DateTime<Utc>,
}

/// A full receipt: the order row plus its line items.
#[derive(Debug, Serialize, ToSchema)]
pub struct Order {
    #[serde(flatten)]
    pub record: OrderRecord,
    pub items: Vec<OrderItem>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PaginatedOrdersResponse {
    pub data: Vec<Order>,
    pub meta: PaginationMeta,
}
