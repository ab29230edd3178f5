use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use crate::utils::pagination::PaginationMeta;

/// A cake on the shop menu.
///
/// The `id` is a slug derived from the name (lowercased, spaces replaced with
/// underscores), which makes cake names unique across the catalog.
#[derive(Debug, Serialize, FromRow, ToSchema)]
pub struct Cake {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PaginatedCakesResponse {
    pub data: Vec<Cake>,
    pub meta: PaginationMeta,
}

#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct CreateCakeDto {
    #[validate(length(min = 1, max = 100, message = "Cake name must be 1-100 characters"))]
    pub name: String,
    #[validate(range(exclusive_min = 0.0, message = "Price must be greater than 0"))]
    pub price: f64,
    #[validate(url(message = "Image URL must be a valid URL"))]
    pub image_url: Option<String>,
}

/// Distinguishes an absent `image_url` field (keep the stored image) from an
/// explicit `null` (clear it).
fn deserialize_image_url_patch<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

/// All fields optional; only provided fields are updated. Renaming re-derives
/// the slug. Sending `"image_url": null` clears the stored image.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct UpdateCakeDto {
    #[validate(length(min = 1, max = 100, message = "Cake name must be 1-100 characters"))]
    pub name: Option<String>,
    #[validate(range(exclusive_min = 0.0, message = "Price must be greater than 0"))]
    pub price: Option<f64>,
    #[validate(url(message = "Image URL must be a valid URL"))]
    #[serde(default, deserialize_with = "deserialize_image_url_patch")]
    #[schema(value_type = Option<String>)]
    pub image_url: Option<Option<String>>,
}

/// Derives the catalog slug from a cake name.
pub fn slugify(name: &str) -> String {
    name.trim().to_lowercase().replace(' ', "_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Red Velvet"), "red_velvet");
        assert_eq!(slugify("  Tiramisu  "), "tiramisu");
        assert_eq!(slugify("Black Forest Gateau"), "black_forest_gateau");
    }

    #[test]
    fn test_slugify_is_case_insensitive() {
        assert_eq!(slugify("CHEESECAKE"), slugify("cheesecake"));
    }

    #[test]
    fn test_create_cake_dto_validation() {
        let valid = CreateCakeDto {
            name: "Carrot Cake".to_string(),
            price: 12.50,
            image_url: None,
        };
        assert!(valid.validate().is_ok());
    }

    #[test]
    fn test_create_cake_dto_rejects_zero_price() {
        let dto = CreateCakeDto {
            name: "Carrot Cake".to_string(),
            price: 0.0,
            image_url: None,
        };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_create_cake_dto_rejects_empty_name() {
        let dto = CreateCakeDto {
            name: String::new(),
            price: 5.0,
            image_url: None,
        };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_create_cake_dto_rejects_bad_image_url() {
        let dto = CreateCakeDto {
            name: "Eclair".to_string(),
            price: 3.0,
            image_url: Some("not a url".to_string()),
        };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_update_cake_dto_empty_is_valid() {
        let dto = UpdateCakeDto {
            name: None,
            price: None,
            image_url: None,
        };
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_update_cake_dto_image_url_patch() {
        let dto: UpdateCakeDto = serde_json::from_str(r#"{"price": 9.0}"#).unwrap();
        assert_eq!(dto.image_url, None);

        let dto: UpdateCakeDto = serde_json::from_str(r#"{"image_url": null}"#).unwrap();
        assert_eq!(dto.image_url, Some(None));

        let dto: UpdateCakeDto =
            serde_json::from_str(r#"{"image_url": "https://example.com/cake.jpg"}"#).unwrap();
        assert_eq!(
            dto.image_url,
            Some(Some("https://example.com/cake.jpg".to_string()))
        );
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_update_cake_dto_rejects_bad_image_url() {
        let dto = UpdateCakeDto {
            name: None,
            price: None,
            image_url: Some(Some("not a url".to_string())),
        };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_update_cake_dto_rejects_negative_price() {
        let dto = UpdateCakeDto {
            name: None,
            price: Some(-1.0),
            image_url: None,
        };
        assert!(dto.validate().is_err());
    }
}
