use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};

use crate::config::auth::AuthConfig;
use crate::modules::auth::model::Claims;
use crate::utils::errors::AppError;

/// Subject claim carried by every admin token.
pub const ADMIN_SUBJECT: &str = "admin";

pub fn create_admin_token(auth_config: &AuthConfig) -> Result<String, AppError> {
    let now = Utc::now().timestamp() as usize;
    let exp = now + auth_config.access_token_expiry as usize;

    let claims = Claims {
        sub: ADMIN_SUBJECT.to_string(),
        exp,
        iat: now,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(auth_config.jwt_secret.as_bytes()),
    )
    .map_err(|e| AppError::internal(anyhow::anyhow!("Failed to create token: {}", e)))
}

pub fn verify_token(token: &str, auth_config: &AuthConfig) -> Result<Claims, AppError> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(auth_config.jwt_secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|_| AppError::unauthorized(anyhow::anyhow!("Invalid or expired token")))
}
