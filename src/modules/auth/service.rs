use tracing::instrument;

use crate::config::auth::AuthConfig;
use crate::utils::errors::AppError;
use crate::utils::jwt::create_admin_token;
use crate::utils::password::verify_password;

use super::model::{LoginRequest, LoginResponse};

pub struct AuthService;

impl AuthService {
    #[instrument(skip(dto, auth_config))]
    pub async fn login_admin(
        dto: LoginRequest,
        auth_config: &AuthConfig,
    ) -> Result<LoginResponse, AppError> {
        let is_valid = verify_password(&dto.password, &auth_config.admin_password_hash)?;

        if !is_valid {
            return Err(AppError::unauthorized(anyhow::anyhow!("Incorrect password")));
        }

        let access_token = create_admin_token(auth_config)?;

        Ok(LoginResponse {
            access_token,
            token_type: "Bearer".to_string(),
            expires_in: auth_config.access_token_expiry,
        })
    }
}
