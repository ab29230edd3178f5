use std::env;

use crate::utils::password::hash_password;

/// Admin credential and token settings.
///
/// The shop has a single administrator. `ADMIN_PASSWORD_HASH` takes a bcrypt
/// hash directly; if it is absent, `ADMIN_PASSWORD` is hashed at startup so a
/// plain password never sits in the running config.
#[derive(Clone, Debug)]
pub struct AuthConfig {
    pub admin_password_hash: String,
    pub jwt_secret: String,
    pub access_token_expiry: i64,
}

impl AuthConfig {
    pub fn from_env() -> Self {
        let admin_password_hash = env::var("ADMIN_PASSWORD_HASH").unwrap_or_else(|_| {
            let password = env::var("ADMIN_PASSWORD")
                .unwrap_or_else(|_| "change-me-in-production".to_string());
            hash_password(&password)
                .expect("Failed to hash ADMIN_PASSWORD")
        });

        Self {
            admin_password_hash,
            jwt_secret: env::var("JWT_SECRET")
                .unwrap_or_else(|_| "your-secret-key-change-in-production".to_string()),
            access_token_expiry: env::var("JWT_ACCESS_EXPIRY")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(3600), // 1 hour
        }
    }
}
