use sqlx::SqlitePool;

use crate::config::auth::AuthConfig;
use crate::config::cors::CorsConfig;
use crate::config::database::init_db_pool;
use crate::db::init_schema;

#[derive(Clone, Debug)]
pub struct AppState {
    pub db: SqlitePool,
    pub auth_config: AuthConfig,
    pub cors_config: CorsConfig,
}

pub async fn init_app_state() -> AppState {
    let db = init_db_pool().await;
    init_schema(&db)
        .await
        .expect("Failed to initialize database schema");

    AppState {
        db,
        auth_config: AuthConfig::from_env(),
        cors_config: CorsConfig::from_env(),
    }
}
