use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::json;
use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;
use sweetdelights::config::auth::AuthConfig;
use sweetdelights::config::cors::CorsConfig;
use sweetdelights::db::init_schema;
use sweetdelights::router::init_router;
use sweetdelights::state::AppState;
use sweetdelights::utils::password::hash_password;
use tower::ServiceExt;

/// Admin password the tests log in with.
#[allow(dead_code)]
pub const TEST_ADMIN_PASSWORD: &str = "testpass123";

/// Fresh in-memory database with the full schema applied.
///
/// A single connection is required: every pooled connection would otherwise
/// open its own private `:memory:` database.
pub async fn setup_test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap();

    init_schema(&pool).await.unwrap();
    pool
}

pub fn setup_test_app(pool: SqlitePool) -> axum::Router {
    let state = AppState {
        db: pool,
        auth_config: AuthConfig {
            admin_password_hash: hash_password(TEST_ADMIN_PASSWORD).unwrap(),
            jwt_secret: "test-jwt-secret".to_string(),
            access_token_expiry: 3600,
        },
        cors_config: CorsConfig {
            allowed_origins: vec!["http://localhost:8501".to_string()],
        },
    };
    init_router(state)
}

#[allow(dead_code)]
pub async fn get_admin_token(app: axum::Router) -> String {
    let request = Request::builder()
        .method("POST")
        .uri("/api/auth/login")
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_string(&json!({ "password": TEST_ADMIN_PASSWORD })).unwrap(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
    body["access_token"].as_str().unwrap().to_string()
}

/// POST a JSON body and return the response.
#[allow(dead_code)]
pub async fn post_json(
    app: axum::Router,
    uri: &str,
    body: serde_json::Value,
    token: Option<&str>,
) -> axum::response::Response {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json");
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {}", token));
    }
    let request = builder
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// GET a path and return the response.
#[allow(dead_code)]
pub async fn get(app: axum::Router, uri: &str, token: Option<&str>) -> axum::response::Response {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {}", token));
    }
    let request = builder.body(Body::empty()).unwrap();
    app.oneshot(request).await.unwrap()
}

#[allow(dead_code)]
pub async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}
