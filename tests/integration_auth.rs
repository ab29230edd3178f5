mod common;

use axum::http::StatusCode;
use common::{body_json, get, get_admin_token, post_json, setup_test_app, setup_test_pool};
use serde_json::json;

#[tokio::test]
async fn test_admin_login_succeeds() {
    let pool = setup_test_pool().await;
    let app = setup_test_app(pool);

    let response = post_json(
        app,
        "/api/auth/login",
        json!({ "password": common::TEST_ADMIN_PASSWORD }),
        None,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert!(body["access_token"].as_str().is_some());
    assert_eq!(body["token_type"], "Bearer");
    assert_eq!(body["expires_in"], 3600);
}

#[tokio::test]
async fn test_admin_login_wrong_password() {
    let pool = setup_test_pool().await;
    let app = setup_test_app(pool);

    let response = post_json(
        app,
        "/api/auth/login",
        json!({ "password": "not-the-password" }),
        None,
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body = body_json(response).await;
    assert!(body["error"].as_str().is_some());
}

#[tokio::test]
async fn test_admin_login_missing_password_field() {
    let pool = setup_test_pool().await;
    let app = setup_test_app(pool);

    let response = post_json(app, "/api/auth/login", json!({}), None).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_protected_route_rejects_missing_token() {
    let pool = setup_test_pool().await;
    let app = setup_test_app(pool);

    let response = get(app, "/api/orders", None).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_protected_route_rejects_garbage_token() {
    let pool = setup_test_pool().await;
    let app = setup_test_app(pool);

    let response = get(app, "/api/orders", Some("not.a.jwt")).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_token_works_on_protected_route() {
    let pool = setup_test_pool().await;
    let token = get_admin_token(setup_test_app(pool.clone())).await;

    let response = get(setup_test_app(pool), "/api/orders", Some(&token)).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_health_endpoint() {
    let pool = setup_test_pool().await;
    let app = setup_test_app(pool);

    let response = get(app, "/health", None).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["status"], "ok");
}
