mod common;

use axum::http::StatusCode;
use common::{body_json, get, get_admin_token, post_json, setup_test_app, setup_test_pool};
use serde_json::json;

#[tokio::test]
async fn test_student_routes_require_admin() {
    let pool = setup_test_pool().await;

    let response = get(setup_test_app(pool.clone()), "/api/students", None).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = post_json(
        setup_test_app(pool),
        "/api/students",
        json!({ "name": "Olsi", "grade": "A" }),
        None,
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_create_and_list_students() {
    let pool = setup_test_pool().await;
    let token = get_admin_token(setup_test_app(pool.clone())).await;

    let response = post_json(
        setup_test_app(pool.clone()),
        "/api/students",
        json!({ "name": "Olsi", "grade": "A" }),
        Some(&token),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;
    assert_eq!(created["name"], "Olsi");
    assert_eq!(created["grade"], "A");
    let id = created["id"].as_i64().unwrap();

    let response = post_json(
        setup_test_app(pool.clone()),
        "/api/students",
        json!({ "name": "Ana", "grade": "B" }),
        Some(&token),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = get(setup_test_app(pool.clone()), "/api/students", Some(&token)).await;
    assert_eq!(response.status(), StatusCode::OK);
    let list = body_json(response).await;
    let students = list.as_array().unwrap();
    assert_eq!(students.len(), 2);
    // Sorted by name.
    assert_eq!(students[0]["name"], "Ana");

    let response = get(
        setup_test_app(pool),
        &format!("/api/students/{}", id),
        Some(&token),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_create_student_rejects_empty_name() {
    let pool = setup_test_pool().await;
    let token = get_admin_token(setup_test_app(pool.clone())).await;

    let response = post_json(
        setup_test_app(pool),
        "/api/students",
        json!({ "name": "", "grade": "A" }),
        Some(&token),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_update_student_partial() {
    let pool = setup_test_pool().await;
    let token = get_admin_token(setup_test_app(pool.clone())).await;

    let response = post_json(
        setup_test_app(pool.clone()),
        "/api/students",
        json!({ "name": "Olsi", "grade": "B" }),
        Some(&token),
    )
    .await;
    let created = body_json(response).await;
    let id = created["id"].as_i64().unwrap();

    let request = axum::http::Request::builder()
        .method("PUT")
        .uri(format!("/api/students/{}", id))
        .header("content-type", "application/json")
        .header("authorization", format!("Bearer {}", token))
        .body(axum::body::Body::from(json!({ "grade": "A" }).to_string()))
        .unwrap();
    let response = tower::ServiceExt::oneshot(setup_test_app(pool), request)
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["name"], "Olsi");
    assert_eq!(body["grade"], "A");
}

#[tokio::test]
async fn test_delete_student() {
    let pool = setup_test_pool().await;
    let token = get_admin_token(setup_test_app(pool.clone())).await;

    let response = post_json(
        setup_test_app(pool.clone()),
        "/api/students",
        json!({ "name": "Olsi", "grade": "A" }),
        Some(&token),
    )
    .await;
    let created = body_json(response).await;
    let id = created["id"].as_i64().unwrap();

    let request = axum::http::Request::builder()
        .method("DELETE")
        .uri(format!("/api/students/{}", id))
        .header("authorization", format!("Bearer {}", token))
        .body(axum::body::Body::empty())
        .unwrap();
    let response = tower::ServiceExt::oneshot(setup_test_app(pool.clone()), request)
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = get(
        setup_test_app(pool),
        &format!("/api/students/{}", id),
        Some(&token),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_missing_student() {
    let pool = setup_test_pool().await;
    let token = get_admin_token(setup_test_app(pool.clone())).await;

    let request = axum::http::Request::builder()
        .method("PUT")
        .uri("/api/students/424242")
        .header("content-type", "application/json")
        .header("authorization", format!("Bearer {}", token))
        .body(axum::body::Body::from(json!({ "grade": "A" }).to_string()))
        .unwrap();
    let response = tower::ServiceExt::oneshot(setup_test_app(pool), request)
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
