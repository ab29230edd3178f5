mod common;

use axum::http::StatusCode;
use common::{body_json, get, post_json, setup_test_app, setup_test_pool};
use serde_json::json;

#[tokio::test]
async fn test_create_review() {
    let pool = setup_test_pool().await;

    let response = post_json(
        setup_test_app(pool),
        "/api/reviews",
        json!({
            "name": "Maria",
            "comment": "The tiramisu cake made my birthday.",
            "rating": 5
        }),
        None,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = body_json(response).await;
    assert_eq!(body["name"], "Maria");
    assert_eq!(body["rating"], 5);
    assert!(body["created_at"].as_str().is_some());
}

#[tokio::test]
async fn test_create_review_rejects_out_of_range_rating() {
    let pool = setup_test_pool().await;

    for rating in [0, 6] {
        let response = post_json(
            setup_test_app(pool.clone()),
            "/api/reviews",
            json!({ "name": "Maria", "comment": "hm", "rating": rating }),
            None,
        )
        .await;
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}

#[tokio::test]
async fn test_create_review_requires_comment() {
    let pool = setup_test_pool().await;

    let response = post_json(
        setup_test_app(pool),
        "/api/reviews",
        json!({ "name": "Maria", "comment": "", "rating": 4 }),
        None,
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_list_reviews_newest_first() {
    let pool = setup_test_pool().await;

    for (name, rating) in [("First", 3), ("Second", 5)] {
        let response = post_json(
            setup_test_app(pool.clone()),
            "/api/reviews",
            json!({ "name": name, "comment": "ok", "rating": rating }),
            None,
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = get(setup_test_app(pool), "/api/reviews", None).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let reviews = body["data"].as_array().unwrap();
    assert_eq!(reviews.len(), 2);
    assert_eq!(reviews[0]["name"], "Second");
    assert_eq!(body["meta"]["total"], 2);
}
