mod common;

use axum::http::StatusCode;
use common::{body_json, get, post_json, setup_test_app, setup_test_pool};
use serde_json::json;
use sqlx::SqlitePool;

async fn add_movie(
    pool: &SqlitePool,
    title: &str,
    director: &str,
    year: i64,
    genre: &str,
    rating: i64,
) -> serde_json::Value {
    let response = post_json(
        setup_test_app(pool.clone()),
        "/api/movies",
        json!({
            "title": title,
            "director": director,
            "year": year,
            "genre": genre,
            "rating": rating
        }),
        None,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await
}

#[tokio::test]
async fn test_create_movie() {
    let pool = setup_test_pool().await;

    let movie = add_movie(&pool, "Alien", "Ridley Scott", 1979, "Sci-Fi", 5).await;
    assert_eq!(movie["title"], "Alien");
    assert_eq!(movie["genre"], "Sci-Fi");
    assert!(movie["id"].as_i64().is_some());
}

#[tokio::test]
async fn test_create_movie_rejects_bad_year_and_rating() {
    let pool = setup_test_pool().await;

    let response = post_json(
        setup_test_app(pool.clone()),
        "/api/movies",
        json!({
            "title": "Too Old",
            "director": "Nobody",
            "year": 1850,
            "genre": "Drama",
            "rating": 3
        }),
        None,
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let response = post_json(
        setup_test_app(pool),
        "/api/movies",
        json!({
            "title": "Too Good",
            "director": "Nobody",
            "year": 2000,
            "genre": "Drama",
            "rating": 6
        }),
        None,
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_create_movie_rejects_unknown_genre() {
    let pool = setup_test_pool().await;

    let response = post_json(
        setup_test_app(pool),
        "/api/movies",
        json!({
            "title": "Uncategorizable",
            "director": "Nobody",
            "year": 2000,
            "genre": "Documentary",
            "rating": 3
        }),
        None,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_filter_movies_by_genre_and_rating() {
    let pool = setup_test_pool().await;

    add_movie(&pool, "Alien", "Ridley Scott", 1979, "Sci-Fi", 5).await;
    add_movie(&pool, "Blade Runner", "Ridley Scott", 1982, "Sci-Fi", 4).await;
    add_movie(&pool, "Airplane!", "Jim Abrahams", 1980, "Comedy", 4).await;

    let response = get(
        setup_test_app(pool.clone()),
        "/api/movies?genre=Sci-Fi",
        None,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["meta"]["total"], 2);

    let response = get(
        setup_test_app(pool.clone()),
        "/api/movies?genre=Sci-Fi&min_rating=5",
        None,
    )
    .await;
    let body = body_json(response).await;
    assert_eq!(body["meta"]["total"], 1);
    assert_eq!(body["data"][0]["title"], "Alien");

    let response = get(
        setup_test_app(pool),
        "/api/movies?year_from=1980&year_to=1985",
        None,
    )
    .await;
    let body = body_json(response).await;
    assert_eq!(body["meta"]["total"], 2);
}

#[tokio::test]
async fn test_movie_stats() {
    let pool = setup_test_pool().await;

    add_movie(&pool, "Alien", "Ridley Scott", 1979, "Sci-Fi", 5).await;
    add_movie(&pool, "Blade Runner", "Ridley Scott", 1982, "Sci-Fi", 4).await;
    add_movie(&pool, "Cats", "Tom Hooper", 2019, "Musical", 1).await;

    let response = get(setup_test_app(pool), "/api/movies/stats", None).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["total"], 3);
    let avg = body["average_rating"].as_f64().unwrap();
    assert!((avg - 10.0 / 3.0).abs() < 1e-9);

    let genres = body["genres"].as_array().unwrap();
    assert_eq!(genres[0]["genre"], "Sci-Fi");
    assert_eq!(genres[0]["count"], 2);

    let top = body["top_rated"].as_array().unwrap();
    assert_eq!(top[0]["title"], "Alien");
}

#[tokio::test]
async fn test_stats_on_empty_tracker() {
    let pool = setup_test_pool().await;

    let response = get(setup_test_app(pool), "/api/movies/stats", None).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["total"], 0);
    assert!(body["average_rating"].is_null());
    assert_eq!(body["genres"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_update_movie() {
    let pool = setup_test_pool().await;

    let movie = add_movie(&pool, "Alein", "Ridley Scott", 1979, "Sci-Fi", 5).await;
    let id = movie["id"].as_i64().unwrap();

    let request = axum::http::Request::builder()
        .method("PUT")
        .uri(format!("/api/movies/{}", id))
        .header("content-type", "application/json")
        .body(axum::body::Body::from(
            json!({ "title": "Alien", "rating": 4 }).to_string(),
        ))
        .unwrap();
    let response = tower::ServiceExt::oneshot(setup_test_app(pool.clone()), request)
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["title"], "Alien");
    assert_eq!(body["rating"], 4);
    // Untouched fields survive.
    assert_eq!(body["year"], 1979);
}

#[tokio::test]
async fn test_delete_movie() {
    let pool = setup_test_pool().await;

    let movie = add_movie(&pool, "Alien", "Ridley Scott", 1979, "Sci-Fi", 5).await;
    let id = movie["id"].as_i64().unwrap();

    let request = axum::http::Request::builder()
        .method("DELETE")
        .uri(format!("/api/movies/{}", id))
        .body(axum::body::Body::empty())
        .unwrap();
    let response = tower::ServiceExt::oneshot(setup_test_app(pool.clone()), request)
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = get(setup_test_app(pool), &format!("/api/movies/{}", id), None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
