use axum::{
    Router,
    routing::{get, post},
};

use crate::modules::movies::controller::{
    create_movie, delete_movie, get_movie, get_movie_stats, get_movies, update_movie,
};
use crate::state::AppState;

pub fn init_movies_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_movie).get(get_movies))
        .route("/stats", get(get_movie_stats))
        .route(
            "/{id}",
            get(get_movie).put(update_movie).delete(delete_movie),
        )
}
