use axum::{
    Router,
    routing::{get, post},
};

use crate::modules::cakes::controller::{
    create_cake, delete_cake, get_cake, get_cakes, update_cake,
};
use crate::state::AppState;

pub fn init_cakes_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_cake).get(get_cakes))
        .route("/{id}", get(get_cake).put(update_cake).delete(delete_cake))
}
