use axum::{
    Router,
    routing::{get, post},
};

use crate::modules::orders::controller::{get_order, get_orders, place_order};
use crate::state::AppState;

pub fn init_orders_router() -> Router<AppState> {
    Router::new()
        .route("/", post(place_order).get(get_orders))
        .route("/{id}", get(get_order))
}
