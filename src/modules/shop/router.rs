use axum::{Router, routing::get};

use crate::modules::shop::controller::get_shop_summary;
use crate::state::AppState;

pub fn init_shop_router() -> Router<AppState> {
    Router::new().route("/summary", get(get_shop_summary))
}
