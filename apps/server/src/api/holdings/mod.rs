mod dto;
mod handlers;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::main_lib::AppState;

pub use dto::HoldingsView;

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/holdings", get(handlers::get_holdings))
        .route("/holdings/item", get(handlers::get_holding))
        .route("/holdings/refresh", post(handlers::refresh_holdings))
}
