// src/routes/products.rs
use axum::{routing::get, Router};

use crate::handlers::product::{list_products, search_suggestions};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/products", get(list_products))
        .route("/api/search-suggestions", get(search_suggestions))
}
