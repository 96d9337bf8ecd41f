// src/routes/mod.rs
pub mod products;

use axum::{routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::state::AppState;

pub fn create_router() -> Router<AppState> {
    Router::new().merge(products::routes())
}

/// The full service: API routes, banner, health check, CORS for every origin.
pub fn app(state: AppState) -> Router {
    create_router()
        .route("/", get(|| async { "Catalog API" }))
        .route("/health", get(health_check))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}
