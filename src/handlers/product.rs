// src/handlers/product.rs
use std::collections::HashMap;

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use tracing::{debug, instrument, warn};

use crate::dtos::product::{ListProductsQuery, ListingResponse, PageParam, SuggestionsQuery};
use crate::state::AppState;

type Params = Result<Query<HashMap<String, String>>, QueryRejection>;

// Undecodable query strings fall back to defaults instead of a 400.
fn params_or_default(params: Params) -> HashMap<String, String> {
    match params {
        Ok(Query(params)) => params,
        Err(e) => {
            warn!(error = %e, "Unreadable query string, using defaults");
            HashMap::new()
        }
    }
}

// GET /api/products?page=&search=
#[instrument(skip(state, params))]
pub async fn list_products(State(state): State<AppState>, params: Params) -> Json<ListingResponse> {
    let query = ListProductsQuery::from_params(&params_or_default(params));
    let listing = match query.page {
        PageParam::Number(page) => state.catalog.list(page, &query.search),
        PageParam::NotANumber => state.catalog.empty_listing(query.page.echo(), &query.search),
    };
    debug!(page = listing.page, search = %query.search, total = listing.total, "Listed products");
    Json(ListingResponse::from(listing))
}

// GET /api/search-suggestions?q=
#[instrument(skip(state, params))]
pub async fn search_suggestions(State(state): State<AppState>, params: Params) -> Json<Vec<String>> {
    let query = SuggestionsQuery::from_params(&params_or_default(params));
    let names = state.catalog.suggest(&query.q);
    debug!(q = %query.q, count = names.len(), "Served suggestions");
    Json(names)
}
