// src/dtos/product.rs
use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::catalog::Listing;
use crate::models::product::Product;

pub const DEFAULT_PAGE: i64 = 1;

/// The `page` parameter after coercion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageParam {
    Number(i64),
    /// Present but not an integer: the window is empty.
    NotANumber,
}

impl PageParam {
    /// Missing means page 1; blank means page 0, like a numeric cast of "".
    pub fn parse(raw: Option<&str>) -> Self {
        let Some(raw) = raw.map(str::trim) else {
            return PageParam::Number(DEFAULT_PAGE);
        };
        if raw.is_empty() {
            return PageParam::Number(0);
        }
        raw.parse().map(PageParam::Number).unwrap_or(PageParam::NotANumber)
    }

    /// The page echoed in the response body.
    pub fn echo(self) -> i64 {
        match self {
            PageParam::Number(page) => page,
            PageParam::NotANumber => DEFAULT_PAGE,
        }
    }
}

/// Query for `GET /api/products`. Parameters are coerced, never rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListProductsQuery {
    pub page: PageParam,
    pub search: String,
}

impl Default for ListProductsQuery {
    fn default() -> Self {
        Self { page: PageParam::Number(DEFAULT_PAGE), search: String::new() }
    }
}

impl ListProductsQuery {
    pub fn from_params(params: &HashMap<String, String>) -> Self {
        let page = PageParam::parse(params.get("page").map(String::as_str));
        let search = params.get("search").cloned().unwrap_or_default();
        Self { page, search }
    }
}

/// Query for `GET /api/search-suggestions`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SuggestionsQuery {
    pub q: String,
}

impl SuggestionsQuery {
    pub fn from_params(params: &HashMap<String, String>) -> Self {
        Self { q: params.get("q").cloned().unwrap_or_default() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductResponse {
    pub id: u32,
    pub name: String,
    pub price: String,
    pub category: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingResponse {
    pub total: usize,
    pub page: i64,
    pub products: Vec<ProductResponse>,
}

// Convert from Model to Response DTO
impl From<&Product> for ProductResponse {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            price: product.price.clone(),
            category: product.category.clone(),
        }
    }
}

impl From<Listing<'_>> for ListingResponse {
    fn from(listing: Listing<'_>) -> Self {
        Self {
            total: listing.total,
            page: listing.page,
            products: listing.products.into_iter().map(ProductResponse::from).collect(),
        }
    }
}
