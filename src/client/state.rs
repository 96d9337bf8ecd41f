// src/client/state.rs
use crate::catalog::PAGE_SIZE;
use crate::dtos::product::{ListingResponse, ProductResponse};

/// Everything the client renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogState {
    pub search_text: String,
    pub suggestions: Vec<String>,
    pub products: Vec<ProductResponse>,
    pub current_page: i64,
    pub total_items: usize,
}

impl Default for CatalogState {
    fn default() -> Self {
        Self {
            search_text: String::new(),
            suggestions: Vec::new(),
            products: Vec::new(),
            current_page: 1,
            total_items: 0,
        }
    }
}

impl CatalogState {
    pub fn apply_listing(&mut self, listing: ListingResponse) {
        self.products = listing.products;
        self.total_items = listing.total;
        self.current_page = listing.page;
    }

    /// `ceil(total_items / 10)`.
    pub fn total_pages(&self) -> i64 {
        (self.total_items as i64 + PAGE_SIZE - 1) / PAGE_SIZE
    }

    pub fn can_go_previous(&self) -> bool {
        self.current_page != 1
    }

    // Not `<`: with zero results there are zero pages and "next" stays enabled.
    pub fn can_go_next(&self) -> bool {
        self.current_page != self.total_pages()
    }

    pub fn page_numbers(&self) -> impl Iterator<Item = i64> {
        1..=self.total_pages()
    }
}
