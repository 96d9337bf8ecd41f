// src/catalog.rs
//! The fixed in-memory product set and the two queries it answers.

use std::ops::Range;

use rand::Rng;

use crate::models::product::Product;

/// Number of products generated at startup.
pub const CATALOG_SIZE: u32 = 100;
/// Products per listing page.
pub const PAGE_SIZE: i64 = 10;
/// Maximum number of names returned by a suggestion query.
pub const SUGGESTION_LIMIT: usize = 10;

/// One page of the filtered set, borrowing from the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Listing<'a> {
    pub total: usize,
    pub page: i64,
    pub products: Vec<&'a Product>,
}

#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    pub fn generate() -> Self {
        Self::generate_with(&mut rand::thread_rng())
    }

    pub fn generate_with<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let products = (1..=CATALOG_SIZE)
            .map(|id| Product::synthetic(id, &mut *rng))
            .collect();
        Self { products }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    fn filtered<'a>(&'a self, search: &str) -> impl Iterator<Item = &'a Product> + 'a {
        let needle = search.to_lowercase();
        self.products
            .iter()
            .filter(move |product| product.name_contains(&needle))
    }

    /// Filters by name and returns the `[(page-1)*10, page*10)` window.
    ///
    /// Pages are not validated. A page past the end yields no products, and a
    /// non-positive page slices from the end of the filtered set the way a
    /// negative index would (`page = -1` is the 11th to 20th last match).
    pub fn list(&self, page: i64, search: &str) -> Listing<'_> {
        let filtered: Vec<&Product> = self.filtered(search).collect();
        let start = page.saturating_sub(1).saturating_mul(PAGE_SIZE);
        let end = page.saturating_mul(PAGE_SIZE);
        let window = slice_window(filtered.len(), start, end);

        Listing {
            total: filtered.len(),
            page,
            products: filtered[window].to_vec(),
        }
    }

    /// The filtered count with an empty window, for pages that are not numbers.
    pub fn empty_listing(&self, page: i64, search: &str) -> Listing<'_> {
        Listing { total: self.filtered(search).count(), page, products: Vec::new() }
    }

    /// Names of the first ten matches in id order. An empty query matches all.
    pub fn suggest(&self, q: &str) -> Vec<String> {
        self.filtered(q)
            .take(SUGGESTION_LIMIT)
            .map(|product| product.name.clone())
            .collect()
    }
}

/// Resolves a possibly negative `[start, end)` pair against `len`.
/// Negative bounds count back from the end; an inverted pair is empty.
fn slice_window(len: usize, start: i64, end: i64) -> Range<usize> {
    let resolve = |index: i64| -> usize {
        let len = len as i64;
        if index < 0 {
            len.saturating_add(index).max(0) as usize
        } else {
            index.min(len) as usize
        }
    };
    let (start, end) = (resolve(start), resolve(end));
    if end <= start {
        start..start
    } else {
        start..end
    }
}

#[cfg(test)]
mod tests {
    use super::{slice_window, Catalog, PAGE_SIZE, SUGGESTION_LIMIT};
    use rand::{rngs::StdRng, SeedableRng};

    fn catalog() -> Catalog {
        Catalog::generate_with(&mut StdRng::seed_from_u64(2024))
    }

    fn ids(listing: &super::Listing<'_>) -> Vec<u32> {
        listing.products.iter().map(|p| p.id).collect()
    }

    #[test]
    fn generates_one_hundred_products_in_id_order() {
        let catalog = catalog();
        let ids: Vec<u32> = catalog.products().iter().map(|p| p.id).collect();
        assert_eq!(ids, (1..=100).collect::<Vec<_>>());
    }

    #[test]
    fn total_counts_case_insensitive_matches() {
        let catalog = catalog();
        for search in ["", "cat", "product", "PRODUCT 1", "7", "99", "nothing"] {
            let expected = catalog
                .products()
                .iter()
                .filter(|p| p.name.to_lowercase().contains(&search.to_lowercase()))
                .count();
            assert_eq!(catalog.list(1, search).total, expected, "search {search:?}");
        }
    }

    #[test]
    fn total_is_case_invariant() {
        let catalog = catalog();
        assert_eq!(catalog.list(1, "cat").total, catalog.list(1, "CAT").total);
        assert_eq!(catalog.list(2, "product 1").total, catalog.list(2, "Product 1").total);
    }

    #[test]
    fn search_ignores_category_and_price() {
        let catalog = catalog();
        assert_eq!(catalog.list(1, "category").total, 0);
        assert_eq!(catalog.list(1, ".").total, 0);
    }

    #[test]
    fn page_length_matches_formula() {
        let catalog = catalog();
        for search in ["", "1", "product 5", "Product 100"] {
            for page in 1..=12_i64 {
                let listing = catalog.list(page, search);
                let expected = (listing.total as i64 - (page - 1) * PAGE_SIZE).clamp(0, PAGE_SIZE);
                assert_eq!(listing.products.len() as i64, expected, "page {page} search {search:?}");
                assert_eq!(listing.page, page);
            }
        }
    }

    #[test]
    fn pages_preserve_id_order() {
        let catalog = catalog();
        assert_eq!(ids(&catalog.list(1, "")), (1..=10).collect::<Vec<_>>());
        assert_eq!(ids(&catalog.list(3, "")), (21..=30).collect::<Vec<_>>());
        assert_eq!(ids(&catalog.list(2, "1")), vec![19, 21, 31, 41, 51, 61, 71, 81, 91, 100]);
    }

    #[test]
    fn product_5_matches_fifties_too() {
        let catalog = catalog();
        let listing = catalog.list(1, "Product 5");
        assert_eq!(listing.total, 11);
        assert_eq!(ids(&listing), vec![5, 50, 51, 52, 53, 54, 55, 56, 57, 58]);
        assert_eq!(ids(&catalog.list(2, "Product 5")), vec![59]);
    }

    #[test]
    fn page_past_the_end_is_empty_but_keeps_total() {
        let catalog = catalog();
        let listing = catalog.list(11, "");
        assert!(listing.products.is_empty());
        assert_eq!(listing.total, 100);
    }

    #[test]
    fn non_positive_pages_slice_from_the_end() {
        let catalog = catalog();

        let zero = catalog.list(0, "");
        assert!(zero.products.is_empty());
        assert_eq!(zero.total, 100);
        assert_eq!(zero.page, 0);

        assert_eq!(ids(&catalog.list(-1, "")), (81..=90).collect::<Vec<_>>());
        assert_eq!(ids(&catalog.list(-9, "")), (1..=10).collect::<Vec<_>>());
        assert!(catalog.list(-20, "").products.is_empty());
        assert!(catalog.list(i64::MIN, "").products.is_empty());
    }

    #[test]
    fn empty_listing_keeps_filtered_total() {
        let catalog = catalog();
        let listing = catalog.empty_listing(1, "product 5");
        assert_eq!(listing.total, 11);
        assert_eq!(listing.page, 1);
        assert!(listing.products.is_empty());
    }

    #[test]
    fn listing_is_idempotent() {
        let catalog = catalog();
        assert_eq!(catalog.list(2, "product"), catalog.list(2, "product"));
    }

    #[test]
    fn suggestions_are_capped_and_match() {
        let catalog = catalog();
        for q in ["", "1", "product", "PrOdUcT 9", "xyz"] {
            let names = catalog.suggest(q);
            assert!(names.len() <= SUGGESTION_LIMIT);
            for name in &names {
                assert!(name.to_lowercase().contains(&q.to_lowercase()), "{name} vs {q}");
            }
        }
        assert!(catalog.suggest("xyz").is_empty());
    }

    #[test]
    fn empty_suggestion_query_returns_first_ten_names() {
        let expected: Vec<String> = (1..=10).map(|id| format!("Product {id}")).collect();
        assert_eq!(catalog().suggest(""), expected);
    }

    #[test]
    fn slice_window_resolves_like_array_slice() {
        assert_eq!(slice_window(100, 0, 10), 0..10);
        assert_eq!(slice_window(5, 0, 10), 0..5);
        assert_eq!(slice_window(5, 10, 20), 5..5);
        assert_eq!(slice_window(100, -10, 0), 90..90);
        assert_eq!(slice_window(100, -20, -10), 80..90);
        assert_eq!(slice_window(5, -20, -10), 0..0);
    }
}
