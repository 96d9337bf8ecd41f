// src/models/product.rs
use rand::Rng;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub id: u32,
    pub name: String,
    pub price: String,
    pub category: String,
}

impl Product {
    /// Builds the synthetic product for `id`, drawing the price from `rng`.
    ///
    /// Prices are uniform over whole cents in `[0.00, 100.00)` and always
    /// carry two fraction digits.
    pub fn synthetic<R: Rng + ?Sized>(id: u32, rng: &mut R) -> Self {
        let cents: u32 = rng.gen_range(0..10_000);
        Self {
            id,
            name: format!("Product {id}"),
            price: format!("{}.{:02}", cents / 100, cents % 100),
            category: format!("Category {}", id % 10),
        }
    }

    /// Case-insensitive substring match against the name only.
    /// `needle` must already be lowercased.
    pub fn name_contains(&self, needle: &str) -> bool {
        needle.is_empty() || self.name.to_lowercase().contains(needle)
    }
}
