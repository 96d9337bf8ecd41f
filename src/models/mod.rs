// src/models/mod.rs
pub mod product;
