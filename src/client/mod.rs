// src/client/mod.rs
//! The catalog client: a state machine driven by input events that queries
//! the service and publishes every state change for rendering.

pub mod api;
pub mod command;
pub mod controller;
pub mod debounce;
pub mod ordering;
pub mod state;
pub mod view;

pub use api::{CatalogApi, HttpCatalogApi};
pub use controller::CatalogController;
pub use ordering::ResponseOrdering;
pub use state::CatalogState;
