// src/lib.rs
//! Product catalog demo: an in-memory catalog service and a debounced
//! search client that talks to it over HTTP.

pub mod catalog;
pub mod client;
pub mod config;
pub mod dtos;
pub mod error;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod server;
pub mod state;

use tracing_subscriber::EnvFilter;

/// Installs the fmt subscriber, honouring `RUST_LOG` and defaulting to `info`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
