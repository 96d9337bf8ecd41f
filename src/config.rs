// src/config.rs
use std::{env, net::IpAddr, time::Duration};

use tracing::{info, warn};

use crate::error::AppError;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 5000;
/// How many ports after the configured one are tried when it is taken.
pub const PORT_FALLBACK_RANGE: u16 = 20;

/// Base URL the client talks to, fixed at build time.
pub const API_BASE_URL: &str = match option_env!("CATALOG_API_URL") {
    Some(url) => url,
    None => "http://localhost:5000",
};

/// Quiet period after the last keystroke before a search fires.
pub const DEBOUNCE_DELAY: Duration = Duration::from_millis(400);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    pub host: IpAddr,
    pub port: u16,
}

impl ServiceConfig {
    /// Reads `HOST` and `PORT`, loading `.env` first if one exists.
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();
        Self::from_vars(env::var("HOST").ok(), env::var("PORT").ok())
    }

    pub fn from_vars(host: Option<String>, port: Option<String>) -> Result<Self, AppError> {
        let host = match host {
            Some(raw) => raw
                .trim()
                .parse::<IpAddr>()
                .map_err(|e| AppError::config(format!("HOST {raw:?}: {e}")))?,
            None => {
                info!("HOST not set, using default: {DEFAULT_HOST}");
                DEFAULT_HOST.parse::<IpAddr>().map_err(|e| AppError::config(format!("{e}")))?
            }
        };

        let port = match port {
            Some(raw) => raw.trim().parse::<u16>().map_err(|e| {
                warn!("Invalid PORT value: {e}");
                AppError::config(format!("PORT {raw:?}: {e}"))
            })?,
            None => {
                info!("PORT not set, using default: {DEFAULT_PORT}");
                DEFAULT_PORT
            }
        };

        Ok(Self { host, port })
    }
}
