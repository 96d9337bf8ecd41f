// src/main.rs
use catalog::{config::ServiceConfig, error::AppError, server};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // Initialize logging
    catalog::init_tracing();

    // Load environment variables
    let config = ServiceConfig::from_env()?;

    if let Err(e) = server::run(config).await {
        tracing::error!(error = %e, "Server error");
        return Err(e);
    }
    Ok(())
}
