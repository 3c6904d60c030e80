//! Senti API - Main entry point.

use anyhow::Result;
use senti_common::config::Config;
use senti_common::logging::init_logging;

#[tokio::main]
async fn main() -> Result<()> {
    // Load and validate configuration
    let config = Config::load()?;
    config.validate()?;

    // Initialize logging
    init_logging(
        &config.observability.log_level,
        &config.observability.log_format,
    );

    tracing::info!("Senti API v{}", env!("CARGO_PKG_VERSION"));

    // Start the API server
    senti_api::start_server(&config).await
}
