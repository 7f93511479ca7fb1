//! Main entry point for SalesDash.

use anyhow::Context;
use salesdash::{serve, Dashboard};
use salesdash_common::logging::init_logging;
use salesdash_config::ConfigLoader;
use std::sync::Arc;
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ConfigLoader::from_env()
        .load()
        .await
        .context("Failed to load configuration")?;

    init_logging(&config.logging.to_logging_config())?;

    info!("Starting SalesDash");

    if let Err(e) = config.validate() {
        error!("Invalid configuration: {e}");
        return Err(e.into());
    }

    let dashboard = Arc::new(Dashboard::from_config(&config));
    serve(&config, dashboard).await?;

    Ok(())
}
