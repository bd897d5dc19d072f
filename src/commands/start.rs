use anyhow::Result;
use std::path::Path;
use tiered_pricing::{config, init_tracing, pricing, server};
use tracing::info;

/// Execute the start command
///
/// This will:
/// 1. Load configuration
/// 2. Initialize tracing with the configured level and format
/// 3. Load the price table (any failure aborts startup)
/// 4. Start the server
pub async fn execute(config_path: &Path) -> Result<()> {
    let cfg = config::load_config(config_path)?;

    init_tracing(&cfg.server.log_level, cfg.server.log_format);
    info!("Starting tiered pricing server v{}", env!("CARGO_PKG_VERSION"));

    let table = pricing::load_price_table(&cfg.pricing.table_path)?;

    // Start the server (blocks until shutdown)
    server::start_server(cfg, table).await?;

    Ok(())
}
