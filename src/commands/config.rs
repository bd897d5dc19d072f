use anyhow::Result;
use colored::Colorize;
use std::path::Path;
use tiered_pricing::{
    config::{self, Config},
    logging::mask_secret,
};
use tracing::info;

/// Execute the config show command
///
/// Displays the effective configuration with the API token masked
pub fn show(config_path: &Path) -> Result<()> {
    println!("{}", "Loading configuration...".yellow());
    info!("Loading configuration for display");

    let cfg = config::load_config(config_path)?;
    let sanitized = sanitize_secrets(&cfg);

    println!("{}", "Current Configuration:".green().bold());
    println!();

    // Serialize to TOML format
    let toml_string = toml::to_string_pretty(&sanitized)?;
    println!("{}", toml_string);

    info!("Configuration displayed successfully");
    Ok(())
}

/// Sanitize secrets in configuration for safe display
fn sanitize_secrets(cfg: &Config) -> Config {
    let mut sanitized = cfg.clone();
    sanitized.auth.api_token = mask_secret(&sanitized.auth.api_token);
    sanitized
}
