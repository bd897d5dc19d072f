use serde::{Deserialize, Serialize};
use std::net::{IpAddr, SocketAddr};
use std::path::{Path, PathBuf};

/// Environment variable holding the shared secret for `x-api-key`
pub const API_TOKEN_ENV: &str = "API_TOKEN";

/// Prefix for layered environment overrides, e.g. `PRICING__SERVER__PORT`
pub const ENV_PREFIX: &str = "PRICING";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub server: ServerConfig,
    pub pricing: PricingConfig,
    pub auth: AuthConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub log_level: String,
    pub log_format: LogFormat,
    pub body_limit_bytes: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PricingConfig {
    pub table_path: PathBuf,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AuthConfig {
    #[serde(default)]
    pub api_token: String,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        let ip: IpAddr = self.host.parse()?;
        Ok(SocketAddr::from((ip, self.port)))
    }
}

/// Load configuration from defaults, the optional TOML file at `path`,
/// `PRICING__*` environment overrides and the `API_TOKEN` variable.
pub fn load_config(path: &Path) -> anyhow::Result<Config> {
    load_config_with_token(path, std::env::var(API_TOKEN_ENV).ok())
}

/// Same as [`load_config`] but with the API token supplied by the caller
/// instead of read from `API_TOKEN`.
pub fn load_config_with_token(path: &Path, api_token: Option<String>) -> anyhow::Result<Config> {
    let config = config::Config::builder()
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 3000_i64)?
        .set_default("server.log_level", "info")?
        .set_default("server.log_format", "text")?
        .set_default("server.body_limit_bytes", 100_i64 * 1024)?
        .set_default("pricing.table_path", "/etc/secrets/price.json")?
        .set_default("auth.api_token", "")?
        .add_source(config::File::from(path).required(false))
        .add_source(config::Environment::with_prefix(ENV_PREFIX).separator("__"))
        .set_override_option("auth.api_token", api_token)?
        .build()?;

    let cfg: Config = config.try_deserialize()?;
    validate_config(&cfg)?;

    Ok(cfg)
}

fn validate_config(cfg: &Config) -> anyhow::Result<()> {
    // An empty token would let requests without the header through
    if cfg.auth.api_token.is_empty() {
        anyhow::bail!(
            "API token must be configured (set {} or auth.api_token)",
            API_TOKEN_ENV
        );
    }

    if cfg.pricing.table_path.as_os_str().is_empty() {
        anyhow::bail!("pricing.table_path cannot be empty");
    }

    if cfg.server.body_limit_bytes == 0 {
        anyhow::bail!("server.body_limit_bytes must be greater than 0");
    }

    if cfg.server.host.parse::<IpAddr>().is_err() {
        anyhow::bail!("server.host '{}' is not a valid IP address", cfg.server.host);
    }

    Ok(())
}
