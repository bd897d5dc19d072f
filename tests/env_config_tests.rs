/// Integration tests for the environment layers of configuration loading.
///
/// Kept in their own test binary with a single test so that setting process
/// environment variables cannot race other config tests.
use tiered_pricing::config;

#[test]
fn test_environment_overrides_file_and_supplies_token() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let config_path = dir.path().join("config.toml");
    std::fs::write(
        &config_path,
        "[server]\nport = 8088\nlog_level = \"debug\"\n\n[auth]\napi_token = \"file-token\"\n",
    )?;

    std::env::set_var("PRICING__SERVER__PORT", "9099");
    std::env::set_var(config::API_TOKEN_ENV, "envtok");

    let result = config::load_config(&config_path);

    std::env::remove_var("PRICING__SERVER__PORT");
    std::env::remove_var(config::API_TOKEN_ENV);

    let cfg = result?;
    assert_eq!(cfg.server.port, 9099);
    assert_eq!(cfg.auth.api_token, "envtok");
    // keys absent from the environment still come from the file
    assert_eq!(cfg.server.log_level, "debug");

    Ok(())
}
