use anyhow::Result;
use axum::{extract::DefaultBodyLimit, middleware, routing::post, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::{
    auth,
    config::Config,
    handlers::{self, calc::AppState},
    pricing::{PriceCalculator, PriceTable},
    signals::shutdown_signal,
};

/// Start the pricing server
///
/// This function:
/// 1. Freezes the configuration and price table into shared state
/// 2. Creates the Axum application
/// 3. Binds to the configured address
/// 4. Serves requests until SIGTERM/SIGINT, then drains connections
pub async fn start_server(config: Config, table: PriceTable) -> Result<()> {
    let addr = config.server.socket_addr()?;

    info!("{}", startup_summary(&config, &table));

    let state = build_state(config, table);
    let app = create_router(state);

    info!("Starting pricing server on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let signal = shutdown_signal().await;
            info!(?signal, "Shutdown signal received, draining connections...");
        })
        .await?;

    info!("Server stopped gracefully");
    Ok(())
}

/// One-line configuration summary for the startup log; the token is
/// reported by length only
fn startup_summary(config: &Config, table: &PriceTable) -> String {
    format!(
        "Configuration: {} price tiers, API token ({} chars), body limit {} bytes",
        table.len(),
        config.auth.api_token.chars().count(),
        config.server.body_limit_bytes
    )
}

/// Wrap the loaded configuration and table for sharing across requests
pub fn build_state(config: Config, table: PriceTable) -> AppState {
    AppState {
        config: Arc::new(config),
        calculator: PriceCalculator::new(Arc::new(table)),
    }
}

/// Create the Axum router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    let body_limit = state.config.server.body_limit_bytes;

    Router::new()
        .route("/calc", post(handlers::calc::handle_calc))
        // Auth runs before the body is read, so a bad key is 403 whatever the body
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth::api_key_middleware,
        ))
        .with_state(state)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http())
}
