//! Binary entrypoint for the TeachWise HTTP server.
//!
//! Configuration comes from environment variables (optionally via a `.env`
//! file); see [`teachwise_server::config`] for the full list.

use teachwise_server::config::ServerConfig;
use teachwise_server::router::build_router;
use teachwise_server::state::AppState;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = ServerConfig::from_env()?;
    tracing::debug!(?config, "configuration loaded");

    if config.api_key.is_none() {
        tracing::warn!(
            "GOOGLE_API_KEY not found; AI features are disabled and generation endpoints will return 503"
        );
    } else {
        tracing::info!(model = %config.model, "model gateway configured");
    }

    let state = AppState::from_config(&config);
    let app = build_router(state);

    let addr = config.bind_addr();
    tracing::info!("teachwise server starting on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
