use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use gronkhtv_addon::api::{create_router, AppState};
use gronkhtv_addon::config::Config;
use gronkhtv_addon::services::providers::gronkh::GronkhClient;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Wire the upstream client into the router state
    let provider = Arc::new(GronkhClient::new(config.gronkh_api_url.clone()));
    let app = create_router(AppState::new(provider));

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(addr = %addr, "GronkhTV addon listening");
    axum::serve(listener, app).await?;

    Ok(())
}
