//! Wiring & DI. Entry point: load config, build adapters, serve the sync API.
//! No business logic here.

use board_sync::adapters::http;
use board_sync::adapters::integrations::{AsanaClient, TrelloClient};
use board_sync::ports::{BoardSourcePort, ProjectSinkPort, SyncPort};
use board_sync::shared::config::AppConfig;
use board_sync::usecases::SyncService;
use dotenv::dotenv;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env_loaded = dotenv();
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    match &env_loaded {
        Ok(path) => info!(path = %path.display(), "loaded .env"),
        Err(_) => info!("no .env found"),
    }

    let cfg = AppConfig::load().unwrap_or_default();
    let Some(trello_api_key) = cfg.trello_api_key() else {
        anyhow::bail!("Set TRELLO_API_KEY (env or .env). Get from https://trello.com/app-key");
    };
    let Some(trello_token) = cfg.trello_token() else {
        anyhow::bail!("Set TRELLO_TOKEN (env or .env). Get from https://trello.com/app-key");
    };
    let Some(asana_access_token) = cfg.asana_access_token() else {
        anyhow::bail!("Set ASANA_ACCESS_TOKEN (env or .env)");
    };

    // --- Adapters behind their ports ---
    let source: Arc<dyn BoardSourcePort> =
        Arc::new(TrelloClient::new(trello_api_key, trello_token));
    let sink: Arc<dyn ProjectSinkPort> = Arc::new(AsanaClient::new(asana_access_token));

    // --- Service + HTTP surface ---
    let sync: Arc<dyn SyncPort> = Arc::new(SyncService::new(source, sink));
    let router = http::router(sync);

    let port = cfg.port_or_default();
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    info!(port, "sync API listening");
    axum::serve(listener, router).await?;

    Ok(())
}
