//! Standalone test-data cleanup. Deletes marker-named Trello boards and
//! Asana projects with rate-limit-aware pacing.
//!
//! Operationally separate from the sync server; run it by hand after
//! integration runs.

use board_sync::adapters::integrations::{AsanaClient, TrelloClient};
use board_sync::ports::{BoardCleanupPort, ProjectCleanupPort};
use board_sync::shared::config::AppConfig;
use board_sync::usecases::CleanupService;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Pause between deletions.
const PACE: Duration = Duration::from_secs(1);

/// Pause before the single retry after a 429.
const BACKOFF: Duration = Duration::from_secs(10);

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cfg = AppConfig::load().unwrap_or_default();
    if !cfg.is_trello_configured() || !cfg.is_asana_configured() {
        anyhow::bail!("Set TRELLO_API_KEY, TRELLO_TOKEN and ASANA_ACCESS_TOKEN (env or .env)");
    }

    let boards: Arc<dyn BoardCleanupPort> = Arc::new(TrelloClient::new(
        cfg.trello_api_key().unwrap_or_default(),
        cfg.trello_token().unwrap_or_default(),
    ));
    let projects: Arc<dyn ProjectCleanupPort> = Arc::new(AsanaClient::new(
        cfg.asana_access_token().unwrap_or_default(),
    ));

    info!("starting test-data cleanup");
    let stats = CleanupService::new(boards, projects, PACE, BACKOFF)
        .run()
        .await;
    info!(
        boards = stats.boards_deleted,
        projects = stats.projects_deleted,
        "cleanup done"
    );

    Ok(())
}
