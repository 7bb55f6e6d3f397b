use std::fs;
use std::sync::Arc;

use feed::FeedClient;
use sync::{Config, SyncService};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Startup failures are fatal: nothing has been processed yet
    let config = Config::from_env()?;
    fs::create_dir_all(&config.notes_dir)?;

    tracing::info!(
        "Syncing {} shelves into {}",
        config.shelves.len(),
        config.notes_dir.display()
    );

    let service = SyncService::new(Arc::new(FeedClient::new()), config);
    let summary = service.run().await;

    tracing::info!(
        "Sync complete: {} created, {} patched, {} unchanged, {} skipped",
        summary.created,
        summary.patched,
        summary.unchanged,
        summary.skipped
    );

    Ok(())
}
