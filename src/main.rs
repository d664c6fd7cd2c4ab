use anyhow::{Context, Result};
use clap::Parser;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;

mod board;
mod config;
mod dashboard;
mod feed;

use board::Filter;
use config::Config;
use dashboard::AppState;
use feed::{FeedSource, FileFeed, HttpFeed};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialise tracing / logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = Config::parse();
    config.validate()?;

    let source: Arc<dyn FeedSource> = match &config.feed_base_url {
        Some(base) => Arc::new(
            HttpFeed::new(base, &config.feed_path, config.request_timeout())
                .context("Failed to configure HTTP feed")?,
        ),
        None => Arc::new(FileFeed::new(&config.feed_path)),
    };
    info!("Prediction feed: {}", source.describe());

    match config.refresh_interval() {
        Some(interval) => info!("Page auto-refresh every {:?}", interval),
        None => info!("Page auto-refresh disabled"),
    }

    let thresholds = config.thresholds();

    // One-shot mode: render once and exit
    if let Some(path) = &config.render_to {
        let html = dashboard::render_board_page(
            source.as_ref(),
            &thresholds,
            Filter::All,
            config.refresh_interval(),
        )
        .await;
        tokio::fs::write(path, html)
            .await
            .with_context(|| format!("Failed to write {}", path.display()))?;
        info!("Board written to {}", path.display());
        return Ok(());
    }

    let app = dashboard::router(AppState {
        source,
        thresholds,
        refresh: config.refresh_interval(),
    });
    let addr: SocketAddr = config
        .dashboard_addr
        .parse()
        .with_context(|| format!("Invalid dashboard address '{}'", config.dashboard_addr))?;
    info!("Dashboard listening on http://{}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;

    // Run dashboard server (blocks until shutdown)
    axum::serve(listener, app).await?;

    Ok(())
}
