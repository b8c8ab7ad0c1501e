use std::sync::Arc;

use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use analysis::{AnalysisSettings, SymbolDirectory};
use api::{AppState, RequestDefaults};
use common::{Config, Result};
use feed::YahooClient;

#[tokio::main]
async fn main() {
    // ── Logging ──────────────────────────────────────────────────────────────
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    if let Err(e) = run().await {
        error!(error = %e, "MarketLens exited with an error");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    // ── Config ────────────────────────────────────────────────────────────────
    let cfg = Config::from_env();
    info!(port = cfg.port, feed = %cfg.feed_base_url, "MarketLens starting");

    let settings = match &cfg.analysis_config_path {
        Some(path) => {
            info!(%path, "Loading analysis settings");
            AnalysisSettings::load(path)?
        }
        None => AnalysisSettings::default(),
    };

    let directory = match &cfg.symbols_path {
        Some(path) => SymbolDirectory::load(path)?,
        None => SymbolDirectory::default(),
    };
    info!(symbols = directory.len(), "Symbol directory ready");

    // ── Data feed ─────────────────────────────────────────────────────────────
    let provider = YahooClient::new(&cfg.feed_base_url, cfg.feed_user_agent.clone())?;

    // ── HTTP API ──────────────────────────────────────────────────────────────
    let state = AppState {
        provider: Arc::new(provider),
        settings: Arc::new(settings),
        directory: Arc::new(directory),
        defaults: Arc::new(RequestDefaults {
            symbol: cfg.default_symbol.clone(),
            interval: cfg.default_interval.clone(),
            range: cfg.default_range.clone(),
        }),
    };

    api::serve(state, cfg.port, shutdown_signal()).await?;
    info!("Shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Could not listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
