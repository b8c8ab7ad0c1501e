mod error;
pub mod routes;

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

use analysis::{AnalysisSettings, SymbolDirectory};
use common::{MarketDataProvider, Result};

pub use error::ApiError;

/// Shared application state injected into every route handler.
/// Everything is read-only; requests never share mutable state.
#[derive(Clone)]
pub struct AppState {
    pub provider: Arc<dyn MarketDataProvider>,
    pub settings: Arc<AnalysisSettings>,
    pub directory: Arc<SymbolDirectory>,
    pub defaults: Arc<RequestDefaults>,
}

/// Used when the query string leaves a parameter out.
#[derive(Debug, Clone)]
pub struct RequestDefaults {
    pub symbol: String,
    pub interval: String,
    pub range: String,
}

/// The full route table with middleware applied.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_headers(Any)
        .allow_methods(Any);

    Router::new()
        .merge(routes::market_router())
        .merge(routes::health_router())
        .with_state(state)
        .layer(CompressionLayer::new())
        .layer(cors)
}

/// Bind and run the HTTP server until `shutdown` resolves.
pub async fn serve(
    state: AppState,
    port: u16,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "Market API listening");

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown)
        .await?;
    Ok(())
}
