use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use chrono::Utc;
use serde::Deserialize;
use tracing::info;

use analysis::{build_snapshot, MarketSnapshot};
use common::ChartRequest;

use crate::{ApiError, AppState};

pub fn market_router() -> Router<AppState> {
    Router::new().route("/api/market", get(get_market))
}

#[derive(Deserialize)]
struct MarketQuery {
    symbol: Option<String>,
    interval: Option<String>,
    range: Option<String>,
}

/// Fetch the chart, then run the analysis engine over the materialized samples.
async fn get_market(
    State(state): State<AppState>,
    Query(q): Query<MarketQuery>,
) -> Result<Json<MarketSnapshot>, ApiError> {
    let defaults = &state.defaults;
    let request = ChartRequest::new(
        non_empty(q.symbol).unwrap_or_else(|| defaults.symbol.clone()),
        non_empty(q.interval).unwrap_or_else(|| defaults.interval.clone()),
        non_empty(q.range).unwrap_or_else(|| defaults.range.clone()),
    );

    let chart = state.provider.fetch_chart(&request).await?;
    let snapshot = build_snapshot(
        &chart,
        &request,
        &state.directory,
        &state.settings,
        Utc::now(),
    )?;

    info!(
        symbol = %snapshot.symbol,
        sentiment = %snapshot.recommendation.sentiment,
        confidence = snapshot.recommendation.confidence,
        risk = snapshot.risk_score,
        candles = snapshot.candles.len(),
        "Snapshot built"
    );
    Ok(Json(snapshot))
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}
