use async_trait::async_trait;

use crate::{ChartData, ChartRequest, Result};

/// Abstraction over the remote price-history source.
///
/// `YahooClient` in `crates/feed` implements this for production; tests
/// plug in fixed in-memory charts. The fetch always completes to a fully
/// materialized `ChartData` before any analysis runs.
#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Fetch raw samples and instrument metadata for one symbol/interval/range.
    async fn fetch_chart(&self, request: &ChartRequest) -> Result<ChartData>;
}
