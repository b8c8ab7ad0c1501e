use serde::{Deserialize, Serialize};

/// One price sample exactly as the data provider delivered it.
/// Any field may be missing or non-finite; the normalizer decides what survives.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RawSample {
    /// Epoch seconds.
    pub time: i64,
    pub open: Option<f64>,
    pub high: Option<f64>,
    pub low: Option<f64>,
    pub close: Option<f64>,
    pub volume: Option<f64>,
}

/// One validated OHLCV bar. Every field is finite.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    /// Epoch seconds.
    pub time: i64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

impl Candle {
    pub fn new(time: i64, open: f64, high: f64, low: f64, close: f64, volume: f64) -> Self {
        Self { time, open, high, low, close, volume }
    }
}

/// Directional classification derived from an indicator snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Bullish,
    Bearish,
    Neutral,
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Sentiment::Bullish => write!(f, "bullish"),
            Sentiment::Bearish => write!(f, "bearish"),
            Sentiment::Neutral => write!(f, "neutral"),
        }
    }
}

/// Instrument metadata passed through from the provider for annotation only.
/// Never used in any computation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstrumentMeta {
    pub currency: Option<String>,
    pub exchange_name: Option<String>,
    pub exchange_timezone_name: Option<String>,
    pub instrument_type: Option<String>,
    pub market_state: Option<String>,
}

/// What to fetch: one symbol sampled at `interval` over `range`
/// (provider vocabulary, e.g. "30m" / "5d").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartRequest {
    pub symbol: String,
    pub interval: String,
    pub range: String,
}

impl ChartRequest {
    pub fn new(
        symbol: impl Into<String>,
        interval: impl Into<String>,
        range: impl Into<String>,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            interval: interval.into(),
            range: range.into(),
        }
    }
}

/// A fully materialized provider response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    pub samples: Vec<RawSample>,
    pub meta: InstrumentMeta,
}
