use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use common::{Candle, ChartData, ChartRequest, Result, Sentiment};

use crate::classify::classify;
use crate::directory::SymbolDirectory;
use crate::indicators::{rsi, IndicatorSnapshot};
use crate::labels::labels_for;
use crate::normalize::normalize;
use crate::recommend::{compose, Recommendation};
use crate::score::{confidence, risk_score};
use crate::settings::AnalysisSettings;

/// ATR above this fraction of the latest close reads as elevated volatility.
const ELEVATED_VOLATILITY: f64 = 0.02;

/// The complete analysis result for one request. Built once, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketSnapshot {
    pub symbol: String,
    pub display_name: String,
    pub exchange_name: String,
    pub currency: String,
    pub market_state: String,
    pub price: PriceSummary,
    pub candles: Vec<Candle>,
    pub indicators: IndicatorSnapshot,
    pub recommendation: Recommendation,
    pub insights: Vec<String>,
    pub highlights: Vec<Highlight>,
    pub risk_score: u8,
    pub timeframe: Timeframe,
    pub last_updated: DateTime<Utc>,
    pub meta: SnapshotMeta,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceSummary {
    pub last: f64,
    pub change: f64,
    pub change_percent: f64,
    pub high: f64,
    pub low: f64,
    pub open: f64,
    pub previous_close: f64,
}

/// A labelled headline value for dashboards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Highlight {
    pub label: String,
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tone: Option<Tone>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Positive,
    Negative,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeframe {
    pub interval: String,
    pub range: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotMeta {
    pub timezone: String,
    pub exchange: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instrument_type: Option<String>,
}

/// Run the whole pipeline over one fetched chart.
///
/// normalize -> indicators -> sentiment -> confidence -> recommendation ->
/// risk -> price summary -> insights. Fails only with `Error::EmptyWindow`.
/// `as_of` is stamped into `last_updated` untouched, so identical inputs
/// always produce identical snapshots.
pub fn build_snapshot(
    chart: &ChartData,
    request: &ChartRequest,
    directory: &SymbolDirectory,
    settings: &AnalysisSettings,
    as_of: DateTime<Utc>,
) -> Result<MarketSnapshot> {
    let window = normalize(&chart.samples, settings.max_candles)?;

    let indicators = IndicatorSnapshot::compute(&window, settings);
    let sentiment = classify(&indicators);
    let confidence = confidence(&indicators);

    let latest = *window.latest();
    let previous = *window.previous();
    let recommendation = compose(
        sentiment,
        confidence,
        latest.close,
        indicators.atr,
        &settings.levels,
    );
    // Risk and commentary read the raw close; only reported levels are floored.
    let risk_score = risk_score(confidence, indicators.atr, latest.close);

    let price = price_summary(&window, &latest, &previous);
    let insights = insight_lines(sentiment, &indicators, latest.close);
    let highlights = highlights(&recommendation);
    let recommendation = rounded(recommendation, settings.levels.min_price);

    let meta = &chart.meta;
    let exchange = meta.exchange_name.clone().unwrap_or_else(|| "unknown".to_string());

    Ok(MarketSnapshot {
        symbol: request.symbol.clone(),
        display_name: directory.display_name(&request.symbol).to_string(),
        exchange_name: exchange.clone(),
        currency: meta.currency.clone().unwrap_or_else(|| "USD".to_string()),
        market_state: meta.market_state.clone().unwrap_or_else(|| "UNKNOWN".to_string()),
        price,
        candles: window.into_candles(),
        indicators,
        recommendation,
        insights,
        highlights,
        risk_score,
        timeframe: Timeframe {
            interval: request.interval.clone(),
            range: request.range.clone(),
        },
        last_updated: as_of,
        meta: SnapshotMeta {
            timezone: meta
                .exchange_timezone_name
                .clone()
                .unwrap_or_else(|| "UTC".to_string()),
            exchange,
            instrument_type: meta.instrument_type.clone(),
        },
    })
}

fn price_summary(window: &[Candle], latest: &Candle, previous: &Candle) -> PriceSummary {
    let change = latest.close - previous.close;
    let divisor = if previous.close != 0.0 { previous.close } else { latest.close };
    let change_percent = if divisor != 0.0 { change / divisor * 100.0 } else { 0.0 };

    let high = window.iter().map(|c| c.high).fold(f64::MIN, f64::max);
    let low = window.iter().map(|c| c.low).fold(f64::MAX, f64::min);
    let open = window.first().map(|c| c.open).unwrap_or(latest.open);

    PriceSummary {
        last: round_to(latest.close, 4),
        change: round_to(change, 4),
        change_percent: round_to(change_percent, 2),
        high: round_to(high, 4),
        low: round_to(low, 4),
        open: round_to(open, 4),
        previous_close: round_to(previous.close, 4),
    }
}

/// One line each for trend, RSI zone and ATR volatility.
///
/// A non-positive `close` never reads as elevated volatility.
fn insight_lines(sentiment: Sentiment, indicators: &IndicatorSnapshot, close: f64) -> Vec<String> {
    let rsi_line = if indicators.rsi > rsi::OVERBOUGHT {
        "RSI is in overbought territory; a correction remains possible."
    } else if indicators.rsi < rsi::OVERSOLD {
        "RSI is in oversold territory; a rebound is likely."
    } else {
        "RSI is in the neutral zone, which favours short-term trades."
    };

    let level = if close > 0.0 && indicators.atr > close * ELEVATED_VOLATILITY {
        "elevated"
    } else {
        "low"
    };

    vec![
        labels_for(sentiment).outlook.to_string(),
        rsi_line.to_string(),
        format!(
            "Average true range (ATR) is {:.4}, indicating {level} volatility.",
            indicators.atr
        ),
    ]
}

fn highlights(recommendation: &Recommendation) -> Vec<Highlight> {
    let sentiment = recommendation.sentiment;
    let confidence = recommendation.confidence;

    let momentum_tone = if confidence > 60.0 {
        Some(Tone::Positive)
    } else if confidence < 45.0 {
        Some(Tone::Negative)
    } else {
        None
    };

    vec![
        Highlight {
            label: "Trend state".to_string(),
            value: sentiment.to_string(),
            tone: Some(if sentiment == Sentiment::Bearish {
                Tone::Negative
            } else {
                Tone::Positive
            }),
        },
        Highlight {
            label: "Momentum strength".to_string(),
            value: format!("{confidence:.0}%"),
            tone: momentum_tone,
        },
        Highlight {
            label: "Entry plan".to_string(),
            value: format!(
                "Entry: {:.4} - Stop loss: {:.4} - Take profit: {:.4}",
                recommendation.entry_price, recommendation.stop_loss, recommendation.take_profit
            ),
            tone: None,
        },
    ]
}

/// Round the reported levels to 4 decimals without crossing the floor.
fn rounded(recommendation: Recommendation, floor: f64) -> Recommendation {
    let level = |v: f64| round_to(v, 4).max(floor);
    Recommendation {
        entry_price: level(recommendation.entry_price),
        stop_loss: level(recommendation.stop_loss),
        take_profit: level(recommendation.take_profit),
        ..recommendation
    }
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
