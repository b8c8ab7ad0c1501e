use serde::Deserialize;

use common::{ChartData, Error, InstrumentMeta, RawSample, Result};

// ─── Wire types ───────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct ChartEnvelope {
    chart: ChartBody,
}

#[derive(Deserialize)]
struct ChartBody {
    #[serde(default)]
    result: Option<Vec<ChartResult>>,
    #[serde(default)]
    error: Option<ChartError>,
}

#[derive(Deserialize)]
struct ChartError {
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    description: Option<String>,
}

#[derive(Deserialize)]
struct ChartResult {
    #[serde(default)]
    meta: InstrumentMeta,
    #[serde(default)]
    timestamp: Vec<i64>,
    #[serde(default)]
    indicators: Option<QuoteBlock>,
}

#[derive(Deserialize)]
struct QuoteBlock {
    #[serde(default)]
    quote: Vec<Quote>,
}

/// Parallel arrays indexed like `timestamp`; any entry may be `null`.
#[derive(Deserialize)]
struct Quote {
    #[serde(default)]
    open: Vec<Option<f64>>,
    #[serde(default)]
    high: Vec<Option<f64>>,
    #[serde(default)]
    low: Vec<Option<f64>>,
    #[serde(default)]
    close: Vec<Option<f64>>,
    #[serde(default)]
    volume: Vec<Option<f64>>,
}

// ─── Parsing ──────────────────────────────────────────────────────────────────

/// Decode a chart response body into raw samples plus instrument metadata.
///
/// Samples are returned one per timestamp, unvalidated; dropping bad rows is
/// the normalizer's job.
pub fn parse_chart(body: &str) -> Result<ChartData> {
    let envelope: ChartEnvelope = serde_json::from_str(body)
        .map_err(|e| Error::Provider(format!("unreadable chart response: {e}")))?;

    let result = match envelope.chart.result.and_then(|r| r.into_iter().next()) {
        Some(result) => result,
        None => {
            let reason = envelope
                .chart
                .error
                .map(|e| {
                    let code = e.code.unwrap_or_else(|| "error".to_string());
                    match e.description {
                        Some(desc) => format!("{code}: {desc}"),
                        None => code,
                    }
                })
                .unwrap_or_else(|| "data is not available right now".to_string());
            return Err(Error::Provider(reason));
        }
    };

    let quote = result
        .indicators
        .and_then(|block| block.quote.into_iter().next());

    let quote = match quote {
        Some(q) if !result.timestamp.is_empty() => q,
        _ => return Err(Error::Provider("no price data for this symbol".to_string())),
    };

    let at = |series: &[Option<f64>], i: usize| series.get(i).copied().flatten();

    let samples = result
        .timestamp
        .iter()
        .enumerate()
        .map(|(i, &time)| RawSample {
            time,
            open: at(&quote.open, i),
            high: at(&quote.high, i),
            low: at(&quote.low, i),
            close: at(&quote.close, i),
            volume: at(&quote.volume, i),
        })
        .collect();

    Ok(ChartData {
        samples,
        meta: result.meta,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_samples_and_meta() {
        let body = json!({
            "chart": {
                "result": [{
                    "meta": {
                        "currency": "USD",
                        "symbol": "AAPL",
                        "exchangeName": "NMS",
                        "exchangeTimezoneName": "America/New_York",
                        "instrumentType": "EQUITY",
                        "regularMarketPrice": 190.1
                    },
                    "timestamp": [1700000000, 1700001800, 1700003600],
                    "indicators": {
                        "quote": [{
                            "open":   [189.0, null, 190.0],
                            "high":   [190.5, 191.0, 191.2],
                            "low":    [188.7, 189.5, null],
                            "close":  [190.0, 190.4, 190.1],
                            "volume": [120000, null, 98000]
                        }]
                    }
                }],
                "error": null
            }
        })
        .to_string();

        let chart = parse_chart(&body).unwrap();
        assert_eq!(chart.samples.len(), 3);
        assert_eq!(chart.samples[0].time, 1_700_000_000);
        assert_eq!(chart.samples[0].volume, Some(120_000.0));
        assert_eq!(chart.samples[1].open, None);
        assert_eq!(chart.samples[2].low, None);
        assert_eq!(chart.meta.exchange_name.as_deref(), Some("NMS"));
        assert_eq!(chart.meta.market_state, None);
    }

    #[test]
    fn short_quote_arrays_yield_missing_values() {
        let body = json!({
            "chart": { "result": [{
                "timestamp": [1, 2],
                "indicators": { "quote": [{ "open": [1.0], "close": [1.5] }] }
            }]}
        })
        .to_string();
        let chart = parse_chart(&body).unwrap();
        assert_eq!(chart.samples[1].open, None);
        assert_eq!(chart.samples[1].close, None);
        assert_eq!(chart.samples[0].high, None);
    }

    #[test]
    fn upstream_error_is_a_provider_error() {
        let body = json!({
            "chart": {
                "result": null,
                "error": { "code": "Not Found", "description": "No data found, symbol may be delisted" }
            }
        })
        .to_string();
        match parse_chart(&body) {
            Err(Error::Provider(msg)) => assert!(msg.contains("delisted"), "{msg}"),
            other => panic!("expected provider error, got {other:?}"),
        }
    }

    #[test]
    fn empty_result_list_is_a_provider_error() {
        let body = json!({ "chart": { "result": [] } }).to_string();
        assert!(matches!(parse_chart(&body), Err(Error::Provider(_))));
    }

    #[test]
    fn missing_timestamps_is_a_provider_error() {
        let body = json!({
            "chart": { "result": [{ "meta": {}, "indicators": { "quote": [{}] } }] }
        })
        .to_string();
        assert!(matches!(parse_chart(&body), Err(Error::Provider(_))));
    }

    #[test]
    fn missing_quote_block_is_a_provider_error() {
        let body = json!({
            "chart": { "result": [{ "timestamp": [1, 2], "indicators": { "quote": [] } }] }
        })
        .to_string();
        assert!(matches!(parse_chart(&body), Err(Error::Provider(_))));
    }

    #[test]
    fn non_json_body_is_a_provider_error() {
        let page = "<html><body>Service Unavailable</body></html>";
        match parse_chart(page) {
            Err(Error::Provider(msg)) => assert!(msg.contains("unreadable"), "{msg}"),
            other => panic!("expected provider error, got {other:?}"),
        }
    }
}
