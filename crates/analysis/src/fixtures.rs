use common::Candle;

/// Candle at `close` with a symmetric high/low band of `spread` around it.
pub fn bar(time: i64, close: f64, spread: f64) -> Candle {
    Candle::new(time, close, close + spread, close - spread, close, 1_000.0)
}

/// One candle per close, each with the same `spread`.
pub fn series(closes: &[f64], spread: f64) -> Vec<Candle> {
    closes
        .iter()
        .enumerate()
        .map(|(i, &close)| bar(i as i64 * 60, close, spread))
        .collect()
}

/// Closes rising by `step` from `start`.
pub fn rising(start: f64, step: f64, n: usize) -> Vec<f64> {
    (0..n).map(|i| start + i as f64 * step).collect()
}

/// Closes falling by `step` from `start`.
pub fn falling(start: f64, step: f64, n: usize) -> Vec<f64> {
    (0..n).map(|i| start - i as f64 * step).collect()
}
