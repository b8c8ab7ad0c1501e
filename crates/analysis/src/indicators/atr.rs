use common::Candle;

/// True range of every candle, oldest first.
///
/// The first candle has no previous close, so its range is `high - low`.
pub fn true_ranges(candles: &[Candle]) -> Vec<f64> {
    candles
        .iter()
        .enumerate()
        .map(|(i, candle)| {
            // abs(): tolerate defaulted (zero) extremes from the normalizer
            let hl = (candle.high - candle.low).abs();
            match i.checked_sub(1).map(|prev| candles[prev].close) {
                None => hl,
                Some(prev_close) => {
                    let hc = (candle.high - prev_close).abs();
                    let lc = (candle.low - prev_close).abs();
                    hl.max(hc).max(lc)
                }
            }
        })
        .collect()
}

/// Average true range: the simple mean of the trailing `period` true ranges
/// (all of them when the window is shorter). Not Wilder-smoothed.
pub fn atr(candles: &[Candle], period: usize) -> f64 {
    let ranges = true_ranges(candles);
    if ranges.is_empty() {
        return 0.0;
    }
    let start = ranges.len().saturating_sub(period.max(1));
    let tail = &ranges[start..];
    tail.iter().sum::<f64>() / tail.len() as f64
}
